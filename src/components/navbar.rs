//! Navigation shell. Reads auth state to choose its links; no business
//! logic lives here.

use leptos::prelude::*;

use crate::auth::{logout, use_auth, use_session_store};
use crate::components::icons::{LogOut, Stethoscope};
use crate::web::dom;
use crate::web::router::{Link, use_router};

/// Fixed top bar. On the landing page it starts transparent and turns solid
/// once the page scrolls; everywhere else it is always solid.
#[component]
pub fn NavigationBar(#[prop(optional)] is_transparent: bool) -> impl IntoView {
    let auth_ctx = use_auth();
    let store = use_session_store();
    let router = use_router();

    let (scrolled, set_scrolled) = signal(false);

    // The subscription must not outlive this view; the handle unregisters
    // itself on drop.
    let listener = StoredValue::new_local(Some(dom::ScrollListener::new(move || {
        set_scrolled.set(dom::scroll_y() > 20.0);
    })));
    on_cleanup(move || {
        listener.try_update_value(|l| {
            l.take();
        });
    });

    let username = move || {
        auth_ctx
            .state
            .get()
            .session
            .map(|session| session.username)
    };

    let on_logout = move |_| {
        logout(&auth_ctx, &store);
        router.navigate("/login");
    };

    let bar_class = move || {
        let base = "navbar fixed top-0 left-0 right-0 z-50 px-4 sm:px-8 transition-all duration-300";
        if is_transparent && !scrolled.get() {
            format!("{base} bg-transparent text-white")
        } else {
            format!("{base} bg-base-100 shadow-lg")
        }
    };

    view! {
        <nav class=bar_class>
            <div class="flex-1">
                <Link to="/" attr:class="btn btn-ghost text-xl gap-2">
                    <Stethoscope attr:class="h-6 w-6 text-primary" />
                    "Klinik Javen"
                </Link>
            </div>
            <div class="flex-none gap-2">
                <Show
                    when=move || username().is_some()
                    fallback=move || view! {
                        <Link to="/login" attr:class="btn btn-ghost">"Login"</Link>
                        <Link to="/register" attr:class="btn btn-primary">"Register"</Link>
                    }
                >
                    <span class="hidden md:inline px-2">
                        "Halo, " {move || username().unwrap_or_default()}
                    </span>
                    <Link to="/app" attr:class="btn btn-ghost">"Dashboard"</Link>
                    <button on:click=on_logout class="btn btn-outline btn-error gap-2">
                        <LogOut attr:class="h-4 w-4" />
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}

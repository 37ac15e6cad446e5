//! Klinik Javen booking frontend.
//!
//! Context-driven layering:
//! - `web::route` / `web::router`: navigation domain model and engine
//! - `session` / `auth`: persisted session and its reactive mirror
//! - `api`: HTTP client for the booking backend
//! - `components`: the UI layer

mod api;
mod auth;
mod components {
    mod appointment_card;
    mod appointment_dialog;
    pub mod dashboard;
    mod icons;
    pub mod landing;
    pub mod login;
    mod navbar;
    pub mod register;
}
mod session;

use crate::api::KlinikApi;
use crate::auth::{AuthContext, init_auth};
use crate::components::dashboard::DashboardPage;
use crate::components::landing::LandingPage;
use crate::components::login::LoginPage;
use crate::components::register::RegisterPage;
use crate::session::SessionStore;

use leptos::prelude::*;

// Native web API wrappers: thin layers over `web_sys` so the rest of the
// crate never touches the browser directly.
pub(crate) mod web {
    pub mod dom;
    pub mod route;
    pub mod router;
    mod storage;

    pub use storage::LocalStorage;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// Maps the current route to its page component.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Landing => view! { <LandingPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Halaman tidak ditemukan"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // One session store and one API client for the whole tree, injected via
    // Context so every view receives the same instances.
    let session_store = SessionStore::new(web::LocalStorage);
    provide_context(session_store);
    provide_context(KlinikApi::default());

    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // Hydrate auth state from the persisted session before routing.
    init_auth(&auth_ctx, &session_store);

    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}

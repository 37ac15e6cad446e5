mod form_state;

use leptos::prelude::*;
use leptos::task::spawn_local;

use self::form_state::RegisterDraft;

use crate::api::use_api;
use crate::components::icons::AlertCircle;
use crate::components::navbar::NavigationBar;
use crate::web::router::{Link, use_router};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let router = use_router();
    let api = StoredValue::new(use_api());

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        set_error_msg.set(None);

        let draft = RegisterDraft {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        // Local check, no request leaves the browser on a mismatch.
        let body = match draft.to_request() {
            Ok(body) => body,
            Err(message) => {
                set_error_msg.set(Some(message.to_string()));
                return;
            }
        };

        set_is_submitting.set(true);
        let api = api.get_value();
        spawn_local(async move {
            match api.register(&body).await {
                Ok(envelope) if envelope.success => {
                    router.navigate("/login");
                }
                Ok(envelope) => {
                    set_error_msg.set(Some(envelope.message_or("Gagal mendaftar").to_string()));
                }
                Err(_) => {
                    set_error_msg.set(Some("Gagal mendaftar. Silakan coba lagi.".to_string()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <NavigationBar />

            <div class="hero min-h-screen">
                <div class="hero-content flex-col w-full max-w-md">
                    <div class="text-center mb-4">
                        <h1 class="text-3xl font-bold">"Buat Akun Baru"</h1>
                        <p class="text-base-content/70 mt-2">
                            "Daftar untuk mengakses layanan Klinik Javen"
                        </p>
                    </div>

                    <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                        <form class="card-body" on:submit=on_submit>
                            <Show when=move || error_msg.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <AlertCircle attr:class="h-5 w-5 shrink-0" />
                                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                                </div>
                            </Show>

                            <div class="form-control">
                                <label class="label" for="username">
                                    <span class="label-text">"Username"</span>
                                </label>
                                <input
                                    id="username"
                                    type="text"
                                    placeholder="Username"
                                    on:input=move |ev| set_username.set(event_target_value(&ev))
                                    prop:value=username
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="email">
                                    <span class="label-text">"Email"</span>
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    placeholder="nama@email.com"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="password">
                                    <span class="label-text">"Password"</span>
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    placeholder="••••••••"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="confirm-password">
                                    <span class="label-text">"Konfirmasi Password"</span>
                                </label>
                                <input
                                    id="confirm-password"
                                    type="password"
                                    placeholder="••••••••"
                                    on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                                    prop:value=confirm_password
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control mt-6">
                                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                    {move || if is_submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "Memproses..." }.into_any()
                                    } else {
                                        "Daftar".into_any()
                                    }}
                                </button>
                            </div>
                        </form>
                    </div>

                    <p class="text-base-content/70">
                        "Sudah memiliki akun? "
                        <Link to="/login" attr:class="link link-primary font-medium">
                            "Masuk"
                        </Link>
                    </p>
                </div>
            </div>
        </div>
    }
}

use leptos::prelude::*;

use crate::auth::use_auth;
use crate::components::icons::{CalendarDays, Stethoscope, UserRound};
use crate::components::navbar::NavigationBar;
use crate::web::router::Link;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth_ctx = use_auth();

    // Logged-in visitors go straight to their dashboard from the CTA.
    let cta_target = move || {
        if auth_ctx.state.get().session.is_some() {
            "/app"
        } else {
            "/register"
        }
    };

    view! {
        <div class="min-h-screen bg-base-100">
            <NavigationBar is_transparent=true />

            <div class="hero min-h-screen bg-gradient-to-r from-sky-700 to-cyan-400 text-white">
                <div class="hero-content text-center">
                    <div class="max-w-xl">
                        <h1 class="text-5xl font-bold">"Klinik Javen"</h1>
                        <p class="py-6 text-lg">
                            "Reservasi dokter tanpa antri. Buat, ubah, dan batalkan janji temu Anda kapan saja."
                        </p>
                        <Link to=cta_target() attr:class="btn btn-lg bg-white text-sky-700 hover:bg-gray-100 border-0">
                            "Buat Janji Temu"
                        </Link>
                    </div>
                </div>
            </div>

            <div class="max-w-5xl mx-auto py-16 px-4 grid gap-8 md:grid-cols-3">
                <div class="card bg-base-200">
                    <div class="card-body items-center text-center">
                        <CalendarDays attr:class="h-10 w-10 text-primary" />
                        <h2 class="card-title">"Reservasi Mudah"</h2>
                        <p>"Pilih dokter dan jadwal yang sesuai, tanpa perlu menelepon atau mengantri."</p>
                    </div>
                </div>
                <div class="card bg-base-200">
                    <div class="card-body items-center text-center">
                        <Stethoscope attr:class="h-10 w-10 text-primary" />
                        <h2 class="card-title">"Dokter Terpercaya"</h2>
                        <p>"Dokter spesialis berpengalaman untuk kebutuhan kesehatan Anda dan keluarga."</p>
                    </div>
                </div>
                <div class="card bg-base-200">
                    <div class="card-body items-center text-center">
                        <UserRound attr:class="h-10 w-10 text-primary" />
                        <h2 class="card-title">"Akun Pribadi"</h2>
                        <p>"Semua janji temu Anda tersimpan dan dapat dikelola dari satu dashboard."</p>
                    </div>
                </div>
            </div>

            <footer class="footer footer-center p-6 bg-base-200 text-base-content">
                <p>"Klinik Javen"</p>
            </footer>
        </div>
    }
}

//! Appointment dashboard.
//!
//! Owns the appointment/doctor list state and the shared create/edit modal.
//! Create and update re-fetch the whole list on success; delete prunes the
//! local copy after the backend confirms. See `sync` for the pure parts.

pub mod sync;

use klinik_shared::{ApiResponse, Appointment, Doctor};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::auth::use_session_store;
use crate::components::appointment_card::AppointmentCard;
use crate::components::appointment_dialog::{AppointmentDialog, AppointmentDraft};
use crate::components::icons::Plus;
use crate::components::navbar::NavigationBar;
use crate::web::dom;
use crate::web::router::use_router;
use self::sync::{LoadCycle, SubmitTarget, remove_appointment};

const LOAD_ERROR: &str = "Gagal memuat data. Silakan refresh halaman.";
const SAVE_ERROR: &str = "Gagal menyimpan janji temu";
const DELETE_ERROR: &str = "Gagal menghapus janji temu";

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_session_store();
    let router = use_router();
    let api = StoredValue::new(use_api());

    let (appointments, set_appointments) = signal(Vec::<Appointment>::new());
    let (doctors, set_doctors) = signal(Vec::<Doctor>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (show_modal, set_show_modal) = signal(false);
    let (editing, set_editing) = signal(Option::<Appointment>::None);
    let draft = RwSignal::new(AppointmentDraft::new());
    let (is_submitting, set_is_submitting) = signal(false);

    // Responses are only applied while their generation is current, so a
    // superseded re-fetch or a disposed dashboard can't clobber state. The
    // same check covers submit and delete completions.
    let load_cycle = StoredValue::new_local(LoadCycle::new());
    on_cleanup(move || {
        load_cycle.try_with_value(|cycle| cycle.retire());
    });
    let cycle_is_current = move |generation: u64| {
        load_cycle.try_with_value(|cycle| cycle.is_current(generation)) == Some(true)
    };

    let load_data = move || {
        let Some(user_id) = store.user_id() else {
            return;
        };
        let Some(generation) = load_cycle.try_with_value(|cycle| cycle.begin()) else {
            return;
        };

        set_is_loading.set(true);
        set_error.set(None);

        // Two independent fetches; each updates its own slice, so their
        // completion order does not matter.
        let appointments_api = api.get_value();
        spawn_local(async move {
            let result = appointments_api.get_appointments(user_id).await;
            if !cycle_is_current(generation) {
                return;
            }
            match result {
                Ok(envelope) if envelope.success => {
                    set_appointments.set(envelope.payload.unwrap_or_default());
                }
                Ok(envelope) => {
                    set_error.set(Some(envelope.message_or(LOAD_ERROR).to_string()));
                }
                Err(_) => set_error.set(Some(LOAD_ERROR.to_string())),
            }
            set_is_loading.set(false);
        });

        let doctors_api = api.get_value();
        spawn_local(async move {
            let result = doctors_api.get_doctors().await;
            if !cycle_is_current(generation) {
                return;
            }
            match result {
                Ok(envelope) if envelope.success => {
                    set_doctors.set(envelope.payload.unwrap_or_default());
                }
                Ok(envelope) => {
                    set_error.set(Some(envelope.message_or(LOAD_ERROR).to_string()));
                }
                Err(_) => set_error.set(Some(LOAD_ERROR.to_string())),
            }
        });
    };

    // The router guard already bounces anonymous visits, but the view
    // double-checks the store before fetching with a stale user id.
    Effect::new(move |_| {
        if store.is_logged_in() {
            load_data();
        } else {
            router.navigate("/login");
        }
    });

    let reset_form = move || {
        draft.set(AppointmentDraft::new());
        set_editing.set(None);
    };

    let open_create = move |_| {
        reset_form();
        set_show_modal.set(true);
    };

    let open_edit = Callback::new(move |appointment: Appointment| {
        draft.set(AppointmentDraft::from_appointment(&appointment));
        set_editing.set(Some(appointment));
        set_show_modal.set(true);
    });

    let close_modal = move || {
        set_show_modal.set(false);
        reset_form();
    };

    let finish_submit = move |generation: u64, result: Result<ApiResponse<Appointment>, String>| {
        if !cycle_is_current(generation) {
            return;
        }
        match result {
            Ok(envelope) if envelope.success => {
                load_data();
                close_modal();
            }
            Ok(envelope) => {
                set_error.set(Some(envelope.message_or(SAVE_ERROR).to_string()));
            }
            Err(_) => {
                set_error.set(Some(format!("{SAVE_ERROR}. Silakan coba lagi.")));
            }
        }
        set_is_submitting.set(false);
    };

    let handle_submit = Callback::new(move |_: ()| {
        // Dedup guard: one submission in flight at a time.
        if is_submitting.get_untracked() {
            return;
        }
        let Some(user_id) = store.user_id() else {
            return;
        };

        let current = draft.get_untracked();
        if !current.is_complete() {
            set_error.set(Some("Pilih dokter dan jadwal terlebih dahulu".to_string()));
            return;
        }

        let Some(generation) = load_cycle.try_with_value(|cycle| cycle.current()) else {
            return;
        };

        set_error.set(None);
        set_is_submitting.set(true);

        let api = api.get_value();
        match SubmitTarget::for_editing(editing.get_untracked().as_ref()) {
            SubmitTarget::Update(id) => {
                let Some(body) = current.to_update_request() else {
                    set_is_submitting.set(false);
                    return;
                };
                spawn_local(async move {
                    finish_submit(generation, api.update_appointment(id, &body).await);
                });
            }
            SubmitTarget::Create => {
                let Some(body) = current.to_create_request(user_id) else {
                    set_is_submitting.set(false);
                    return;
                };
                spawn_local(async move {
                    finish_submit(generation, api.create_appointment(&body).await);
                });
            }
        }
    });

    let handle_delete = Callback::new(move |id: i64| {
        if !dom::confirm("Anda yakin ingin membatalkan janji temu ini?") {
            return;
        }
        let Some(generation) = load_cycle.try_with_value(|cycle| cycle.current()) else {
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            let result = api.delete_appointment(id).await;
            if !cycle_is_current(generation) {
                return;
            }
            match result {
                Ok(envelope) if envelope.success => {
                    // Optimistic local prune, no re-fetch.
                    set_appointments.update(|list| remove_appointment(list, id));
                }
                Ok(envelope) => {
                    set_error.set(Some(envelope.message_or(DELETE_ERROR).to_string()));
                }
                Err(_) => {
                    set_error.set(Some(format!("{DELETE_ERROR}. Silakan coba lagi.")));
                }
            }
        });
    });

    let has_appointments = move || appointments.with(|list| !list.is_empty());
    let show_spinner = move || is_loading.get() && !show_modal.get();

    view! {
        <div class="min-h-screen bg-base-200">
            <NavigationBar />

            <main class="pt-24 max-w-4xl mx-auto px-4 pb-12">
                <div class="flex justify-between items-center mb-6">
                    <h1 class="text-2xl font-bold">"Janji Temu Saya"</h1>
                    <button class="btn btn-primary gap-2" on:click=open_create>
                        <Plus attr:class="h-5 w-5" />
                        "Buat Janji Temu"
                    </button>
                </div>

                <Show when=move || error.get().is_some()>
                    <div role="alert" class="alert alert-error mb-4">
                        <span>{move || error.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <Show
                    when=move || !show_spinner()
                    fallback=|| view! {
                        <div class="text-center py-10">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                            <p class="mt-2 text-base-content/70">"Loading..."</p>
                        </div>
                    }
                >
                    <Show
                        when=has_appointments
                        fallback=|| view! {
                            <div class="card bg-base-100 shadow-md">
                                <div class="card-body text-center">
                                    <p class="text-base-content/70">
                                        "Anda belum memiliki janji temu. Buat janji temu pertama Anda sekarang!"
                                    </p>
                                </div>
                            </div>
                        }
                    >
                        <div class="space-y-4">
                            <For
                                each=move || appointments.get()
                                key=|appointment| appointment.id
                                children=move |appointment| {
                                    view! {
                                        <AppointmentCard
                                            appointment
                                            on_edit=open_edit
                                            on_delete=handle_delete
                                        />
                                    }
                                }
                            />
                        </div>
                    </Show>
                </Show>
            </main>

            <AppointmentDialog
                open=show_modal
                draft=draft
                doctors=doctors
                editing=editing
                error=error
                is_submitting=is_submitting
                on_submit=handle_submit
                on_close=Callback::new(move |_: ()| close_modal())
            />
        </div>
    }
}

//! The single modal form shared by create and edit.

mod form_state;

pub use form_state::AppointmentDraft;

use klinik_shared::{Appointment, Doctor};
use leptos::prelude::*;

use crate::components::icons::{AlertCircle, X};

#[component]
pub fn AppointmentDialog(
    /// Whether the modal is visible. Only the dashboard flips this, so at
    /// most one modal exists at a time.
    open: ReadSignal<bool>,
    /// Shared form draft, owned by the dashboard.
    draft: RwSignal<AppointmentDraft>,
    /// Doctor directory for the selection control.
    doctors: ReadSignal<Vec<Doctor>>,
    /// The appointment being edited, `None` when creating.
    editing: ReadSignal<Option<Appointment>>,
    error: ReadSignal<Option<String>>,
    is_submitting: ReadSignal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    // Drive the native <dialog> element from the `open` signal.
    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let title = move || {
        if editing.get().is_some() {
            "Edit Janji Temu"
        } else {
            "Buat Janji Temu Baru"
        }
    };

    let submit_label = move || {
        if editing.get().is_some() {
            "Perbarui"
        } else {
            "Simpan"
        }
    };

    let handle_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| on_close.run(())>
            <div class="modal-box">
                <div class="flex justify-between items-center mb-2">
                    <h3 class="font-bold text-lg">{title}</h3>
                    <button
                        type="button"
                        class="btn btn-ghost btn-sm btn-circle"
                        aria-label="Tutup"
                        on:click=move |_| on_close.run(())
                    >
                        <X attr:class="h-5 w-5" />
                    </button>
                </div>

                <Show when=move || error.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2 mb-2">
                        <AlertCircle attr:class="h-5 w-5 shrink-0" />
                        <span>{move || error.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <form on:submit=handle_submit class="space-y-4">
                    <div class="form-control">
                        <label class="label" for="doctor">
                            <span class="label-text">"Dokter"</span>
                        </label>
                        <select
                            id="doctor"
                            class="select select-bordered w-full"
                            required
                            prop:value=move || draft.with(|d| d.doctor_id.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.doctor_id = value);
                            }
                        >
                            <option value="">"-- Pilih Dokter --"</option>
                            <For
                                each=move || doctors.get()
                                key=|doctor| doctor.id
                                children=move |doctor| {
                                    let value = doctor.id.to_string();
                                    let selected = {
                                        let value = value.clone();
                                        move || draft.with(|d| d.doctor_id == value)
                                    };
                                    view! {
                                        <option value=value selected=selected>
                                            {format!("{} - {}", doctor.name, doctor.specialization)}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>

                    <div class="form-control">
                        <label class="label" for="date-time">
                            <span class="label-text">"Tanggal dan Waktu"</span>
                        </label>
                        <input
                            id="date-time"
                            type="datetime-local"
                            class="input input-bordered w-full"
                            required
                            prop:value=move || draft.with(|d| d.date_time.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.date_time = value);
                            }
                        />
                    </div>

                    <div class="modal-action">
                        <button
                            type="button"
                            class="btn btn-ghost"
                            on:click=move |_| on_close.run(())
                        >
                            "Batal"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "Menyimpan..." }.into_any()
                            } else {
                                submit_label().into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}

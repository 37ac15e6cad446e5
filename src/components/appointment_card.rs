use klinik_shared::{Appointment, date};
use leptos::prelude::*;

use crate::components::icons::{Pencil, Trash2};

/// One appointment row with edit/cancel actions.
#[component]
pub fn AppointmentCard(
    appointment: Appointment,
    on_edit: Callback<Appointment>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let schedule = date::format_display(&appointment.date_time);
    let id = appointment.id;
    let edit_target = appointment.clone();

    view! {
        <div class="card bg-base-100 shadow-md border-l-4 border-primary">
            <div class="card-body flex-row justify-between items-start p-6">
                <div>
                    <h3 class="card-title text-lg">{appointment.doctor.name.clone()}</h3>
                    <p class="text-sm text-base-content/70">
                        {appointment.doctor.specialization.clone()}
                    </p>
                    <p class="text-sm mt-2">
                        <span class="font-medium">"Jadwal: "</span>
                        {schedule}
                    </p>
                </div>
                <div class="flex gap-2">
                    <button
                        class="btn btn-ghost btn-circle btn-sm text-primary"
                        aria-label="Ubah janji temu"
                        on:click=move |_| on_edit.run(edit_target.clone())
                    >
                        <Pencil attr:class="h-5 w-5" />
                    </button>
                    <button
                        class="btn btn-ghost btn-circle btn-sm text-error"
                        aria-label="Batalkan janji temu"
                        on:click=move |_| on_delete.run(id)
                    >
                        <Trash2 attr:class="h-5 w-5" />
                    </button>
                </div>
            </div>
        </div>
    }
}

//! Pure pieces of the dashboard's list synchronization flow.
//!
//! The consistency model is deliberate: create and update re-fetch the whole
//! list (small lists, short staleness window), while delete prunes the local
//! copy optimistically and skips the round trip. [`LoadCycle`] guards every
//! re-fetch and every mutation completion so a response from a superseded
//! cycle, or from a view that has since been disposed, never overwrites
//! newer state.

use klinik_shared::Appointment;
use std::cell::Cell;

/// Which remote call a form submission dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    /// Update the appointment with this id.
    Update(i64),
}

impl SubmitTarget {
    /// Editing an existing appointment updates it; otherwise a new one is
    /// created.
    pub fn for_editing(editing: Option<&Appointment>) -> Self {
        match editing {
            Some(appointment) => Self::Update(appointment.id),
            None => Self::Create,
        }
    }
}

/// Drop the appointment with `id` from the local list. No-op when absent.
pub fn remove_appointment(list: &mut Vec<Appointment>, id: i64) {
    list.retain(|appointment| appointment.id != id);
}

/// Monotonic generation counter, one per dashboard instance.
///
/// Each `loadData` run begins a new generation and tags its in-flight
/// requests with it; a response is applied only while its generation is
/// still current.
#[derive(Debug, Default)]
pub struct LoadCycle {
    generation: Cell<u64>,
}

impl LoadCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load cycle, invalidating all earlier ones.
    pub fn begin(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    /// Generation to tag a mutation dispatched now. Unlike [`begin`](Self::begin)
    /// this invalidates nothing; the completion is simply dropped if the
    /// cycle moved on (or the dashboard was disposed) in the meantime.
    pub fn current(&self) -> u64 {
        self.generation.get()
    }

    /// Invalidate every outstanding request without starting a new cycle.
    /// Called when the dashboard is disposed.
    pub fn retire(&self) {
        self.generation.set(self.generation.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use klinik_shared::Doctor;
    use serde_json::Map;

    // =========================================================
    // Helpers
    // =========================================================

    fn appointment(id: i64) -> Appointment {
        Appointment {
            id,
            doctor_id: 1,
            date_time: "2026-09-01T09:30:00Z".to_string(),
            doctor: Doctor {
                id: 1,
                name: "dr. Ayu".to_string(),
                specialization: "Umum".to_string(),
            },
            extra: Map::new(),
        }
    }

    // =========================================================
    // Submit routing
    // =========================================================

    #[test]
    fn editing_dispatches_update_with_that_id() {
        let existing = appointment(31);
        assert_eq!(
            SubmitTarget::for_editing(Some(&existing)),
            SubmitTarget::Update(31)
        );
    }

    #[test]
    fn no_editing_target_dispatches_create() {
        assert_eq!(SubmitTarget::for_editing(None), SubmitTarget::Create);
    }

    // =========================================================
    // Optimistic delete
    // =========================================================

    #[test]
    fn delete_prunes_locally_without_refetch() {
        let mut list = vec![appointment(1), appointment(2), appointment(3)];
        remove_appointment(&mut list, 2);
        assert_eq!(
            list.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn delete_of_unknown_id_changes_nothing() {
        let mut list = vec![appointment(1)];
        remove_appointment(&mut list, 99);
        assert_eq!(list.len(), 1);
    }

    // =========================================================
    // Load generations
    // =========================================================

    #[test]
    fn stale_generation_is_rejected() {
        let cycle = LoadCycle::new();
        let first = cycle.begin();
        let second = cycle.begin();

        assert!(!cycle.is_current(first));
        assert!(cycle.is_current(second));
    }

    #[test]
    fn retire_invalidates_outstanding_requests() {
        let cycle = LoadCycle::new();
        let generation = cycle.begin();
        cycle.retire();
        assert!(!cycle.is_current(generation));
    }

    #[test]
    fn mutation_completion_after_disposal_is_rejected() {
        let cycle = LoadCycle::new();
        cycle.begin();

        let snapshot = cycle.current();
        assert!(cycle.is_current(snapshot));

        cycle.retire();
        assert!(!cycle.is_current(snapshot));
    }

    #[test]
    fn mutation_snapshot_does_not_invalidate_loads() {
        let cycle = LoadCycle::new();
        let load = cycle.begin();

        let snapshot = cycle.current();
        assert!(cycle.is_current(load));
        assert_eq!(snapshot, load);
    }

    #[test]
    fn slices_fill_regardless_of_arrival_order() {
        // Appointments and doctors resolve independently; applying the
        // responses in reverse order must end in the same state.
        let cycle = LoadCycle::new();
        let generation = cycle.begin();

        let mut appointments: Vec<Appointment> = Vec::new();
        let mut doctors: Vec<Doctor> = Vec::new();

        let fetched_appointments = vec![appointment(1), appointment(2)];
        let fetched_doctors = vec![Doctor {
            id: 1,
            name: "dr. Ayu".to_string(),
            specialization: "Umum".to_string(),
        }];

        // Doctors arrive first this time.
        if cycle.is_current(generation) {
            doctors = fetched_doctors.clone();
        }
        if cycle.is_current(generation) {
            appointments = fetched_appointments.clone();
        }

        assert_eq!(appointments, fetched_appointments);
        assert_eq!(doctors, fetched_doctors);
    }
}

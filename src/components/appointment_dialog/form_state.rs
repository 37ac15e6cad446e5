//! Draft state for the shared create/edit appointment form.
//!
//! The draft holds the raw control values (both are strings in the DOM) and
//! owns the conversions to request payloads, so the dialog component stays
//! pure wiring.

use klinik_shared::protocol::{CreateAppointmentRequest, UpdateAppointmentRequest};
use klinik_shared::{Appointment, date};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentDraft {
    /// Selected doctor id as the `<select>` reports it; empty = nothing chosen.
    pub doctor_id: String,
    /// `datetime-local` value, minute precision.
    pub date_time: String,
}

impl AppointmentDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the form from an existing appointment for editing. The wire
    /// timestamp is projected to the input control's format; if it cannot be
    /// parsed the field starts empty and the user picks a new time.
    pub fn from_appointment(appointment: &Appointment) -> Self {
        Self {
            doctor_id: appointment.doctor_id.to_string(),
            date_time: date::to_input_value(&appointment.date_time).unwrap_or_default(),
        }
    }

    /// Both controls carry `required`, but submission re-checks here so a
    /// dispatch can never fire with an unusable draft.
    pub fn is_complete(&self) -> bool {
        self.parsed_doctor_id().is_some() && !self.date_time.trim().is_empty()
    }

    fn parsed_doctor_id(&self) -> Option<i64> {
        self.doctor_id.trim().parse().ok()
    }

    pub fn to_create_request(&self, user_id: i64) -> Option<CreateAppointmentRequest> {
        if !self.is_complete() {
            return None;
        }
        Some(CreateAppointmentRequest {
            user_id,
            doctor_id: self.parsed_doctor_id()?,
            date_time: self.date_time.clone(),
        })
    }

    pub fn to_update_request(&self) -> Option<UpdateAppointmentRequest> {
        if !self.is_complete() {
            return None;
        }
        Some(UpdateAppointmentRequest {
            doctor_id: self.parsed_doctor_id()?,
            date_time: self.date_time.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use klinik_shared::Doctor;
    use serde_json::Map;

    fn sample_appointment() -> Appointment {
        Appointment {
            id: 9,
            doctor_id: 4,
            date_time: "2026-10-02T13:00:00Z".to_string(),
            doctor: Doctor {
                id: 4,
                name: "dr. Bima".to_string(),
                specialization: "Anak".to_string(),
            },
            extra: Map::new(),
        }
    }

    #[test]
    fn starts_empty() {
        let draft = AppointmentDraft::new();
        assert_eq!(draft, AppointmentDraft::default());
        assert!(!draft.is_complete());
    }

    #[test]
    fn populates_from_existing_appointment() {
        let draft = AppointmentDraft::from_appointment(&sample_appointment());
        assert_eq!(draft.doctor_id, "4");
        assert_eq!(draft.date_time, "2026-10-02T13:00");
        assert!(draft.is_complete());
    }

    #[test]
    fn unparsable_wire_time_leaves_field_empty() {
        let mut appointment = sample_appointment();
        appointment.date_time = "segera".to_string();
        let draft = AppointmentDraft::from_appointment(&appointment);
        assert_eq!(draft.date_time, "");
        assert!(!draft.is_complete());
    }

    #[test]
    fn converts_to_create_request_with_user_id() {
        let draft = AppointmentDraft {
            doctor_id: "4".to_string(),
            date_time: "2026-10-02T13:00".to_string(),
        };
        let req = draft.to_create_request(42).unwrap();
        assert_eq!(req.user_id, 42);
        assert_eq!(req.doctor_id, 4);
        assert_eq!(req.date_time, "2026-10-02T13:00");
    }

    #[test]
    fn converts_to_update_request_without_user_id() {
        let draft = AppointmentDraft {
            doctor_id: "7".to_string(),
            date_time: "2026-10-02T13:00".to_string(),
        };
        let req = draft.to_update_request().unwrap();
        assert_eq!(req.doctor_id, 7);
    }

    #[test]
    fn incomplete_draft_converts_to_nothing() {
        let no_doctor = AppointmentDraft {
            doctor_id: String::new(),
            date_time: "2026-10-02T13:00".to_string(),
        };
        assert!(no_doctor.to_create_request(1).is_none());

        let no_time = AppointmentDraft {
            doctor_id: "4".to_string(),
            date_time: "  ".to_string(),
        };
        assert!(no_time.to_update_request().is_none());
    }
}

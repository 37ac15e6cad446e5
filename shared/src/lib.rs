use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod date;
pub mod protocol;

// =========================================================
// Constants
// =========================================================

/// LocalStorage key holding the persisted session record.
pub const SESSION_STORAGE_KEY: &str = "user";

// =========================================================
// Domain models
// =========================================================

/// The logged-in user's record, sourced from the login/register response.
///
/// The backend attaches fields beyond the three we read (timestamps, role
/// flags, ...). They are captured in `extra` so a save/load round trip
/// persists the payload verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Session {
    pub fn new(id: i64, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            extra: Map::new(),
        }
    }
}

/// Read-only reference data for the doctor selection control.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialization: String,
}

/// One booked appointment as the backend reports it.
///
/// `date_time` stays the wire string; the helpers in [`date`] project it to
/// the input control and display formats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub doctor_id: i64,
    pub date_time: String,
    pub doctor: Doctor,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// =========================================================
// Response envelope
// =========================================================

/// The `{success, message, payload}` shape every backend operation returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
}

impl<T> ApiResponse<T> {
    /// The error string for a `success: false` envelope, or `fallback` when
    /// the backend sent none.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================
    // Helpers
    // =========================================================

    fn sample_doctor() -> Doctor {
        Doctor {
            id: 7,
            name: "dr. Ratna".to_string(),
            specialization: "Dokter Gigi".to_string(),
        }
    }

    // =========================================================
    // Session round trips
    // =========================================================

    #[test]
    fn session_preserves_unknown_fields() {
        let raw = r#"{"id":3,"username":"budi","email":"budi@mail.com","created_at":"2025-01-01T00:00:00Z","role":"patient"}"#;
        let session: Session = serde_json::from_str(raw).unwrap();
        assert_eq!(session.id, 3);
        assert_eq!(session.extra.len(), 2);

        let reencoded: Value = serde_json::to_value(&session).unwrap();
        let original: Value = serde_json::from_str(raw).unwrap();
        assert_eq!(reencoded, original);
    }

    // =========================================================
    // Envelope decoding
    // =========================================================

    #[test]
    fn envelope_success_with_payload() {
        let raw = r#"{"success":true,"payload":[{"id":1,"name":"dr. Ayu","specialization":"Umum"}]}"#;
        let res: ApiResponse<Vec<Doctor>> = serde_json::from_str(raw).unwrap();
        assert!(res.success);
        assert!(res.message.is_none());
        assert_eq!(res.payload.unwrap().len(), 1);
    }

    #[test]
    fn envelope_failure_without_payload() {
        let raw = r#"{"success":false,"message":"Jadwal bentrok"}"#;
        let res: ApiResponse<Appointment> = serde_json::from_str(raw).unwrap();
        assert!(!res.success);
        assert_eq!(res.message_or("fallback"), "Jadwal bentrok");
        assert!(res.payload.is_none());
    }

    #[test]
    fn envelope_message_fallback() {
        let res: ApiResponse<()> = ApiResponse {
            success: false,
            message: None,
            payload: None,
        };
        assert_eq!(res.message_or("Gagal"), "Gagal");
    }

    #[test]
    fn appointment_decodes_nested_doctor() {
        let doctor = sample_doctor();
        let raw = format!(
            r#"{{"id":12,"doctor_id":7,"date_time":"2026-09-01T09:30:00Z","user_id":3,"doctor":{}}}"#,
            serde_json::to_string(&doctor).unwrap()
        );
        let appt: Appointment = serde_json::from_str(&raw).unwrap();
        assert_eq!(appt.doctor, doctor);
        assert_eq!(appt.extra["user_id"], 3);
    }
}

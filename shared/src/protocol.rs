//! Request payloads for the booking backend.
//!
//! The paths these travel to live with the HTTP client; this module only
//! defines the bodies so the form layer can build them without knowing
//! anything about transport.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body for `POST /appointments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub user_id: i64,
    pub doctor_id: i64,
    /// Local-naive minute-precision value straight from the
    /// `datetime-local` control, e.g. `2026-09-01T09:30`.
    pub date_time: String,
}

/// Body for `PUT /appointments/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateAppointmentRequest {
    pub doctor_id: i64,
    pub date_time: String,
}

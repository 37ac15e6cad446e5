//! HTTP client for the booking backend.
//!
//! One request per operation: no retries, no timeout overrides, no
//! deduplication. Transport failures, non-2xx statuses, and unparsable
//! bodies all come back as `Err(String)`; an `Ok` carries the backend's
//! `{success, message, payload}` envelope for the caller to interpret.

use gloo_net::http::Request;
use leptos::prelude::use_context;

use klinik_shared::protocol::{
    CreateAppointmentRequest, LoginRequest, RegisterRequest, UpdateAppointmentRequest,
};
use klinik_shared::{ApiResponse, Appointment, Doctor, Session};

const BASE_URL: &str = "https://klinikjaven-ttsbd9-be-javen.vercel.app";

/// The client the app provides at its root.
pub fn use_api() -> KlinikApi {
    use_context::<KlinikApi>().expect("KlinikApi should be provided")
}

#[derive(Clone, Debug, PartialEq)]
pub struct KlinikApi {
    base_url: String,
}

impl Default for KlinikApi {
    fn default() -> Self {
        Self::new(BASE_URL)
    }
}

impl KlinikApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn login(&self, body: &LoginRequest) -> Result<ApiResponse<Session>, String> {
        let res = Request::post(&self.url("/account/login"))
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("Login gagal: {}", res.status()));
        }

        res.json::<ApiResponse<Session>>()
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn register(&self, body: &RegisterRequest) -> Result<ApiResponse<()>, String> {
        let res = Request::post(&self.url("/account/register"))
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("Registrasi gagal: {}", res.status()));
        }

        res.json::<ApiResponse<()>>()
            .await
            .map_err(|e| e.to_string())
    }

    /// Appointments belonging to `user_id`, in backend order.
    pub async fn get_appointments(
        &self,
        user_id: i64,
    ) -> Result<ApiResponse<Vec<Appointment>>, String> {
        let url = format!("{}?user_id={}", self.url("/appointments"), user_id);
        let res = Request::get(&url).send().await.map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("Gagal memuat janji temu: {}", res.status()));
        }

        res.json::<ApiResponse<Vec<Appointment>>>()
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn get_doctors(&self) -> Result<ApiResponse<Vec<Doctor>>, String> {
        let res = Request::get(&self.url("/doctors"))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("Gagal memuat daftar dokter: {}", res.status()));
        }

        res.json::<ApiResponse<Vec<Doctor>>>()
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn create_appointment(
        &self,
        body: &CreateAppointmentRequest,
    ) -> Result<ApiResponse<Appointment>, String> {
        let res = Request::post(&self.url("/appointments"))
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("Gagal membuat janji temu: {}", res.status()));
        }

        res.json::<ApiResponse<Appointment>>()
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn update_appointment(
        &self,
        id: i64,
        body: &UpdateAppointmentRequest,
    ) -> Result<ApiResponse<Appointment>, String> {
        let res = Request::put(&format!("{}/{}", self.url("/appointments"), id))
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("Gagal memperbarui janji temu: {}", res.status()));
        }

        res.json::<ApiResponse<Appointment>>()
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn delete_appointment(&self, id: i64) -> Result<ApiResponse<()>, String> {
        let res = Request::delete(&format!("{}/{}", self.url("/appointments"), id))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("Gagal menghapus janji temu: {}", res.status()));
        }

        res.json::<ApiResponse<()>>()
            .await
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let api = KlinikApi::new("https://example.test/");
        assert_eq!(api.url("/doctors"), "https://example.test/doctors");
    }

    #[test]
    fn default_targets_production_origin() {
        let api = KlinikApi::default();
        assert_eq!(api.url("/account/login"), format!("{BASE_URL}/account/login"));
    }
}

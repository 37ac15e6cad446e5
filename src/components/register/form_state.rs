//! Draft state for the registration form.
//!
//! Owns the local validation and the conversion to the request payload, so
//! the page component stays pure wiring.

use klinik_shared::protocol::RegisterRequest;

/// Error shown when the two password fields disagree.
pub const PASSWORD_MISMATCH: &str = "Password tidak sama";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterDraft {
    /// Validate locally and build the request body. A password mismatch
    /// yields the error message and no body, so no request leaves the
    /// browser.
    pub fn to_request(&self) -> Result<RegisterRequest, &'static str> {
        if self.password != self.confirm_password {
            return Err(PASSWORD_MISMATCH);
        }
        Ok(RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(password: &str, confirm: &str) -> RegisterDraft {
        RegisterDraft {
            username: "budi".to_string(),
            email: "budi@mail.com".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn mismatched_passwords_block_dispatch() {
        let result = draft("rahasia1", "rahasia2").to_request();
        assert_eq!(result, Err(PASSWORD_MISMATCH));
        assert_eq!(PASSWORD_MISMATCH, "Password tidak sama");
    }

    #[test]
    fn empty_confirmation_counts_as_mismatch() {
        assert_eq!(draft("rahasia", "").to_request(), Err(PASSWORD_MISMATCH));
    }

    #[test]
    fn matching_passwords_build_the_body() {
        let body = draft("rahasia", "rahasia").to_request().unwrap();
        assert_eq!(body.username, "budi");
        assert_eq!(body.email, "budi@mail.com");
        assert_eq!(body.password, "rahasia");
    }
}

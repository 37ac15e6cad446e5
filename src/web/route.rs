//! Route definitions - the domain model side of navigation.
//!
//! Pure logic, no DOM and no `web_sys`, so the guard rules are testable
//! off-browser.

use std::fmt::Display;

/// Every page the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Public landing page (default route).
    #[default]
    Landing,
    Login,
    Register,
    /// Appointment dashboard, requires an active session.
    Dashboard,
    NotFound,
}

impl AppRoute {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Landing,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/app" => Self::Dashboard,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/app",
            Self::NotFound => "/404",
        }
    }

    /// Guard rule: which routes demand a logged-in session.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard)
    }

    /// Where an unauthenticated visit to a guarded route lands.
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// Browser tab title for this page.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Landing => "Home | Klinik Javen",
            Self::Login => "Log in | Klinik Javen",
            Self::Register => "Register | Klinik Javen",
            Self::Dashboard => "Dashboard | Klinik Javen",
            Self::NotFound => "404 | Klinik Javen",
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in [
            AppRoute::Landing,
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::Dashboard,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert_eq!(AppRoute::from_path("/admin"), AppRoute::NotFound);
    }

    #[test]
    fn every_page_titles_the_clinic() {
        assert_eq!(AppRoute::Landing.title(), "Home | Klinik Javen");
        for route in [
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::Dashboard,
            AppRoute::NotFound,
        ] {
            assert!(route.title().ends_with("| Klinik Javen"));
        }
    }

    #[test]
    fn only_dashboard_is_guarded() {
        assert!(AppRoute::Dashboard.requires_auth());
        assert!(!AppRoute::Landing.requires_auth());
        assert!(!AppRoute::Login.requires_auth());
        assert!(!AppRoute::Register.requires_auth());
    }
}

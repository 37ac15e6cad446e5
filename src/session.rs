//! Persistent session state.
//!
//! One key in browser storage holds the login response verbatim; its
//! presence is the single source of truth for "is a user logged in". The
//! storage backend is injected so views and tests share the same store type.

use klinik_shared::{SESSION_STORAGE_KEY, Session};

/// String-keyed persistence seam. Implemented by browser LocalStorage in the
/// app and by an in-memory map in tests.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str) -> bool;
}

/// Process-wide session holder over an injected [`StorageBackend`].
///
/// No expiry, no signature check: the stored record is trusted as-is and only
/// ever invalidated by an explicit [`clear`](Self::clear). A tab re-reads the
/// store on its own schedule; clearing here does not push updates elsewhere.
#[derive(Debug, Clone, Copy)]
pub struct SessionStore<B> {
    backend: B,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Persist `session`, replacing any prior value.
    pub fn save(&self, session: &Session) -> bool {
        match serde_json::to_string(session) {
            Ok(encoded) => self.backend.write(SESSION_STORAGE_KEY, &encoded),
            Err(_) => false,
        }
    }

    /// The persisted session, or `None` when absent or unparsable. A corrupt
    /// payload behaves exactly like a missing one.
    pub fn get(&self) -> Option<Session> {
        let raw = self.backend.read(SESSION_STORAGE_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// Identifier of the logged-in user, if any.
    pub fn user_id(&self) -> Option<i64> {
        self.get().map(|session| session.id)
    }

    pub fn is_logged_in(&self) -> bool {
        self.get().is_some()
    }

    /// Drop the persisted session unconditionally.
    pub fn clear(&self) {
        self.backend.remove(SESSION_STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;

    // =========================================================
    // Test fake
    // =========================================================

    /// In-memory stand-in for browser LocalStorage.
    #[derive(Debug, Default)]
    pub struct MemoryStorage {
        entries: RefCell<HashMap<String, String>>,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn seed(self, key: &str, value: &str) -> Self {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            self
        }
    }

    impl StorageBackend for MemoryStorage {
        fn read(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) -> bool {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            true
        }

        fn remove(&self, key: &str) -> bool {
            self.entries.borrow_mut().remove(key);
            true
        }
    }

    fn sample_session() -> Session {
        let mut session = Session::new(42, "siti", "siti@mail.com");
        session
            .extra
            .insert("role".to_string(), json!("patient"));
        session
    }

    // =========================================================
    // Round trip
    // =========================================================

    #[test]
    fn save_then_get_returns_deep_equal_session() {
        let store = SessionStore::new(MemoryStorage::new());
        let session = sample_session();

        assert!(store.save(&session));
        assert_eq!(store.get(), Some(session));
    }

    #[test]
    fn save_replaces_prior_value() {
        let store = SessionStore::new(MemoryStorage::new());
        store.save(&Session::new(1, "a", "a@mail.com"));
        store.save(&Session::new(2, "b", "b@mail.com"));

        assert_eq!(store.user_id(), Some(2));
    }

    // =========================================================
    // Logged-in predicate
    // =========================================================

    #[test]
    fn fresh_store_is_logged_out() {
        let store = SessionStore::new(MemoryStorage::new());
        assert!(!store.is_logged_in());
        assert_eq!(store.user_id(), None);
    }

    #[test]
    fn clear_logs_out() {
        let store = SessionStore::new(MemoryStorage::new());
        store.save(&sample_session());
        assert!(store.is_logged_in());

        store.clear();
        assert!(!store.is_logged_in());
        assert_eq!(store.get(), None);
    }

    // =========================================================
    // Corruption
    // =========================================================

    #[test]
    fn corrupted_payload_behaves_as_absent() {
        let store = SessionStore::new(
            MemoryStorage::new().seed(SESSION_STORAGE_KEY, "{not json"),
        );
        assert_eq!(store.get(), None);
        assert!(!store.is_logged_in());
    }

    #[test]
    fn wrong_shape_behaves_as_absent() {
        let store =
            SessionStore::new(MemoryStorage::new().seed(SESSION_STORAGE_KEY, r#"["array"]"#));
        assert_eq!(store.get(), None);
    }
}

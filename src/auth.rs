//! Authentication state.
//!
//! The persisted [`SessionStore`] is the source of truth; this module mirrors
//! it into a signal so views and the router guard react to login/logout. The
//! store reference is always passed in explicitly - nothing here reaches for
//! ambient storage, which keeps the whole flow substitutable in tests.

use klinik_shared::Session;
use leptos::prelude::*;

use crate::session::{SessionStore, StorageBackend};
use crate::web::LocalStorage;

/// The store type the running app injects everywhere.
pub type AppSessionStore = SessionStore<LocalStorage>;

#[derive(Clone, Default)]
pub struct AuthState {
    /// Present iff a user is logged in.
    pub session: Option<Session>,
}

/// Read/write signal pair shared through Context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// Derived signal for the router guard.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().session.is_some())
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

pub fn use_session_store() -> AppSessionStore {
    use_context::<AppSessionStore>().expect("SessionStore should be provided")
}

/// Hydrate the in-memory state from the persisted store. A corrupt or absent
/// record simply starts the app logged out.
pub fn init_auth<B: StorageBackend>(ctx: &AuthContext, store: &SessionStore<B>) {
    let session = store.get();
    ctx.set_state.update(|state| {
        state.session = session;
    });
}

/// Persist a freshly issued session and flip the app to logged-in.
pub fn complete_login<B: StorageBackend>(
    ctx: &AuthContext,
    store: &SessionStore<B>,
    session: Session,
) {
    store.save(&session);
    ctx.set_state.update(|state| {
        state.session = Some(session);
    });
}

/// Clear the persisted session and the in-memory state. Navigation away from
/// guarded pages is handled by the router's auth listener.
pub fn logout<B: StorageBackend>(ctx: &AuthContext, store: &SessionStore<B>) {
    store.clear();
    ctx.set_state.update(|state| {
        state.session = None;
    });
}

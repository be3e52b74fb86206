//! Session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "who is logged in". Every mutation writes the
//! durable record in the same step so the request gateway, which reads the
//! token from durable storage, never sees a stale token.
//!
//! `hydrated` starts false and flips exactly once after the durable record
//! has been read. A `None` user before that point means "not loaded yet",
//! not "logged out".

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{Role, User};
use crate::util::storage::{self, DurableStore, LocalStorage, SessionRecord};

/// In-memory session plus the hydration flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub hydrated: bool,
}

impl SessionState {
    /// Record `user` and `token`, overwriting any previous session.
    pub fn set_auth<S: DurableStore>(&mut self, store: &S, user: User, token: String) {
        self.user = Some(user);
        self.token = Some(token);
        self.persist(store);
    }

    /// Clear the session locally. No server call is made.
    pub fn logout<S: DurableStore>(&mut self, store: &S) {
        storage::clear_session(store);
        self.user = None;
        self.token = None;
    }

    /// Replace the stored profile, keeping the current token.
    pub fn update_user<S: DurableStore>(&mut self, store: &S, user: User) {
        self.user = Some(user);
        self.persist(store);
    }

    /// Load the durable record once. Returns `false` if already hydrated.
    pub fn hydrate<S: DurableStore>(&mut self, store: &S) -> bool {
        if self.hydrated {
            return false;
        }
        if let Some(record) = storage::load_session(store) {
            self.user = record.user;
            self.token = record.token;
        }
        self.hydrated = true;
        true
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    #[must_use]
    pub fn company_id(&self) -> Option<String> {
        self.user.as_ref().and_then(|u| u.company_id.clone())
    }

    fn persist<S: DurableStore>(&self, store: &S) {
        let record = SessionRecord { user: self.user.clone(), token: self.token.clone() };
        storage::save_session(store, &record);
    }
}

// =============================================================================
// REACTIVE HANDLE
// =============================================================================

/// Reactive session service provided through context.
///
/// Pages read via [`SessionHandle::get`] / [`SessionHandle::with`] and mutate
/// only through the methods below.
#[derive(Clone, Copy, Debug)]
pub struct SessionHandle {
    state: RwSignal<SessionState>,
}

impl SessionHandle {
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::default()) }
    }

    #[must_use]
    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        self.state.with(f)
    }

    /// Current state without subscribing the caller.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn set_auth(&self, user: User, token: String) {
        self.state.update(|s| s.set_auth(&LocalStorage, user, token));
    }

    pub fn logout(&self) {
        self.state.update(|s| s.logout(&LocalStorage));
    }

    pub fn update_user(&self, user: User) {
        self.state.update(|s| s.update_user(&LocalStorage, user));
    }

    /// Run the one-time bootstrap from `localStorage`.
    pub fn hydrate(&self) {
        if self.state.with_untracked(|s| s.hydrated) {
            return;
        }
        self.state.update(|s| {
            if s.hydrate(&LocalStorage) {
                log::debug!("session hydrated (authenticated: {})", s.is_authenticated());
            }
        });
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns one `RwSignal<AuthState>` and provides it through context, so
//! the gate, the user menu and the save path all read the same session
//! instead of reaching for a global identity object.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Session;

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// `true` until the identity provider has answered once.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    /// Resolved state after the identity provider answered.
    pub fn resolved(session: Option<Session>) -> Self {
        Self { session, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.session.is_some()
    }

    /// ID token to attach as a bearer credential on writes.
    pub fn bearer_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.id_token.as_str()).filter(|t| !t.is_empty())
    }
}

/// True once auth has resolved without a session.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.session.is_none()
}

//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every gated route applies identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, should_redirect_unauth};

/// Route the sign-in page lives on.
pub const LOGIN_PATH: &str = "/login";

/// Replace the history entry so "back" does not return to a gated page.
pub fn unauth_redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect to [`LOGIN_PATH`] whenever auth has resolved and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            log::info!("no active session, redirecting to {LOGIN_PATH}");
            navigate(LOGIN_PATH, unauth_redirect_options());
        }
    });
}

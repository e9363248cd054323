//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Portal routes should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthSession, AuthState};

/// Path unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/login";

/// True once auth has loaded and no user is present.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(session: AuthSession, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let state = session.state();
    Effect::new(move || {
        if state.with(should_redirect_unauth) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

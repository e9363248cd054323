//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the app shell to gate rendering until the first auth callback,
//! and by route guards and header chrome for identity-dependent rendering.
//!
//! DESIGN
//! ======
//! `AuthSession` is the only writer: the callback it registers with the
//! [`AuthService`] applies each delivery in order. Everyone else reads
//! through [`AuthSession::state`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::auth_service::{AuthService, Subscription};
use crate::net::types::Identity;

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true only until the first auth callback lands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Identity>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Apply one auth-service delivery.
    pub fn apply(&mut self, identity: Option<Identity>) {
        self.user = identity;
        self.loading = false;
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Session-state holder with a single subscription to the auth service.
///
/// Cheap to clone; clones share the signal and the subscription.
#[derive(Clone)]
pub struct AuthSession {
    state: ArcRwSignal<AuthState>,
    subscription: Arc<Subscription>,
}

impl AuthSession {
    /// Subscribe to `service` and start tracking its deliveries.
    pub fn start(service: &dyn AuthService) -> Self {
        let state = ArcRwSignal::new(AuthState::default());
        let writer = state.clone();
        let subscription = service.subscribe(Arc::new(move |identity: Option<Identity>| {
            writer.update(|s| s.apply(identity));
        }));
        Self { state, subscription: Arc::new(subscription) }
    }

    /// Read-only view of the session state.
    #[must_use]
    pub fn state(&self) -> ArcReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Tracked read; re-runs the calling effect or view on change.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    /// Tracked read of the signed-in identity.
    #[must_use]
    pub fn current_user(&self) -> Option<Identity> {
        self.state.with(|s| s.user.clone())
    }

    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    /// Release the auth subscription. Safe to call more than once.
    pub fn release(&self) {
        self.subscription.cancel();
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_active()
    }
}

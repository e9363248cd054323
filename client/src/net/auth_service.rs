//! Authentication service boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth backend is an external collaborator. The app only consumes a
//! `subscribe(callback) -> Subscription` contract where the callback fires
//! with the signed-in identity (or `None`) on every session change.
//!
//! DESIGN
//! ======
//! `AuthFeed` is the in-process fan-out that implements the contract.
//! `SessionEndpoint` drives a feed from the backend's HTTP endpoints in the
//! browser and stays silent during server rendering.

#[cfg(test)]
#[path = "auth_service_test.rs"]
mod auth_service_test;

use std::sync::{Arc, Mutex, PoisonError, Weak};

use super::types::Identity;

/// Callback invoked with the current identity on every session change.
pub type AuthCallback = Arc<dyn Fn(Option<Identity>) + Send + Sync>;

/// External authentication service contract.
pub trait AuthService: Send + Sync {
    /// Register `callback`. It keeps firing until the returned handle is
    /// cancelled or dropped.
    fn subscribe(&self, callback: AuthCallback) -> Subscription;
}

/// Action that ends the current session. Handed to the app shell alongside
/// the session holder so chrome never reaches for a concrete adapter.
#[derive(Clone)]
pub struct SignOut(Arc<dyn Fn() + Send + Sync>);

impl SignOut {
    pub fn new(action: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(action))
    }

    pub fn run(&self) {
        (self.0)();
    }
}

impl std::fmt::Debug for SignOut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SignOut")
    }
}

// =============================================================================
// SUBSCRIPTION
// =============================================================================

type ReleaseFn = Box<dyn FnOnce() + Send>;

/// Handle for a registered callback. Releasing is idempotent and also
/// happens on drop.
pub struct Subscription {
    release: Mutex<Option<ReleaseFn>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self { release: Mutex::new(Some(Box::new(release))) }
    }

    /// Run the release action if it has not run yet.
    pub fn cancel(&self) {
        let release = self
            .release
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(release) = release {
            release();
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.release
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}

// =============================================================================
// AUTH FEED
// =============================================================================

#[derive(Default)]
struct FeedInner {
    next_id: u64,
    subscribers: Vec<(u64, AuthCallback)>,
    /// Most recent publication; replayed to late subscribers.
    latest: Option<Option<Identity>>,
}

/// In-process broadcaster of identity changes.
///
/// Deliveries go out in registration order and are made outside the lock,
/// so a callback may publish or unsubscribe without deadlocking.
#[derive(Clone, Default)]
pub struct AuthFeed {
    inner: Arc<Mutex<FeedInner>>,
}

impl AuthFeed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `identity` to every live subscriber.
    pub fn publish(&self, identity: Option<Identity>) {
        let subscribers: Vec<AuthCallback> = {
            let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.latest = Some(identity.clone());
            inner.subscribers.iter().map(|(_, cb)| cb.clone()).collect()
        };
        for callback in subscribers {
            callback(identity.clone());
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .subscribers
            .len()
    }

    /// Sign-out action that publishes the signed-out state.
    #[must_use]
    pub fn sign_out_action(&self) -> SignOut {
        let feed = self.clone();
        SignOut::new(move || feed.publish(None))
    }

    fn unsubscribe(inner: &Weak<Mutex<FeedInner>>, id: u64) {
        if let Some(inner) = inner.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.subscribers.retain(|(sub_id, _)| *sub_id != id);
        }
    }
}

impl AuthService for AuthFeed {
    fn subscribe(&self, callback: AuthCallback) -> Subscription {
        let (id, replay) = {
            let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, callback.clone()));
            (id, inner.latest.clone())
        };
        if let Some(identity) = replay {
            callback(identity);
        }
        let weak = Arc::downgrade(&self.inner);
        Subscription::new(move || Self::unsubscribe(&weak, id))
    }
}

// =============================================================================
// SESSION ENDPOINT
// =============================================================================

/// Production auth adapter backed by the auth backend's HTTP endpoints.
#[derive(Clone, Default)]
pub struct SessionEndpoint {
    feed: AuthFeed,
}

impl SessionEndpoint {
    /// Create the adapter and start resolving the current identity.
    ///
    /// Called once at app start. In the browser this issues the identity
    /// request; the result (absent on any failure) is published when it
    /// lands. During server rendering nothing is published.
    #[must_use]
    pub fn connect() -> Self {
        let endpoint = Self::default();
        #[cfg(feature = "hydrate")]
        {
            let feed = endpoint.feed.clone();
            leptos::task::spawn_local(async move {
                let identity = super::api::fetch_current_user().await;
                log::info!("auth session resolved: signed_in={}", identity.is_some());
                feed.publish(identity);
            });
        }
        endpoint
    }

    /// End the session on the backend, then publish the signed-out state.
    pub async fn sign_out(&self) {
        super::api::logout().await;
        self.feed.publish(None);
    }

    /// [`SignOut`] that runs [`SessionEndpoint::sign_out`] on the local
    /// executor.
    #[must_use]
    pub fn sign_out_action(&self) -> SignOut {
        let endpoint = self.clone();
        SignOut::new(move || {
            let endpoint = endpoint.clone();
            leptos::task::spawn_local(async move {
                endpoint.sign_out().await;
            });
        })
    }
}

impl AuthService for SessionEndpoint {
    fn subscribe(&self, callback: AuthCallback) -> Subscription {
        self.feed.subscribe(callback)
    }
}

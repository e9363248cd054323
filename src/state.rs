//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! description generator is built once at startup and shared read-only.

use std::sync::Arc;

use crate::services::description::DescriptionGenerator;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub descriptions: Arc<DescriptionGenerator>,
}

impl AppState {
    #[must_use]
    pub fn new(descriptions: DescriptionGenerator) -> Self {
        Self { descriptions: Arc::new(descriptions) }
    }
}

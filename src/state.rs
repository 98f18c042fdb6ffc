//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! identity backend is optional: without `IDENTITY_API_URL` the host still
//! serves pages and the dashboard, and auth routes answer 503.

use std::sync::Arc;

use crate::services::identity::IdentityApi;

/// Shared application state. Clone is required by Axum.
#[derive(Clone)]
pub struct AppState {
    pub identity: Option<Arc<dyn IdentityApi>>,
}

impl AppState {
    #[must_use]
    pub fn new(identity: Option<Arc<dyn IdentityApi>>) -> Self {
        Self { identity }
    }
}

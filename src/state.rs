//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! server holds no mutable state: index rendering re-reads `index.html` on
//! each request so edits to the site show up without a restart.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Cloned into every handler by the `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}

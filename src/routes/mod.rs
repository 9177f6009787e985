//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portfolio is a static site. The only dynamic response is the index
//! page, which gets the EmailJS meta tags written into its head; everything
//! else under the website directory is served as-is.

pub mod site;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router: index rendering, health check, static fallback.
pub fn app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.website_dir);

    Router::new()
        .route("/", get(site::index))
        .route("/index.html", get(site::index))
        .route("/healthz", get(healthz))
        .fallback_service(static_files)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

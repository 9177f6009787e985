//! Index page rendering with injected EmailJS configuration.

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::inject::{InjectError, inject_config};
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("failed to read index.html: {0}")]
    ReadIndex(#[from] std::io::Error),
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "index render failed");
        (StatusCode::INTERNAL_SERVER_ERROR, format!("Internal Server Error: {self}")).into_response()
    }
}

/// `GET /` and `GET /index.html`: the site index with configuration meta tags.
///
/// # Errors
///
/// Returns [`SiteError`] (rendered as a 500) when `index.html` cannot be
/// read. A page without `</head>` is served unchanged.
pub async fn index(State(state): State<AppState>) -> Result<Response, SiteError> {
    let path = state.config.index_path();
    let html = tokio::fs::read_to_string(&path).await?;
    let body = match inject_config(&html, &state.config.emailjs) {
        Ok(body) => body,
        Err(InjectError::MissingHead) => {
            tracing::warn!(path = %path.display(), "index.html has no </head>; serving without EmailJS meta tags");
            html
        }
    };

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        body,
    )
        .into_response())
}

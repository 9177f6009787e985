use std::net::SocketAddr;

use portfolio::config::ServerConfig;
use portfolio::{routes, state};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // A missing .env is fine; the process environment still applies.
    if let Ok(path) = dotenvy::dotenv() {
        tracing::info!(path = %path.display(), "loaded .env");
    }

    let config = ServerConfig::from_env().expect("invalid server configuration");

    let missing = config.emailjs.missing_fields();
    if missing.is_empty() {
        tracing::info!("EmailJS configured and ready to receive contact form submissions");
    } else {
        tracing::warn!(?missing, "EmailJS not fully configured; contact form will report delivery errors");
    }

    let addr = SocketAddr::new(config.bind_addr, config.port);
    tracing::info!(website_dir = %config.website_dir.display(), "serving portfolio site");

    let app = routes::app(state::AppState::new(config));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "portfolio listening");
    axum::serve(listener, app).await.expect("server failed");
}

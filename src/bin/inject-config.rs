//! Write `index_with_config.html` next to `index.html` with the EmailJS meta
//! tags injected, for hosts that serve the site without the portfolio server.

use std::process::ExitCode;

use portfolio::config::ServerConfig;
use portfolio::inject::inject_config;

const OUTPUT_FILE: &str = "index_with_config.html";

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let _ = dotenvy::dotenv();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let index_path = config.index_path();
    let html = match std::fs::read_to_string(&index_path) {
        Ok(html) => html,
        Err(e) => {
            tracing::error!(path = %index_path.display(), error = %e, "index.html not found");
            return ExitCode::FAILURE;
        }
    };

    let output = match inject_config(&html, &config.emailjs) {
        Ok(output) => output,
        Err(e) => {
            tracing::error!(error = %e, "injection failed");
            return ExitCode::FAILURE;
        }
    };

    let out_path = config.website_dir.join(OUTPUT_FILE);
    if let Err(e) = std::fs::write(&out_path, output) {
        tracing::error!(path = %out_path.display(), error = %e, "error writing file");
        return ExitCode::FAILURE;
    }

    tracing::info!(path = %out_path.display(), "configuration injected successfully");
    ExitCode::SUCCESS
}

//! Server configuration parsed from environment variables.

use std::net::IpAddr;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR: {0}")]
    InvalidBindAddr(String),
}

/// EmailJS identifiers forwarded to the browser through page meta tags.
///
/// These are public values (the EmailJS public key is meant to ship to the
/// client), so they are injected as-is; empty strings mean "not configured".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailJsConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            service_id: env_or_empty("EMAILJS_SERVICE_ID"),
            template_id: env_or_empty("EMAILJS_TEMPLATE_ID"),
            public_key: env_or_empty("EMAILJS_PUBLIC_KEY"),
        }
    }

    /// Names of the environment variables that are unset or blank.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("EMAILJS_SERVICE_ID", &self.service_id),
            ("EMAILJS_TEMPLATE_ID", &self.template_id),
            ("EMAILJS_PUBLIC_KEY", &self.public_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub website_dir: PathBuf,
    pub emailjs: EmailJsConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 5000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `WEBSITE_DIR`: directory holding `index.html`, default current directory
    /// - `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`, `EMAILJS_PUBLIC_KEY`
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `BIND_ADDR` is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let bind_addr = parse_bind_addr(std::env::var("BIND_ADDR").ok().as_deref())?;
        let website_dir = std::env::var("WEBSITE_DIR").map_or_else(|_| PathBuf::from("."), PathBuf::from);

        Ok(Self { bind_addr, port, website_dir, emailjs: EmailJsConfig::from_env() })
    }

    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.website_dir.join("index.html")
    }
}

fn env_or_empty(key: &str) -> String {
    std::env::var(key).unwrap_or_default()
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let value = match raw.map(str::trim) {
        None | Some("") => DEFAULT_BIND_ADDR,
        Some(value) => value,
    };
    value
        .parse::<IpAddr>()
        .map_err(|_| ConfigError::InvalidBindAddr(value.to_owned()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

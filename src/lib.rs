//! # portfolio
//!
//! HTTP server for the portfolio site. Serves the static website directory
//! and writes the EmailJS configuration into `index.html` so the browser
//! client (the `client` crate) can deliver contact-form messages.

pub mod config;
pub mod inject;
pub mod routes;
pub mod state;

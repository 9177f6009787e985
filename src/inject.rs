//! EmailJS meta-tag injection into the site's `index.html`.
//!
//! The browser client reads its email-service identifiers from
//! `<meta name="emailjs-...">` tags, so the server writes them into the page
//! head on every request instead of baking them into the static file.

use crate::config::EmailJsConfig;

const HEAD_CLOSE: &str = "</head>";

pub const SERVICE_ID_META: &str = "emailjs-service-id";
pub const TEMPLATE_ID_META: &str = "emailjs-template-id";
pub const PUBLIC_KEY_META: &str = "emailjs-public-key";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InjectError {
    #[error("could not find </head> tag")]
    MissingHead,
}

/// Render the configuration block inserted ahead of `</head>`.
#[must_use]
pub fn render_meta_tags(config: &EmailJsConfig) -> String {
    let mut out = String::from("\n  <!-- EmailJS Configuration -->");
    for (name, value) in [
        (SERVICE_ID_META, &config.service_id),
        (TEMPLATE_ID_META, &config.template_id),
        (PUBLIC_KEY_META, &config.public_key),
    ] {
        out.push_str("\n  <meta name=\"");
        out.push_str(name);
        out.push_str("\" content=\"");
        out.push_str(&escape_attr(value));
        out.push_str("\">");
    }
    out
}

/// Insert the configuration meta tags immediately before the first `</head>`.
///
/// # Errors
///
/// Returns [`InjectError::MissingHead`] when the document has no `</head>`.
pub fn inject_config(html: &str, config: &EmailJsConfig) -> Result<String, InjectError> {
    let at = html.find(HEAD_CLOSE).ok_or(InjectError::MissingHead)?;
    let tags = render_meta_tags(config);

    let mut out = String::with_capacity(html.len() + tags.len() + 1);
    out.push_str(&html[..at]);
    out.push_str(&tags);
    out.push('\n');
    out.push_str(&html[at..]);
    Ok(out)
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[path = "inject_test.rs"]
mod tests;

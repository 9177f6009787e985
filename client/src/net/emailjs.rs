//! EmailJS delivery over its REST endpoint.
//!
//! Browser builds post with `gloo-net`; native builds have no transport and
//! report every send as a delivery failure, which keeps the flow testable
//! without a network.
//!
//! Credentials come from `<meta name="emailjs-...">` tags that the server
//! writes into the page head.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod emailjs_test;

use serde::Serialize;

use crate::state::contact::{ConfigError, DeliveryError, EmailSender, SendError, TemplateParams};

pub const SEND_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const SERVICE_ID_META: &str = "emailjs-service-id";
pub const TEMPLATE_ID_META: &str = "emailjs-template-id";
pub const PUBLIC_KEY_META: &str = "emailjs-public-key";

/// Credentials as found on the page; any of them may be absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailJsSettings {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
}

/// Complete credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailJsSettings {
    /// Settings from explicit values; empty strings count as absent.
    #[must_use]
    pub fn new(service_id: Option<&str>, template_id: Option<&str>, public_key: Option<&str>) -> Self {
        let present = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned);
        Self {
            service_id: present(service_id),
            template_id: present(template_id),
            public_key: present(public_key),
        }
    }

    /// Read the three meta tags from the current document.
    #[cfg(feature = "browser")]
    #[must_use]
    pub fn from_document() -> Self {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return Self::default();
        };
        let meta = |name: &str| {
            doc.query_selector(&format!("meta[name=\"{name}\"]"))
                .ok()
                .flatten()
                .and_then(|el| el.get_attribute("content"))
        };
        Self::new(
            meta(SERVICE_ID_META).as_deref(),
            meta(TEMPLATE_ID_META).as_deref(),
            meta(PUBLIC_KEY_META).as_deref(),
        )
    }

    /// `Found`/`Missing` per credential, for the startup log line.
    #[must_use]
    pub fn presence_summary(&self) -> String {
        let flag = |v: &Option<String>| if v.is_some() { "Found" } else { "Missing" };
        format!(
            "publicKey: {}, serviceId: {}, templateId: {}",
            flag(&self.public_key),
            flag(&self.service_id),
            flag(&self.template_id)
        )
    }

    /// Service and template ids are checked first, then the public key.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingIds`] naming which id is missing, or
    /// [`ConfigError::MissingPublicKey`].
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let (Some(service_id), Some(template_id)) = (&self.service_id, &self.template_id) else {
            return Err(ConfigError::MissingIds {
                service_id: self.service_id.clone().unwrap_or_else(|| "missing".into()),
                template_id: self.template_id.clone().unwrap_or_else(|| "missing".into()),
            });
        };
        let Some(public_key) = &self.public_key else {
            return Err(ConfigError::MissingPublicKey);
        };
        Ok(Credentials {
            service_id: service_id.clone(),
            template_id: template_id.clone(),
            public_key: public_key.clone(),
        })
    }
}

/// JSON body of a send request.
#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a TemplateParams,
}

impl<'a> SendRequest<'a> {
    #[must_use]
    pub fn new(credentials: &'a Credentials, params: &'a TemplateParams) -> Self {
        Self {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            template_params: params,
        }
    }
}

#[cfg(any(test, feature = "browser"))]
fn rejected_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("status {status}")
    } else {
        format!("status {status}: {body}")
    }
}

/// [`EmailSender`] backed by the EmailJS REST API.
#[derive(Clone, Debug)]
pub struct EmailJsSender {
    settings: EmailJsSettings,
}

impl EmailJsSender {
    #[must_use]
    pub fn new(settings: EmailJsSettings) -> Self {
        Self { settings }
    }
}

impl EmailSender for EmailJsSender {
    async fn send(&self, params: &TemplateParams) -> Result<(), SendError> {
        let credentials = self.settings.credentials().inspect_err(|e| log::error!("{e}"))?;
        log::info!(
            "sending email with service {} and template {}",
            credentials.service_id,
            credentials.template_id
        );
        let body = SendRequest::new(&credentials, params);

        #[cfg(feature = "browser")]
        {
            let request = gloo_net::http::Request::post(SEND_ENDPOINT)
                .json(&body)
                .map_err(|e| DeliveryError(e.to_string()))?;
            let resp = request.send().await.map_err(|e| DeliveryError(e.to_string()))?;
            if !resp.ok() {
                let text = resp.text().await.unwrap_or_default();
                return Err(DeliveryError(rejected_message(resp.status(), &text)).into());
            }
            Ok(())
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = body;
            Err(DeliveryError("no transport outside the browser".into()).into())
        }
    }
}

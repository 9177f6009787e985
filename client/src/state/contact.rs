//! Contact form submission flow.
//!
//! ```text
//! idle -> validate --invalid--> error banner -> idle
//!            |
//!            v
//!        submitting (button disabled, "Sending...")
//!            |-- ok ----> reset fields, success banner
//!            '-- err ---> failure banner (fallback address)
//!        -> idle (button re-enabled on every path)
//! ```
//!
//! The flow is written against [`FormView`] and [`EmailSender`] so it runs
//! the same way against the page and against test doubles.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

pub const RECIPIENT: &str = "kusum2006verma@gmail.com";
pub const DEFAULT_SUBJECT: &str = "Contact from Portfolio";
pub const NO_PHONE: &str = "Not provided";

pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. I'll get back to you soon!";
pub const FAILURE_MESSAGE: &str = "Sorry, there was an error sending your message. Please try again or contact me directly at kusum2006verma@gmail.com";

pub const IDLE_LABEL: &str = "Send Message";
pub const BUSY_LABEL: &str = "Sending...";

pub const SUCCESS_HIDE_MS: u32 = 5000;
pub const ERROR_HIDE_MS: u32 = 7000;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields (Name, Email, Message).")]
    MissingRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("EmailJS configuration missing. Service ID: {service_id}, Template ID: {template_id}")]
    MissingIds { service_id: String, template_id: String },
    #[error("EmailJS public key not found")]
    MissingPublicKey,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Failed to send email: {0}")]
pub struct DeliveryError(pub String);

/// Failure of an [`EmailSender`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

impl From<SendError> for SubmitError {
    fn from(err: SendError) -> Self {
        match err {
            SendError::Config(e) => Self::Config(e),
            SendError::Delivery(e) => Self::Delivery(e),
        }
    }
}

// =============================================================================
// SUBMISSION
// =============================================================================

/// Field values exactly as read from the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// A validated, trimmed submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl Submission {
    /// Required fields are checked before the email format.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingRequired`] when name, email, or message is
    /// blank; [`ValidationError::InvalidEmail`] when the email is malformed.
    pub fn validate(raw: &RawFields) -> Result<Self, ValidationError> {
        let name = raw.name.trim();
        let email = raw.email.trim();
        let message = raw.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ValidationError::MissingRequired);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        let phone = Some(raw.phone.trim()).filter(|p| !p.is_empty());
        let subject = match raw.subject.trim() {
            "" => DEFAULT_SUBJECT,
            s => s,
        };
        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            phone: phone.map(str::to_owned),
            subject: subject.to_owned(),
            message: message.to_owned(),
        })
    }

    #[must_use]
    pub fn template_params(&self, timestamp: impl Into<String>) -> TemplateParams {
        TemplateParams {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            phone: self.phone.clone().unwrap_or_else(|| NO_PHONE.to_owned()),
            subject: self.subject.clone(),
            message: self.message.clone(),
            to_email: RECIPIENT.to_owned(),
            timestamp: timestamp.into(),
        }
    }
}

/// `local@domain.tld`: no whitespace, a single `@`, and a dot inside the
/// domain with text on both sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Parameters handed to the email template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub to_email: String,
    pub timestamp: String,
}

// =============================================================================
// BANNERS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    #[must_use]
    pub fn hide_after_ms(self) -> u32 {
        match self {
            Self::Success => SUCCESS_HIDE_MS,
            Self::Error => ERROR_HIDE_MS,
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Success => Self::Error,
            Self::Error => Self::Success,
        }
    }
}

/// Identifies one showing of a banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerToken(u64);

/// Tracks the single visible banner. Each `show` issues a token; an
/// auto-hide timer only hides the banner if its token is still current.
#[derive(Debug, Default)]
pub struct BannerSlot {
    visible: Option<(BannerKind, BannerToken)>,
    issued: u64,
}

impl BannerSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, kind: BannerKind) -> BannerToken {
        self.issued += 1;
        let token = BannerToken(self.issued);
        self.visible = Some((kind, token));
        token
    }

    /// Auto-hide for `token`; returns the banner to hide, if still showing.
    pub fn expire(&mut self, token: BannerToken) -> Option<BannerKind> {
        match self.visible {
            Some((kind, current)) if current == token => {
                self.visible = None;
                Some(kind)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn visible(&self) -> Option<BannerKind> {
        self.visible.map(|(kind, _)| kind)
    }
}

// =============================================================================
// FLOW
// =============================================================================

/// The form as the submission flow sees it.
pub trait FormView {
    fn read_fields(&self) -> RawFields;
    /// Disable the submit control and show progress, or restore it.
    fn set_busy(&self, busy: bool);
    fn reset(&self);
    /// Show `message` in the `kind` banner and hide the other one.
    fn show_banner(&self, kind: BannerKind, message: &str);
}

/// Delivery of a filled-in template.
#[allow(async_fn_in_trait)]
pub trait EmailSender {
    async fn send(&self, params: &TemplateParams) -> Result<(), SendError>;
}

/// Holds the form busy; dropping it re-enables the submit control.
pub struct BusyGuard<'a, V: FormView> {
    view: &'a V,
}

impl<'a, V: FormView> BusyGuard<'a, V> {
    pub fn new(view: &'a V) -> Self {
        view.set_busy(true);
        Self { view }
    }
}

impl<V: FormView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_busy(false);
    }
}

/// Run one submit attempt end to end.
///
/// # Errors
///
/// Returns the validation, configuration, or delivery failure after it has
/// been shown on the form.
pub async fn submit<V, S>(view: &V, sender: &S, timestamp: String) -> Result<(), SubmitError>
where
    V: FormView,
    S: EmailSender,
{
    let submission = match Submission::validate(&view.read_fields()) {
        Ok(submission) => submission,
        Err(err) => {
            view.show_banner(BannerKind::Error, &err.to_string());
            return Err(err.into());
        }
    };

    let _busy = BusyGuard::new(view);
    let params = submission.template_params(timestamp);
    match sender.send(&params).await {
        Ok(()) => {
            log::info!("contact message sent from {}", params.from_email);
            view.reset();
            view.show_banner(BannerKind::Success, SUCCESS_MESSAGE);
            Ok(())
        }
        Err(err) => {
            log::error!("error sending message: {err}");
            view.show_banner(BannerKind::Error, FAILURE_MESSAGE);
            Err(err.into())
        }
    }
}

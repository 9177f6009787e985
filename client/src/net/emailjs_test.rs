use futures::executor::block_on;

use super::*;
use crate::state::contact::{RawFields, Submission};

fn params() -> TemplateParams {
    let raw = RawFields {
        name: "Ann".into(),
        email: "ann@x.io".into(),
        message: "hello".into(),
        ..RawFields::default()
    };
    Submission::validate(&raw).unwrap().template_params("now")
}

#[test]
fn blank_values_count_as_missing() {
    let settings = EmailJsSettings::new(Some(" "), Some("tpl"), None);
    assert_eq!(settings.service_id, None);
    assert_eq!(settings.template_id.as_deref(), Some("tpl"));
}

#[test]
fn missing_ids_name_each_value() {
    let settings = EmailJsSettings::new(Some("svc"), None, Some("pk"));
    assert_eq!(
        settings.credentials().unwrap_err().to_string(),
        "EmailJS configuration missing. Service ID: svc, Template ID: missing"
    );
}

#[test]
fn ids_are_checked_before_public_key() {
    let settings = EmailJsSettings::new(None, None, None);
    assert!(matches!(settings.credentials(), Err(ConfigError::MissingIds { .. })));
}

#[test]
fn missing_public_key() {
    let settings = EmailJsSettings::new(Some("svc"), Some("tpl"), None);
    assert_eq!(settings.credentials(), Err(ConfigError::MissingPublicKey));
}

#[test]
fn presence_summary_flags_each_credential() {
    let settings = EmailJsSettings::new(Some("svc"), None, Some("pk"));
    assert_eq!(
        settings.presence_summary(),
        "publicKey: Found, serviceId: Found, templateId: Missing"
    );
}

#[test]
fn request_body_shape() {
    let credentials = EmailJsSettings::new(Some("svc"), Some("tpl"), Some("pk"))
        .credentials()
        .unwrap();
    let params = params();
    let json = serde_json::to_value(SendRequest::new(&credentials, &params)).unwrap();

    assert_eq!(json["service_id"], "svc");
    assert_eq!(json["template_id"], "tpl");
    assert_eq!(json["user_id"], "pk");
    assert_eq!(json["template_params"]["from_name"], "Ann");
    assert_eq!(json["template_params"]["phone"], "Not provided");
}

#[test]
fn rejected_message_includes_body_when_present() {
    assert_eq!(rejected_message(400, " bad template "), "status 400: bad template");
    assert_eq!(rejected_message(502, ""), "status 502");
}

#[test]
fn config_error_short_circuits_send() {
    let sender = EmailJsSender::new(EmailJsSettings::default());
    let err = block_on(sender.send(&params())).unwrap_err();
    assert!(matches!(err, SendError::Config(ConfigError::MissingIds { .. })));
}

#[cfg(not(feature = "browser"))]
#[test]
fn native_build_reports_delivery_failure() {
    let sender = EmailJsSender::new(EmailJsSettings::new(Some("svc"), Some("tpl"), Some("pk")));
    let err = block_on(sender.send(&params())).unwrap_err();
    assert!(matches!(err, SendError::Delivery(_)));
}

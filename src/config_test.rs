use super::*;

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_numeric_value() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 3000 ")).unwrap(), 3000);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err().to_string();
    assert!(err.contains("invalid PORT"));
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn parse_bind_addr_defaults_to_all_interfaces() {
    let addr = parse_bind_addr(None).unwrap();
    assert_eq!(addr.to_string(), "0.0.0.0");
}

#[test]
fn parse_bind_addr_accepts_loopback_and_rejects_hostnames() {
    assert_eq!(parse_bind_addr(Some("127.0.0.1")).unwrap().to_string(), "127.0.0.1");
    let err = parse_bind_addr(Some("localhost")).unwrap_err().to_string();
    assert!(err.contains("invalid BIND_ADDR"));
}

#[test]
fn missing_fields_lists_blank_values() {
    let cfg = EmailJsConfig {
        service_id: "service_abc".into(),
        template_id: "  ".into(),
        public_key: String::new(),
    };
    assert_eq!(cfg.missing_fields(), vec!["EMAILJS_TEMPLATE_ID", "EMAILJS_PUBLIC_KEY"]);
}

#[test]
fn missing_fields_empty_when_fully_configured() {
    let cfg = EmailJsConfig {
        service_id: "service_abc".into(),
        template_id: "template_xyz".into(),
        public_key: "pk_123".into(),
    };
    assert!(cfg.missing_fields().is_empty());
}

#[test]
fn index_path_joins_website_dir() {
    let cfg = ServerConfig {
        bind_addr: parse_bind_addr(None).unwrap(),
        port: DEFAULT_PORT,
        website_dir: PathBuf::from("/srv/site"),
        emailjs: EmailJsConfig::default(),
    };
    assert_eq!(cfg.index_path(), PathBuf::from("/srv/site/index.html"));
}

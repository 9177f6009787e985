use super::*;
use crate::config::{DEFAULT_PORT, EmailJsConfig, ServerConfig};
use axum::body::Body;
use axum::http::{Request, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

const INDEX: &str = "<!DOCTYPE html>\n<html>\n<head>\n  <title>Portfolio</title>\n</head>\n<body></body>\n</html>\n";

fn site_dir(index: Option<&str>) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    if let Some(index) = index {
        std::fs::write(dir.path().join("index.html"), index).expect("index should be written");
    }
    std::fs::write(dir.path().join("style.css"), "body { color: red; }").expect("css should be written");
    dir
}

fn test_app(dir: &tempfile::TempDir) -> Router {
    let config = ServerConfig {
        bind_addr: "127.0.0.1".parse().expect("loopback should parse"),
        port: DEFAULT_PORT,
        website_dir: dir.path().to_path_buf(),
        emailjs: EmailJsConfig {
            service_id: "service_abc".into(),
            template_id: "template_xyz".into(),
            public_key: "pk_123".into(),
        },
    };
    app(AppState::new(config))
}

async fn get_text(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).expect("request should build");
    let response = app.oneshot(req).await.expect("request failed");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    (status, headers, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn root_serves_index_with_injected_meta() {
    let dir = site_dir(Some(INDEX));
    let (status, headers, body) = get_text(test_app(&dir), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "text/html; charset=utf-8");
    assert_eq!(headers.get(header::CACHE_CONTROL).unwrap(), "no-cache");
    assert!(body.contains(r#"<meta name="emailjs-service-id" content="service_abc">"#));
    assert!(body.find("emailjs-public-key").unwrap() < body.find("</head>").unwrap());
}

#[tokio::test]
async fn index_html_path_is_rendered_too() {
    let dir = site_dir(Some(INDEX));
    let (status, _, body) = get_text(test_app(&dir), "/index.html").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("emailjs-template-id"));
}

#[tokio::test]
async fn missing_index_is_internal_error() {
    let dir = site_dir(None);
    let (status, _, body) = get_text(test_app(&dir), "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("Internal Server Error:"));
}

#[tokio::test]
async fn index_without_head_is_served_unchanged() {
    let page = "<html><body>bare</body></html>";
    let dir = site_dir(Some(page));
    let (status, headers, body) = get_text(test_app(&dir), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "text/html; charset=utf-8");
    assert_eq!(body, page);
}

#[tokio::test]
async fn static_files_pass_through_untouched() {
    let dir = site_dir(Some(INDEX));
    let (status, _, body) = get_text(test_app(&dir), "/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "body { color: red; }");
}

#[tokio::test]
async fn unknown_static_path_is_not_found() {
    let dir = site_dir(Some(INDEX));
    let (status, _, _) = get_text(test_app(&dir), "/missing.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_is_ok() {
    let dir = site_dir(None);
    let (status, _, _) = get_text(test_app(&dir), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

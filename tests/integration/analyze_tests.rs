//! Integration tests for the analyzer
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! fetch → parse → extract → report pipeline end-to-end.

use seo_audit::analyzer::{analyze_with_client, build_http_client};
use seo_audit::config::{ClientConfig, Config, ReportConfig};
use seo_audit::report::{render_report, ReportFormat};
use seo_audit::{analyze, SeoError};
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::fmt::MakeWriter;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REFERENCE_PAGE: &str = r#"<html><head><title>Test</title></head><body><img src="a.png"><a href="https://x.com">x</a><a href="/local">y</a><a>z</a></body></html>"#;

/// Returns a URL on localhost where nothing is listening
fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("Failed to get addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

/// In-memory log sink shared between the subscriber and the test
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("Log buffer poisoned")).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .expect("Log buffer poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn test_analyze_reference_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(REFERENCE_PAGE)
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let report = analyze(&url, &Config::default())
        .await
        .expect("Analysis failed");

    assert_eq!(report.title, "Test");
    assert_eq!(report.description, "No description");
    assert_eq!(report.keywords, vec![String::new()]);
    assert_eq!(report.images_without_alt, 1);
    assert_eq!(report.links.internal, 1);
    assert_eq!(report.links.external, 1);
    assert_eq!(report.links.broken, 1);
    assert_eq!(report.heading_tags.len(), 6);
    assert!(report.heading_tags.values().all(|&count| count == 0));
}

#[tokio::test]
async fn test_analyze_full_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blog"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(
                    r#"<!DOCTYPE html><html><head>
                    <title>Blog</title>
                    <meta name="description" content="Posts about things">
                    <meta name="keywords" content="blog, posts , things">
                    </head><body>
                    <h1>Blog</h1><h2>One</h2><h2>Two</h2><h3>Sub</h3>
                    <img src="a.png" alt="A"><img src="b.png" alt=""><img src="c.png">
                    <a href="/post/1">1</a>
                    <a href="">self</a>
                    <a href="//cdn.example.com/x.js">cdn</a>
                    <a href="http://other.com/">other</a>
                    <a name="bottom">bottom</a>
                    </body></html>"#,
                )
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/blog", mock_server.uri());
    let report = analyze(&url, &Config::default())
        .await
        .expect("Analysis failed");

    assert_eq!(report.title, "Blog");
    assert_eq!(report.description, "Posts about things");
    assert_eq!(report.keywords, vec!["blog", "posts", "things"]);
    assert_eq!(report.heading_tags["h1"], 1);
    assert_eq!(report.heading_tags["h2"], 2);
    assert_eq!(report.heading_tags["h3"], 1);
    assert_eq!(report.heading_tags["h4"], 0);
    assert_eq!(report.images_without_alt, 1);
    assert_eq!(report.links.internal, 2);
    assert_eq!(report.links.external, 2);
    assert_eq!(report.links.broken, 1);
    assert_eq!(report.links.total(), 5);
}

#[tokio::test]
async fn test_timings_are_ordered() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(REFERENCE_PAGE)
                .set_delay(Duration::from_millis(50)),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/slow", mock_server.uri());
    let report = analyze(&url, &Config::default())
        .await
        .expect("Analysis failed");

    assert!(
        report.speed.response_time >= 50,
        "Expected response time >= 50ms, got {}",
        report.speed.response_time
    );
    assert!(report.speed.load_time >= report.speed.response_time);
}

#[tokio::test]
async fn test_non_success_status_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<title>Not Found</title>"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/missing", mock_server.uri());
    let result = analyze(&url, &Config::default()).await;

    match result {
        Err(SeoError::Status { status, url: failed }) => {
            assert_eq!(status, 404);
            assert_eq!(failed, url);
        }
        other => panic!("Expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let result = analyze(&url, &Config::default()).await;

    assert!(matches!(result, Err(SeoError::Status { status: 503, .. })));
}

#[tokio::test]
async fn test_connection_refused_fails() {
    let url = closed_port_url();
    let result = analyze(&url, &Config::default()).await;

    let err = result.expect_err("Expected a transport error");
    assert!(matches!(err, SeoError::Http { .. }));
    assert!(err.to_string().contains(&url));
}

#[tokio::test]
async fn test_connection_refused_logs_reason() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let url = closed_port_url();
    let result = analyze(&url, &Config::default()).await;

    assert!(result.is_err(), "Expected no report for an unreachable host");

    let output = logs.contents();
    assert!(
        output.contains(&format!("Failed to fetch {}", url)),
        "Missing fetch diagnostic in logs: {}",
        output
    );
    assert!(
        output.contains("tcp connect error"),
        "Missing transport reason in logs: {}",
        output
    );
    assert_eq!(
        output.matches("ERROR").count(),
        1,
        "Failure should be logged exactly once: {}",
        output
    );
}

#[tokio::test]
async fn test_empty_url_fails() {
    let result = analyze("", &Config::default()).await;
    assert!(matches!(result, Err(SeoError::Http { .. })));
}

#[tokio::test]
async fn test_configured_timeout_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(REFERENCE_PAGE)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config = Config {
        client: ClientConfig {
            timeout_secs: Some(1),
            ..Default::default()
        },
        ..Default::default()
    };

    let url = format!("{}/", mock_server.uri());
    let result = analyze(&url, &config).await;

    assert!(matches!(result, Err(SeoError::Timeout { .. })));
}

#[tokio::test]
async fn test_redirect_is_followed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("location", format!("{}/new", base_url).as_str()),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><head><title>Moved</title></head><body></body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    let url = format!("{}/old", base_url);
    let report = analyze(&url, &Config::default())
        .await
        .expect("Analysis failed");

    assert_eq!(report.title, "Moved");
}

#[tokio::test]
async fn test_configured_user_agent_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("user-agent", "SeoAudit/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(REFERENCE_PAGE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = build_http_client(&ClientConfig {
        user_agent: Some("SeoAudit/1.0".to_string()),
        ..Default::default()
    })
    .expect("Failed to build client");

    let url = format!("{}/", mock_server.uri());
    let report = analyze_with_client(&client, &url, &ReportConfig::default())
        .await
        .expect("Analysis failed");

    assert_eq!(report.title, "Test");
}

#[tokio::test]
async fn test_malformed_body_still_reports() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<div><p>unclosed <a href='/x'>x<img"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let report = analyze(&url, &Config::default())
        .await
        .expect("Analysis failed");

    assert_eq!(report.title, "No title");
    assert_eq!(report.keywords, vec![String::new()]);
    assert_eq!(report.links.internal, 1);
}

#[tokio::test]
async fn test_json_rendering_of_live_report() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(REFERENCE_PAGE))
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let report = analyze(&url, &Config::default())
        .await
        .expect("Analysis failed");

    let json = render_report(&report, ReportFormat::Json, &url).expect("Render failed");
    let value: serde_json::Value = serde_json::from_str(&json).expect("Invalid JSON");

    assert_eq!(value["title"], "Test");
    assert_eq!(value["links"]["internal"], 1);
    let load_time = value["speed"]["loadTime"].as_u64().expect("loadTime missing");
    let response_time = value["speed"]["responseTime"].as_u64().expect("responseTime missing");
    assert!(load_time >= response_time);
}

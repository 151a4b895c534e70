mod common;

use cia_scanner::{HttpProber, Prober};
use common::{fast_settings, hardened_response};
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn test_probe_captures_status_headers_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(hardened_response())
        .expect(1)
        .mount(&mock_server)
        .await;

    let prober = HttpProber::new(&fast_settings()).unwrap();
    let url = format!("{}/page", mock_server.uri());
    let response = prober.probe(&url).await.unwrap();

    assert_eq!(response.url, url);
    assert_eq!(response.status, 200);
    assert_eq!(&response.body[..], b"<html>ok</html>");
    assert!(response.headers.contains_key("x-frame-options"));
    assert!(response.headers.contains_key("Permissions-Policy"));
    assert!(response.elapsed < Duration::from_millis(500));
}

#[tokio::test]
async fn test_probe_reports_non_200_as_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let prober = HttpProber::new(&fast_settings()).unwrap();
    let response = prober.probe(&mock_server.uri()).await.unwrap();

    assert_eq!(response.status, 503);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_probe_timeout_is_a_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let prober = HttpProber::new(&fast_settings()).unwrap();
    let failure = prober.probe(&mock_server.uri()).await.unwrap_err();

    assert!(failure.to_string().starts_with("Request failed: "));
}

#[tokio::test]
async fn test_probe_connection_refused_is_a_failure() {
    // Bind then drop to get a local port with nothing listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let prober = HttpProber::new(&fast_settings()).unwrap();
    let result = prober.probe(&format!("http://{}/", addr)).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_probe_rejects_malformed_and_empty_urls() {
    let prober = HttpProber::new(&fast_settings()).unwrap();

    assert!(prober.probe("").await.is_err());
    assert!(prober.probe("not a url").await.is_err());
}

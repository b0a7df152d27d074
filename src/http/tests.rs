//! Tests for the HTTP client module

use super::*;
use crate::auth::AuthConfig;
use crate::error::Error;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    assert!(config.base_url.is_none());
    assert!(config.user_agent.starts_with("history-export/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com")
        .timeout(Duration::from_secs(60))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, Some("https://api.example.com".to_string()));
    assert_eq!(config.timeout, Some(Duration::from_secs(60)));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");

    let config = HttpClientConfig::builder().no_timeout().build();
    assert!(config.timeout.is_none());
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("start-index", "0")
        .query("max-results", "1000")
        .header("X-Request-Id", "abc123")
        .timeout(Duration::from_secs(10));

    assert_eq!(config.query.get("start-index"), Some(&"0".to_string()));
    assert_eq!(config.query.get("max-results"), Some(&"1000".to_string()));
    assert_eq!(
        config.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
    assert_eq!(config.timeout, Some(Duration::from_secs(10)));
}

#[test]
fn test_build_url() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.hipchat.com/")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(
        client.build_url("v2/user/1/history"),
        "https://api.hipchat.com/v2/user/1/history"
    );
    assert_eq!(
        client.build_url("/v2/user/1/history"),
        "https://api.hipchat.com/v2/user/1/history"
    );
    assert_eq!(
        client.build_url("http://other.example.com/x"),
        "http://other.example.com/x"
    );
}

#[tokio::test]
async fn test_http_client_get_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/user/1/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [{"id": "m1"}]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let data: serde_json::Value = client
        .get_json_with_config("v2/user/1/history", RequestConfig::new())
        .await
        .unwrap();

    assert_eq!(data["items"][0]["id"], "m1");
}

#[tokio::test]
async fn test_http_client_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/user/1/history"))
        .and(query_param("reverse", "true"))
        .and(query_param("start-index", "2000"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .get_with_config(
            "v2/user/1/history",
            RequestConfig::new()
                .query("reverse", "true")
                .query("start-index", "2000"),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_default_and_request_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .and(header("X-Default", "d"))
        .and(header("X-Request-Id", "req-456"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .header("X-Default", "d")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let response = client
        .get_with_config(
            "/api/data",
            RequestConfig::new().header("X-Request-Id", "req-456"),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_bearer_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/secure"))
        .and(header("Authorization", "Bearer secret123"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();
    let client = HttpClient::with_auth(config, AuthConfig::bearer("secret123")).unwrap();
    assert!(client.has_authenticator());

    let response = client
        .get_with_config("/api/secure", RequestConfig::new())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_404_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_with_config("/api/missing", RequestConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
    assert!(err.is_client_error());
    assert_eq!(err.to_string(), "HTTP 404: Not found");
}

#[tokio::test]
async fn test_http_client_error_message_from_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/private"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {
                "code": 401,
                "message": "Invalid OAuth session",
                "type": "Unauthorized"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_with_config("/api/private", RequestConfig::new())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "HTTP 401: Invalid OAuth session");
}

#[tokio::test]
async fn test_http_client_no_retry_on_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/flaky"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_with_config("/api/flaky", RequestConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
    assert!(!err.is_client_error());
}

#[tokio::test]
async fn test_http_client_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_json_with_config::<serde_json::Value>("/api/html", RequestConfig::new())
        .await
        .unwrap_err();

    assert!(err.is_malformed_response());
}

#[tokio::test]
async fn test_http_client_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(50))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client
        .get_with_config("/api/slow", RequestConfig::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}

#[test]
fn test_extract_error_message() {
    assert_eq!(
        extract_error_message(r#"{"error": {"code": 404, "message": "User not found"}}"#),
        "User not found"
    );
    assert_eq!(extract_error_message("  plain text  "), "plain text");

    let long = "x".repeat(2000);
    let message = extract_error_message(&long);
    assert!(message.ends_with("..."));
    assert!(message.len() < long.len());
}

#[test]
fn test_http_client_debug_hides_token() {
    let client =
        HttpClient::with_auth(HttpClientConfig::default(), AuthConfig::bearer("tok-123")).unwrap();
    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("HttpClient"));
    assert!(debug_str.contains("has_authenticator: true"));
    assert!(!debug_str.contains("tok-123"));
}

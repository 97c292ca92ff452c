//! GeminiClient against a local one-shot HTTP server

mod common;

use pkgscribe::gemini::Client;
use pkgscribe::Generator;

fn client(endpoint: &str) -> Client {
    Client::new(endpoint, "gemini-2.0-flash-001", "test-key", None).unwrap()
}

#[test]
fn test_request_shape() {
    let (endpoint, server) = common::serve_once(200, &common::gemini_body("# Docs"));

    let text = client(&endpoint).generate("Document left-pad").unwrap();
    let request = server.join().unwrap();

    assert_eq!(text.as_deref(), Some("# Docs"));
    assert!(request.starts_with("POST /models/gemini-2.0-flash-001:generateContent HTTP/1.1"));

    let lower = request.to_lowercase();
    assert!(lower.contains("x-goog-api-key: test-key"));
    assert!(lower.contains("content-type: application/json"));

    let body_start = request.find("\r\n\r\n").unwrap() + 4;
    let body: serde_json::Value = serde_json::from_str(&request[body_start..]).unwrap();
    assert_eq!(body["contents"][0]["parts"][0]["text"], "Document left-pad");
    assert_eq!(body["contents"][0]["role"], "user");
}

#[test]
fn test_no_candidates_is_empty_text() {
    let (endpoint, server) =
        common::serve_once(200, r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#);

    let text = client(&endpoint).generate("blocked prompt").unwrap();
    server.join().unwrap();

    assert_eq!(text, None);
}

#[test]
fn test_error_status_is_fatal() {
    let body = r#"{"error":{"code":403,"message":"API key not valid","status":"PERMISSION_DENIED"}}"#;
    let (endpoint, server) = common::serve_once(403, body);

    let err = client(&endpoint).generate("prompt").unwrap_err();
    server.join().unwrap();

    let message = err.to_string();
    assert!(message.contains("403"));
    assert!(message.contains("API key not valid"));
}

#[test]
fn test_unparseable_body_is_fatal() {
    let (endpoint, server) = common::serve_once(200, "not json");

    let result = client(&endpoint).generate("prompt");
    server.join().unwrap();

    assert!(result.is_err());
}

#[test]
fn test_unreachable_endpoint_is_fatal() {
    // Bind then drop to get a port nothing listens on
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let result = client(&format!("http://127.0.0.1:{}", port)).generate("prompt");
    assert!(result.is_err());
}

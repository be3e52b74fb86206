use super::*;
use crate::state::test_helpers::test_config;

// =============================================================================
// target_url
// =============================================================================

#[test]
fn joins_backend_path_and_query() {
    let config = test_config("http://api.example.com/api");
    let url = target_url(&config, "batches/123", Some("limit=10&companyId=c1")).unwrap();
    assert_eq!(url.as_str(), "http://api.example.com/api/batches/123?limit=10&companyId=c1");
}

#[test]
fn empty_query_adds_no_question_mark() {
    let config = test_config("http://api.example.com/api");
    assert_eq!(target_url(&config, "batches", Some("")).unwrap().as_str(), "http://api.example.com/api/batches");
    assert_eq!(target_url(&config, "/batches", None).unwrap().as_str(), "http://api.example.com/api/batches");
}

#[test]
fn localhost_is_rewritten_to_loopback_ip() {
    let config = test_config("http://localhost:3000/api");
    let url = target_url(&config, "auth/login", None).unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:3000/api/auth/login");
}

#[test]
fn rewrite_can_be_disabled() {
    let config = RelayConfig { rewrite_localhost: false, ..test_config("http://localhost:3000/api") };
    let url = target_url(&config, "auth/login", None).unwrap();
    assert_eq!(url.host_str(), Some("localhost"));
}

#[test]
fn encoded_segments_are_kept() {
    let config = test_config("http://api.example.com/api");
    let url = target_url(&config, "commodities/red%20onion", None).unwrap();
    assert_eq!(url.path(), "/api/commodities/red%20onion");
}

// =============================================================================
// OutboundBody
// =============================================================================

#[test]
fn get_and_delete_send_no_body() {
    let json = HeaderValue::from_static("application/json");
    for method in [Method::GET, Method::DELETE] {
        assert_eq!(OutboundBody::classify(&method, Some(&json), Bytes::from_static(b"{}")), OutboundBody::None);
    }
    assert_eq!(OutboundBody::None.content_type(), "application/json");
}

#[test]
fn non_multipart_bodies_are_labelled_json() {
    let text = HeaderValue::from_static("text/plain");
    let body = OutboundBody::classify(&Method::POST, Some(&text), Bytes::from_static(b"hello"));
    assert_eq!(body, OutboundBody::Json(Bytes::from_static(b"hello")));
    assert_eq!(body.content_type(), "application/json");

    let missing = OutboundBody::classify(&Method::PATCH, None, Bytes::from_static(b"{\"a\":1}"));
    assert!(matches!(missing, OutboundBody::Json(_)));
}

#[test]
fn multipart_keeps_boundary() {
    let ct = HeaderValue::from_static("multipart/form-data; boundary=----abc123");
    let body = OutboundBody::classify(&Method::POST, Some(&ct), Bytes::from_static(b"------abc123--"));
    assert_eq!(body.content_type(), ct);
    assert!(matches!(body, OutboundBody::Multipart { .. }));
}

// =============================================================================
// decode_response
// =============================================================================

#[test]
fn json_content_type_is_parsed() {
    let body = decode_response(Some("application/json; charset=utf-8"), br#"{"data":[1,2]}"#);
    assert_eq!(body, RelayBody::Json(serde_json::json!({ "data": [1, 2] })));
}

#[test]
fn other_content_types_are_text() {
    assert_eq!(decode_response(Some("text/html"), b"<p>hi</p>"), RelayBody::Text("<p>hi</p>".into()));
    assert_eq!(decode_response(None, b"plain"), RelayBody::Text("plain".into()));
}

#[test]
fn malformed_json_falls_back_to_text() {
    assert_eq!(decode_response(Some("application/json"), b"{oops"), RelayBody::Text("{oops".into()));
}

// =============================================================================
// RelayError
// =============================================================================

#[test]
fn error_classes_map_to_status_and_fixed_message() {
    let cases = [
        (RelayError::Unavailable("dns error: no such host".into()), 503, "Backend service unavailable", "E_BACKEND_UNAVAILABLE"),
        (RelayError::Timeout("operation timed out".into()), 504, "Backend request timed out", "E_BACKEND_TIMEOUT"),
        (RelayError::Failed("connection reset".into()), 500, "Proxy request failed", "E_RELAY_FAILED"),
        (RelayError::InvalidTarget("::".into()), 400, "Invalid proxy path", "E_INVALID_TARGET"),
    ];
    for (err, status, message, code) in cases {
        assert_eq!(err.status().as_u16(), status);
        assert_eq!(err.client_message(), message);
        assert_eq!(err.error_code(), code);
    }
}

#[tokio::test]
async fn error_response_body_hides_detail() {
    let response = RelayError::Unavailable("tcp connect error: 10.1.2.3:3000".into()).into_response();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Backend service unavailable", "code": "E_BACKEND_UNAVAILABLE" }));
}

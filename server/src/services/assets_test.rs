use super::*;
use crate::state::test_helpers::test_config;

#[test]
fn asset_url_uses_origin_without_api_segment() {
    let config = test_config("http://files.example.com/api");
    let url = asset_url(&config, "uploads/profiles/u1.png").unwrap();
    assert_eq!(url.as_str(), "http://files.example.com/uploads/profiles/u1.png");
}

#[test]
fn asset_url_rewrites_localhost() {
    let config = test_config("http://localhost:3000/api");
    let url = asset_url(&config, "/uploads/a.jpg").unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:3000/uploads/a.jpg");
}

#[test]
fn upstream_status_is_preserved_with_generic_message() {
    let err = AssetError::Upstream(StatusCode::NOT_FOUND);
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(err.client_message(), "File not found");

    let err = AssetError::Upstream(StatusCode::FORBIDDEN);
    assert_eq!(err.status(), StatusCode::FORBIDDEN);
}

#[test]
fn transport_failure_is_internal_error() {
    let err = AssetError::Transport("connection refused (os error 111)".into());
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.client_message(), "Error fetching file");
    assert_eq!(err.error_code(), "E_ASSET_FETCH");
}

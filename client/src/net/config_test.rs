use super::*;

#[test]
fn proxy_flag_routes_through_relay() {
    assert_eq!(resolve_api_base(Some("true"), Some("https://api.example.com/api")), RELAY_BASE);
    assert_eq!(resolve_api_base(Some(" TRUE "), None), RELAY_BASE);
}

#[test]
fn proxy_flag_other_values_call_backend_directly() {
    assert_eq!(resolve_api_base(Some("false"), Some("https://api.example.com/api")), "https://api.example.com/api");
    assert_eq!(resolve_api_base(Some("1"), Some("https://api.example.com/api")), "https://api.example.com/api");
}

#[test]
fn missing_url_uses_default_backend() {
    assert_eq!(resolve_api_base(None, None), DEFAULT_API_URL);
    assert_eq!(resolve_api_base(None, Some("   ")), DEFAULT_API_URL);
}

#[test]
fn trailing_slash_is_trimmed() {
    assert_eq!(resolve_api_base(None, Some("https://api.example.com/api/")), "https://api.example.com/api");
}

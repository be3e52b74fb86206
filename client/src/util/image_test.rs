use super::*;

#[test]
fn missing_or_blank_path_has_no_url() {
    assert_eq!(image_url(None), None);
    assert_eq!(image_url(Some("  ")), None);
}

#[test]
fn relay_paths_pass_through() {
    assert_eq!(image_url(Some("/api/uploads/a.png")).as_deref(), Some("/api/uploads/a.png"));
}

#[test]
fn local_backend_urls_route_through_relay() {
    assert_eq!(
        image_url(Some("http://localhost:3000/uploads/profile/u1.png")).as_deref(),
        Some("/api/uploads/uploads/profile/u1.png")
    );
    assert_eq!(
        image_url(Some("http://127.0.0.1:3000/uploads/u1.png?v=2")).as_deref(),
        Some("/api/uploads/uploads/u1.png")
    );
}

#[test]
fn remote_urls_are_untouched() {
    assert_eq!(image_url(Some("https://cdn.example.com/x.jpg")).as_deref(), Some("https://cdn.example.com/x.jpg"));
}

#[test]
fn relative_paths_are_prefixed_once() {
    assert_eq!(image_url(Some("/uploads/x.jpg")).as_deref(), Some("/api/uploads/uploads/x.jpg"));
    assert_eq!(image_url(Some("uploads/x.jpg")).as_deref(), Some("/api/uploads/uploads/x.jpg"));
}

use super::*;

fn hrefs(role: Role) -> Vec<&'static str> {
    nav_links(role).iter().map(|l| l.href).collect()
}

#[test]
fn farmer_links_cover_production_views() {
    assert_eq!(hrefs(Role::Farmer), vec!["/", "/batches", "/sensors", "/logistics", "/feedback", "/profile"]);
}

#[test]
fn retail_links_cover_inventory_and_actions() {
    assert_eq!(hrefs(Role::Retail), vec!["/", "/inventory", "/actions", "/feedback", "/profile"]);
}

#[test]
fn profile_is_active_on_settings_and_legal_pages() {
    for path in ["/profile", "/settings", "/terms", "/privacy"] {
        assert!(is_active("/profile", path), "expected active on {path}");
    }
    assert!(!is_active("/profile", "/"));
}

#[test]
fn other_links_match_exactly() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/", "/batches"));
    assert!(is_active("/batches", "/batches"));
}

#[test]
fn navigation_hidden_on_public_routes_and_when_signed_out() {
    assert!(nav_visible("/", true));
    assert!(nav_visible("/terms", true));
    for path in ["/login", "/signup", "/forgot-password"] {
        assert!(!nav_visible(path, true), "expected hidden on {path}");
    }
    assert!(!nav_visible("/privacy", false));
}

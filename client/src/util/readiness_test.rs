use super::*;
use crate::net::types::{Role, User};

fn signed_in() -> SessionState {
    SessionState {
        user: Some(User {
            id: "u1".to_owned(),
            name: "Sari".to_owned(),
            email: "sari@example.com".to_owned(),
            role: Role::Farmer,
            company_id: None,
            profile_image: None,
        }),
        token: Some("tok".to_owned()),
        hydrated: true,
    }
}

#[test]
fn waits_until_mounted() {
    let state = SessionState { hydrated: true, ..SessionState::default() };
    assert_eq!(route_decision(false, &state), RouteDecision::Wait);
}

#[test]
fn waits_until_store_hydrated_even_without_user() {
    let state = SessionState::default();
    assert_eq!(route_decision(true, &state), RouteDecision::Wait);
}

#[test]
fn never_redirects_before_hydration() {
    for mounted in [false, true] {
        let state = SessionState { hydrated: false, ..SessionState::default() };
        assert_ne!(route_decision(mounted, &state), RouteDecision::RedirectToLogin);
    }
}

#[test]
fn redirects_when_ready_and_anonymous() {
    let state = SessionState { hydrated: true, ..SessionState::default() };
    assert_eq!(route_decision(true, &state), RouteDecision::RedirectToLogin);
}

#[test]
fn proceeds_when_ready_and_signed_in() {
    assert_eq!(route_decision(true, &signed_in()), RouteDecision::Proceed);
}

#[test]
fn public_routes_are_recognized() {
    assert!(is_public_route("/login"));
    assert!(is_public_route("/signup"));
    assert!(is_public_route("/forgot-password"));
    assert!(!is_public_route("/"));
    assert!(!is_public_route("/profile"));
}

//! Two-phase startup and route guarding.
//!
//! SYSTEM CONTEXT
//! ==============
//! A page may only decide "logged out" once both phases are done:
//! 1. the framework has finished reconciling server and client markup
//!    (`use_mounted`), and
//! 2. the session store has read durable storage (`SessionState::hydrated`).
//!
//! Until then the guard waits and never redirects.

#[cfg(test)]
#[path = "readiness_test.rs"]
mod readiness_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionHandle, SessionState};

/// Routes reachable without a session. These never show navigation chrome.
pub const PUBLIC_ROUTES: [&str; 3] = ["/login", "/signup", "/forgot-password"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Wait,
    RedirectToLogin,
    Proceed,
}

#[must_use]
pub fn route_decision(mounted: bool, session: &SessionState) -> RouteDecision {
    if !mounted || !session.hydrated {
        RouteDecision::Wait
    } else if session.user.is_none() {
        RouteDecision::RedirectToLogin
    } else {
        RouteDecision::Proceed
    }
}

#[must_use]
pub fn is_public_route(path: &str) -> bool {
    PUBLIC_ROUTES.contains(&path)
}

/// Signal that turns `true` after the first client-side effect run.
///
/// Effects never run during server rendering, so the server and the first
/// client render both see `false`.
pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move || set_mounted.set(true));
    mounted
}

/// Redirect to `/login` once both phases are done and no user is present.
pub fn install_unauth_redirect<F>(session: SessionHandle, mounted: ReadSignal<bool>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let decision = session.with(|s| route_decision(mounted.get(), s));
        if decision == RouteDecision::RedirectToLogin {
            navigate("/login", NavigateOptions::default());
        }
    });
}

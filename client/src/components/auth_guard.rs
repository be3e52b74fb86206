//! Route guard wrapping every authenticated page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionHandle;
use crate::util::readiness::{RouteDecision, install_unauth_redirect, route_decision, use_mounted};

/// Renders a loading placeholder until the app is mounted and the session is
/// hydrated, redirects anonymous users to `/login`, and otherwise renders
/// `children`.
#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let mounted = use_mounted();
    install_unauth_redirect(session, mounted, use_navigate());

    let ready = move || session.with(|s| route_decision(mounted.get(), s)) == RouteDecision::Proceed;

    view! {
        <Show when=ready fallback=|| view! { <LoadingScreen/> }>
            <main class="page-content">{children()}</main>
        </Show>
    }
}

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}

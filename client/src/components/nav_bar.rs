//! Role-specific navigation bar.
//!
//! Farmers see their production views (batches, sensors, logistics); retail
//! users see inventory and recommended actions. Feedback and profile are
//! shared.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::net::types::Role;
use crate::state::session::{SessionHandle, SessionState};
use crate::util::image::image_url;
use crate::util::readiness::is_public_route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

const fn link(href: &'static str, label: &'static str) -> NavLink {
    NavLink { href, label }
}

pub const FARMER_LINKS: [NavLink; 6] = [
    link("/", "Home"),
    link("/batches", "Batches"),
    link("/sensors", "Sensors"),
    link("/logistics", "Logistics"),
    link("/feedback", "Feedback"),
    link("/profile", "Profile"),
];

pub const RETAIL_LINKS: [NavLink; 5] = [
    link("/", "Home"),
    link("/inventory", "Inventory"),
    link("/actions", "Actions"),
    link("/feedback", "Feedback"),
    link("/profile", "Profile"),
];

#[must_use]
pub fn nav_links(role: Role) -> &'static [NavLink] {
    match role {
        Role::Farmer => &FARMER_LINKS,
        Role::Retail => &RETAIL_LINKS,
    }
}

/// Profile also owns the settings and legal pages.
#[must_use]
pub fn is_active(href: &str, pathname: &str) -> bool {
    if href == "/profile" {
        return matches!(pathname, "/profile" | "/settings" | "/terms" | "/privacy");
    }
    href == pathname
}

/// Navigation shows for a signed-in user on any non-public route.
#[must_use]
pub fn nav_visible(pathname: &str, signed_in: bool) -> bool {
    signed_in && !is_public_route(pathname)
}

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let pathname = use_location().pathname;

    let links = move || {
        let role = session.with(|s| s.role()).unwrap_or(Role::Retail);
        nav_links(role)
            .iter()
            .map(|item| {
                let href = item.href;
                let class = move || {
                    if is_active(href, &pathname.get()) {
                        "nav-bar__link nav-bar__link--active"
                    } else {
                        "nav-bar__link"
                    }
                };
                view! {
                    <li>
                        <a href=href class=class>{item.label}</a>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    let avatar = move || session.with(|s| image_url(s.user.as_ref().and_then(|u| u.profile_image.as_deref())));
    let name = move || session.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let role_label = move || session.with(|s| s.role().map(Role::label).unwrap_or_default());

    let visible = move || nav_visible(&pathname.get(), session.with(SessionState::is_authenticated));

    view! {
        <Show when=visible>
            <nav class="nav-bar">
                <div class="nav-bar__identity">
                    {move || avatar().map(|src| view! { <img class="nav-bar__avatar" src=src alt=""/> })}
                    <span class="nav-bar__name">{name}</span>
                    <span class="nav-bar__role">{role_label}</span>
                </div>
                <ul class="nav-bar__links">{links}</ul>
            </nav>
        </Show>
    }
}

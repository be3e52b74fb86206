//! Profile view with logout.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::endpoints::auth;
use crate::net::gateway::{ApiError, BrowserGateway, Gateway, Navigator};
use crate::net::types::User;
use crate::state::session::SessionHandle;
use crate::util::image::image_url;
use crate::util::storage::DurableStore;

/// Pick the freshest profile: the backend copy, else the stored user.
///
/// Returns the user to show and whether the session should be updated.
#[must_use]
pub fn resolve_profile(fetched: Result<User, ApiError>, stored: Option<User>) -> (Option<User>, bool) {
    match fetched {
        Ok(user) => {
            let changed = stored.as_ref() != Some(&user);
            (Some(user), changed)
        }
        Err(err) => {
            log::warn!("profile request failed: {err}");
            (stored, false)
        }
    }
}

pub async fn load_profile<S, N>(gateway: &Gateway<S, N>, stored: Option<User>) -> (Option<User>, bool)
where
    S: DurableStore,
    N: Navigator,
{
    resolve_profile(gateway.send::<User>(auth::profile()).await, stored)
}

/// Two-letter avatar fallback from the user's name.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let gateway = expect_context::<BrowserGateway>();
    let navigate = use_navigate();

    let profile = LocalResource::new(move || {
        let gateway = gateway.clone();
        let stored = session.snapshot().user;
        async move {
            let (user, changed) = load_profile(&gateway, stored).await;
            if changed {
                if let Some(user) = user.clone() {
                    session.update_user(user);
                }
            }
            user
        }
    });

    let on_logout = move |_| {
        session.logout();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <Suspense fallback=move || view! { <p class="profile-page__loading">"Loading profile..."</p> }>
                {move || profile.get().map(|user| view! { <ProfileCard user=user/> })}
            </Suspense>
            <nav class="profile-page__links">
                <a href="/settings">"Settings"</a>
                <a href="/terms">"Terms of service"</a>
                <a href="/privacy">"Privacy policy"</a>
            </nav>
            <button class="btn btn--danger" on:click=on_logout>"Log out"</button>
        </div>
    }
}

#[component]
fn ProfileCard(user: Option<User>) -> impl IntoView {
    let Some(user) = user else {
        return view! { <p class="profile-page__missing">"Profile unavailable."</p> }.into_any();
    };

    let avatar = match image_url(user.profile_image.as_deref()) {
        Some(src) => view! { <img class="profile-card__avatar" src=src alt=user.name.clone()/> }.into_any(),
        None => view! { <span class="profile-card__avatar profile-card__avatar--initials">{initials(&user.name)}</span> }
            .into_any(),
    };
    let company = user.company_id.clone().unwrap_or_else(|| "-".to_owned());

    view! {
        <section class="profile-card">
            {avatar}
            <h2>{user.name.clone()}</h2>
            <dl>
                <dt>"Email"</dt>
                <dd>{user.email.clone()}</dd>
                <dt>"Role"</dt>
                <dd>{user.role.label()}</dd>
                <dt>"Company"</dt>
                <dd>{company}</dd>
            </dl>
        </section>
    }
    .into_any()
}

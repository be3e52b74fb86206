//! Account settings: edit the display name and email of the signed-in user.
//!
//! The backend has no profile-update route, so saving only rewrites the
//! session copy of the user.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use super::login::validate_email;
use super::signup::validate_name;
use crate::net::types::User;
use crate::state::session::SessionHandle;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub name: String,
    pub email: String,
}

impl SettingsForm {
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self { name: user.name.clone(), email: user.email.clone() }
    }

    /// `user` with the edited fields applied. Role and company are kept.
    ///
    /// # Errors
    ///
    /// Returns the first failing field's message.
    pub fn apply(&self, user: &User) -> Result<User, &'static str> {
        let name = validate_name(&self.name)?;
        let email = validate_email(&self.email)?;
        Ok(User { name, email, ..user.clone() })
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let stored = session.snapshot().user;
    let form = RwSignal::new(stored.as_ref().map(SettingsForm::from_user).unwrap_or_default());
    let role = stored.as_ref().map(|u| u.role.label()).unwrap_or_default();
    let message = RwSignal::new(None::<Result<&'static str, &'static str>>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user) = session.snapshot().user else {
            return;
        };
        match form.with(|f| f.apply(&user)) {
            Ok(updated) => {
                session.update_user(updated);
                message.set(Some(Ok("Settings saved")));
            }
            Err(msg) => message.set(Some(Err(msg))),
        }
    };

    view! {
        <div class="settings-page">
            <a class="detail-page__back" href="/profile">"Back to profile"</a>
            <h1>"Settings"</h1>
            {move || {
                message
                    .get()
                    .map(|m| match m {
                        Ok(text) => view! { <p class="login-message login-message--success">{text}</p> }.into_any(),
                        Err(text) => view! { <p class="login-message login-message--error">{text}</p> }.into_any(),
                    })
            }}
            <form class="settings-form" on:submit=on_submit>
                <label>
                    "Name"
                    <input
                        class="login-input"
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Email"
                    <input
                        class="login-input"
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Role"
                    <input class="login-input" type="text" value=role disabled=true/>
                </label>
                <button class="login-button" type="submit">"Save Changes"</button>
            </form>
        </div>
    }
}

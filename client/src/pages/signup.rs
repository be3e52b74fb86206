//! Account registration page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use super::login::{validate_email, validate_password};
use crate::net::types::{RegisterRequest, Role};

/// Raw form fields as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Option<Role>,
    pub company_id: String,
}

pub(crate) fn validate_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Full name is required");
    }
    if name.chars().count() < 2 {
        return Err("Name must be at least 2 characters");
    }
    Ok(name.to_owned())
}

impl SignupForm {
    /// Check every field and build the registration body.
    ///
    /// # Errors
    ///
    /// Returns the first failing field's message.
    pub fn validate(&self) -> Result<RegisterRequest, &'static str> {
        let name = validate_name(&self.name)?;
        let email = validate_email(&self.email)?;
        let password = validate_password(&self.password)?;
        if self.confirm_password.is_empty() {
            return Err("Please confirm your password");
        }
        if self.confirm_password != password {
            return Err("Passwords do not match");
        }
        let company_id = Some(self.company_id.trim())
            .filter(|id| !id.is_empty())
            .map(str::to_owned);
        Ok(RegisterRequest {
            name,
            email,
            password,
            role: self.role.unwrap_or(Role::Farmer),
            company_id,
        })
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let form = RwSignal::new(SignupForm::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let session = expect_context::<crate::state::session::SessionHandle>();
    #[cfg(feature = "hydrate")]
    let gateway = expect_context::<crate::net::gateway::BrowserGateway>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match form.with(SignupForm::validate) {
            Ok(request) => request,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let gateway = gateway.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = gateway
                    .send::<crate::net::types::AuthResponse>(crate::net::endpoints::auth::register(&request))
                    .await;
                match result {
                    Ok(auth) => {
                        session.set_auth(auth.user, auth.token);
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("registration failed: {e}");
                        error.set(e.user_message("Registration failed. Please try again."));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create an account"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="E-mail"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                    <select
                        class="login-input"
                        on:change=move |ev| {
                            let role = match event_target_value(&ev).as_str() {
                                "RETAIL" => Role::Retail,
                                _ => Role::Farmer,
                            };
                            form.update(|f| f.role = Some(role));
                        }
                    >
                        <option value="FARMER">{Role::Farmer.label()}</option>
                        <option value="RETAIL">{Role::Retail.label()}</option>
                    </select>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Company ID (optional)"
                        prop:value=move || form.with(|f| f.company_id.clone())
                        on:input=move |ev| form.update(|f| f.company_id = event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="login-card__footer">
                    "Already have an account? "
                    <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}

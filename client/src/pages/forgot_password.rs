//! Password reset request form.
//!
//! The backend has no reset route yet; a valid address only switches the page
//! to its confirmation state.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;

use super::login::validate_email;

pub const RESET_SENT_MESSAGE: &str = "Password reset link has been sent to your email.";

/// Validated address to send the reset link to.
///
/// # Errors
///
/// Returns the email validation message.
pub fn reset_target(raw: &str) -> Result<String, &'static str> {
    validate_email(raw)
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match email.with(|e| reset_target(e)) {
            Ok(target) => {
                log::info!("password reset requested for {target}");
                error.set(String::new());
                submitted.set(true);
            }
            Err(msg) => error.set(msg.to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Forgot Password?"</h1>
                <p class="login-card__subtitle">
                    "Enter your email address and we'll send you a link to reset your password"
                </p>
                <Show
                    when=move || submitted.get()
                    fallback=move || {
                        view! {
                            <Show when=move || !error.get().is_empty()>
                                <p class="login-message login-message--error">{move || error.get()}</p>
                            </Show>
                            <form class="login-form" on:submit=on_submit>
                                <input
                                    class="login-input"
                                    type="email"
                                    placeholder="E-mail"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                                <button class="login-button" type="submit">"Send Reset Link"</button>
                            </form>
                        }
                    }
                >
                    <p class="login-message login-message--success">{RESET_SENT_MESSAGE}</p>
                </Show>
                <p class="login-card__footer">
                    <a href="/login">"Back to Login"</a>
                </p>
            </div>
        </div>
    }
}

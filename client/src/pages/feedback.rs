//! Feedback form: star rating, issue categories and a free-text comment.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use leptos::prelude::*;

use crate::net::types::FeedbackRequest;

pub const FEEDBACK_TYPES: [&str; 4] = ["Inventory stock", "Spoilage misread", "Rerouting", "Pricing"];
pub const DEFAULT_RATING: u8 = 3;
pub const MAX_RATING: u8 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackForm {
    pub rating: u8,
    pub selected: Vec<String>,
    pub comment: String,
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self {
            rating: DEFAULT_RATING,
            selected: vec!["Spoilage misread".to_owned(), "Rerouting".to_owned()],
            comment: String::new(),
        }
    }
}

impl FeedbackForm {
    /// Add `kind` if absent, otherwise remove it.
    pub fn toggle(&mut self, kind: &str) {
        if let Some(pos) = self.selected.iter().position(|t| t == kind) {
            self.selected.remove(pos);
        } else {
            self.selected.push(kind.to_owned());
        }
    }

    #[must_use]
    pub fn is_selected(&self, kind: &str) -> bool {
        self.selected.iter().any(|t| t == kind)
    }

    /// The empty form shown after a successful submission.
    #[must_use]
    pub fn cleared() -> Self {
        Self { rating: DEFAULT_RATING, selected: Vec::new(), comment: String::new() }
    }

    /// # Errors
    ///
    /// Returns a message when the rating is out of range or no category is
    /// selected.
    pub fn validate(&self) -> Result<FeedbackRequest, &'static str> {
        if !(1..=MAX_RATING).contains(&self.rating) {
            return Err("Rating must be between 1 and 5");
        }
        if self.selected.is_empty() {
            return Err("Select at least one feedback type");
        }
        Ok(FeedbackRequest {
            rating: self.rating,
            feedback_types: self.selected.clone(),
            message: self.comment.trim().to_owned(),
            batch_id: None,
        })
    }
}

#[component]
pub fn FeedbackPage() -> impl IntoView {
    let form = RwSignal::new(FeedbackForm::default());
    let notice = RwSignal::new(None::<Result<String, String>>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let gateway = expect_context::<crate::net::gateway::BrowserGateway>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match form.with(FeedbackForm::validate) {
            Ok(request) => request,
            Err(msg) => {
                notice.set(Some(Err(msg.to_owned())));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                let result = gateway
                    .send::<serde_json::Value>(crate::net::endpoints::feedback::create(&request))
                    .await;
                match result {
                    Ok(_) => {
                        form.set(FeedbackForm::cleared());
                        notice.set(Some(Ok("Feedback submitted successfully!".to_owned())));
                    }
                    Err(e) => {
                        log::warn!("feedback submission failed: {e}");
                        notice.set(Some(Err(e.user_message("Failed to submit feedback"))));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    let stars = (1..=MAX_RATING)
        .map(|star| {
            view! {
                <button
                    type="button"
                    class="rating__star"
                    class:rating__star--filled=move || form.with(|f| star <= f.rating)
                    on:click=move |_| form.update(|f| f.rating = star)
                >
                    "★"
                </button>
            }
        })
        .collect::<Vec<_>>();

    let chips = FEEDBACK_TYPES
        .into_iter()
        .map(|kind| {
            view! {
                <button
                    type="button"
                    class="chip"
                    class:chip--selected=move || form.with(|f| f.is_selected(kind))
                    on:click=move |_| form.update(|f| f.toggle(kind))
                >
                    {kind}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="feedback-page">
            <h1>"Feedback"</h1>
            {move || {
                notice.get().map(|n| match n {
                    Ok(msg) => view! { <p class="feedback-page__notice">{msg}</p> }.into_any(),
                    Err(msg) => view! { <p class="feedback-page__notice feedback-page__notice--error">{msg}</p> }.into_any(),
                })
            }}
            <form class="feedback-form" on:submit=on_submit>
                <label>"How was your experience?"</label>
                <div class="rating">{stars}</div>
                <label>"What went wrong?"</label>
                <div class="chips">{chips}</div>
                <textarea
                    class="feedback-form__comment"
                    placeholder="Tell us more (optional)"
                    prop:value=move || form.with(|f| f.comment.clone())
                    on:input=move |ev| form.update(|f| f.comment = event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Submit" }}
                </button>
            </form>
        </div>
    }
}

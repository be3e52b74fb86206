//! Retail recommendations with a per-priority summary.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use leptos::prelude::*;

use super::fetch_records;
use crate::components::record_list::{Column, RecordList};
use crate::net::endpoints::{ListParams, recommendations};
use crate::net::gateway::BrowserGateway;
use crate::net::types::Record;
use crate::state::session::SessionHandle;

const COLUMNS: [Column; 4] = [
    ("recommendationType", "Type"),
    ("priority", "Priority"),
    ("explanation", "Details"),
    ("createdAt", "Created"),
];

/// Counts of `INFO` / `WARNING` / `CRITICAL` recommendations, shown as
/// Good / Warning / Critical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrioritySummary {
    pub good: usize,
    pub warning: usize,
    pub critical: usize,
}

impl PrioritySummary {
    #[must_use]
    pub fn from_records(records: &[Record]) -> Self {
        records.iter().fold(Self::default(), |mut acc, rec| {
            match rec.get("priority").and_then(serde_json::Value::as_str) {
                Some("INFO") => acc.good += 1,
                Some("WARNING") => acc.warning += 1,
                Some("CRITICAL") => acc.critical += 1,
                _ => {}
            }
            acc
        })
    }

    #[must_use]
    pub fn cards(self) -> [(&'static str, usize); 3] {
        [("Good", self.good), ("Warning", self.warning), ("Critical", self.critical)]
    }
}

#[component]
pub fn ActionsPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let gateway = expect_context::<BrowserGateway>();

    let records = LocalResource::new(move || {
        let gateway = gateway.clone();
        let company_id = session.snapshot().company_id();
        async move {
            let Some(company_id) = company_id else {
                return Vec::new();
            };
            let params = ListParams::limit(100).company(company_id);
            fetch_records(&gateway, "recommendations", recommendations::list(&params)).await
        }
    });

    view! {
        <div class="list-page">
            <h1>"Actions"</h1>
            <Suspense fallback=move || view! { <p class="list-page__loading">"Loading recommendations..."</p> }>
                {move || {
                    records.get().map(|records| {
                        let cards = PrioritySummary::from_records(&records)
                            .cards()
                            .into_iter()
                            .map(|(label, count)| {
                                view! {
                                    <div class="figure-card">
                                        <span class="figure-card__label">{label}</span>
                                        <span class="figure-card__value">{count}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>();
                        view! {
                            <section class="list-page__summary">{cards}</section>
                            <RecordList records=records columns=COLUMNS.to_vec() empty_text="No recommendations yet."/>
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

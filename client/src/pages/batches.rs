//! Farmer batch list.

use leptos::prelude::*;

use super::fetch_records;
use crate::components::record_list::{Column, RecordList};
use crate::net::endpoints::{ListParams, batches};
use crate::net::gateway::BrowserGateway;
use crate::net::types::Record;
use crate::state::session::SessionHandle;

const COLUMNS: [Column; 4] = [
    ("commodity.name", "Commodity"),
    ("quantity", "Quantity"),
    ("status", "Status"),
    ("harvestDate", "Harvested"),
];

fn batch_href(record: &Record) -> Option<String> {
    record.get("id").and_then(serde_json::Value::as_str).map(|id| format!("/batches/{id}"))
}

#[component]
pub fn BatchesPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let gateway = expect_context::<BrowserGateway>();

    let records = LocalResource::new(move || {
        let gateway = gateway.clone();
        let mut params = ListParams::limit(100);
        params.company_id = session.snapshot().company_id();
        async move { fetch_records(&gateway, "batches", batches::list(&params)).await }
    });

    view! {
        <div class="list-page">
            <h1>"Batches"</h1>
            <Suspense fallback=move || view! { <p class="list-page__loading">"Loading batches..."</p> }>
                {move || {
                    records.get().map(|records| {
                        view! {
                            <RecordList
                                records=records
                                columns=COLUMNS.to_vec()
                                empty_text="No batches found."
                                link=batch_href
                            />
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

//! Transport routes.

use leptos::prelude::*;

use super::fetch_records;
use crate::components::record_list::{Column, RecordList};
use crate::net::endpoints::{ListParams, logistics};
use crate::net::gateway::BrowserGateway;

const COLUMNS: [Column; 5] = [
    ("origin", "From"),
    ("destination", "To"),
    ("status", "Status"),
    ("estimatedArrival", "ETA"),
    ("batchId", "Batch"),
];

#[component]
pub fn LogisticsPage() -> impl IntoView {
    let gateway = expect_context::<BrowserGateway>();

    let records = LocalResource::new(move || {
        let gateway = gateway.clone();
        async move { fetch_records(&gateway, "logistics", logistics::routes(&ListParams::limit(100))).await }
    });

    view! {
        <div class="list-page">
            <h1>"Logistics"</h1>
            <Suspense fallback=move || view! { <p class="list-page__loading">"Loading routes..."</p> }>
                {move || {
                    records.get().map(|records| {
                        view! { <RecordList records=records columns=COLUMNS.to_vec() empty_text="No routes found."/> }
                    })
                }}
            </Suspense>
        </div>
    }
}

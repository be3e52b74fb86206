//! Sensor fleet overview.

use leptos::prelude::*;

use super::fetch_records;
use crate::components::record_list::{Column, RecordList};
use crate::net::endpoints::{ListParams, sensors};
use crate::net::gateway::BrowserGateway;

const COLUMNS: [Column; 4] = [
    ("name", "Sensor"),
    ("type", "Type"),
    ("status", "Status"),
    ("location", "Location"),
];

#[component]
pub fn SensorsPage() -> impl IntoView {
    let gateway = expect_context::<BrowserGateway>();

    let records = LocalResource::new(move || {
        let gateway = gateway.clone();
        async move { fetch_records(&gateway, "sensors", sensors::list(&ListParams::limit(100))).await }
    });

    view! {
        <div class="list-page">
            <h1>"Sensors"</h1>
            <Suspense fallback=move || view! { <p class="list-page__loading">"Loading sensors..."</p> }>
                {move || {
                    records.get().map(|records| {
                        view! { <RecordList records=records columns=COLUMNS.to_vec() empty_text="No sensors found."/> }
                    })
                }}
            </Suspense>
        </div>
    }
}

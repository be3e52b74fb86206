//! Single batch with its latest quality score and sensor readings.

#[cfg(test)]
#[path = "batch_detail_test.rs"]
mod batch_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::fetch_records;
use crate::components::record_list::{Column, RecordList, field_text};
use crate::net::endpoints::{batches, quality, sensors};
use crate::net::gateway::{ApiError, BrowserGateway, Gateway, Navigator, or_default};
use crate::net::types::Record;
use crate::util::storage::DurableStore;

const READING_COLUMNS: [Column; 4] = [
    ("sensorId", "Sensor"),
    ("type", "Type"),
    ("value", "Value"),
    ("timestamp", "Time"),
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchDetail {
    pub batch: Option<Record>,
    pub latest_score: Option<Record>,
    pub readings: Vec<Record>,
}

/// A single record, or `None` when the fetch failed (logged) or the backend
/// answered `null`.
fn present(label: &str, result: Result<Record, ApiError>) -> Option<Record> {
    Some(or_default(label, result)).filter(|v| !v.is_null())
}

/// Fetch the batch, its latest score and its readings concurrently. The
/// batch and score degrade to `None`, readings to an empty list.
pub async fn load_batch_detail<S, N>(gateway: &Gateway<S, N>, batch_id: &str) -> BatchDetail
where
    S: DurableStore,
    N: Navigator,
{
    let (batch, latest_score, readings) = futures::join!(
        gateway.send::<Record>(batches::by_id(batch_id)),
        gateway.send::<Record>(quality::latest_score(batch_id)),
        fetch_records(gateway, "sensor readings", sensors::readings(batch_id)),
    );
    BatchDetail {
        batch: present("batch", batch),
        latest_score: present("latest quality score", latest_score),
        readings,
    }
}

#[component]
pub fn BatchDetailPage() -> impl IntoView {
    let gateway = expect_context::<BrowserGateway>();
    let params = use_params_map();

    let detail = LocalResource::new(move || {
        let gateway = gateway.clone();
        let batch_id = params.with(|p| p.get("id")).unwrap_or_default();
        async move { load_batch_detail(&gateway, &batch_id).await }
    });

    view! {
        <div class="detail-page">
            <a class="detail-page__back" href="/batches">"Back to batches"</a>
            <Suspense fallback=move || view! { <p class="detail-page__loading">"Loading batch..."</p> }>
                {move || detail.get().map(|d| view! { <BatchDetailBody detail=d/> })}
            </Suspense>
        </div>
    }
}

#[component]
fn BatchDetailBody(detail: BatchDetail) -> impl IntoView {
    let Some(batch) = detail.batch else {
        return view! { <p class="detail-page__missing">"Batch not found."</p> }.into_any();
    };

    let score = detail.latest_score.as_ref().map(|score| {
        view! {
            <section class="detail-page__score">
                <h2>"Latest quality"</h2>
                <dl>
                    <dt>"Score"</dt>
                    <dd>{field_text(score, "score")}</dd>
                    <dt>"Temperature"</dt>
                    <dd>{field_text(score, "temperature")}</dd>
                    <dt>"Humidity"</dt>
                    <dd>{field_text(score, "humidity")}</dd>
                    <dt>"Measured"</dt>
                    <dd>{field_text(score, "timestamp")}</dd>
                </dl>
            </section>
        }
    });

    let history_href = batch
        .get("id")
        .and_then(serde_json::Value::as_str)
        .map(|id| format!("/quality/{id}"));

    view! {
        <h1>{field_text(&batch, "commodity.name")}</h1>
        <dl class="detail-page__facts">
            <dt>"Quantity"</dt>
            <dd>{field_text(&batch, "quantity")}</dd>
            <dt>"Status"</dt>
            <dd>{field_text(&batch, "status")}</dd>
            <dt>"Harvested"</dt>
            <dd>{field_text(&batch, "harvestDate")}</dd>
        </dl>
        {score}
        {history_href.map(|href| view! { <a class="detail-page__history" href=href>"Quality history"</a> })}
        <section class="detail-page__readings">
            <h2>"Sensor readings"</h2>
            <RecordList records=detail.readings columns=READING_COLUMNS.to_vec() empty_text="No readings yet."/>
        </section>
    }
    .into_any()
}

//! Quality history for one batch: score readings and shelf-life predictions.

#[cfg(test)]
#[path = "quality_test.rs"]
mod quality_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::fetch_records;
use crate::components::record_list::{Column, RecordList, field_text};
use crate::net::endpoints::quality;
use crate::net::gateway::{BrowserGateway, Gateway, Navigator};
use crate::net::types::Record;
use crate::util::storage::DurableStore;

const SCORE_COLUMNS: [Column; 4] = [
    ("score", "Score"),
    ("temperature", "Temperature"),
    ("humidity", "Humidity"),
    ("timestamp", "Timestamp"),
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QualityHistory {
    pub scores: Vec<Record>,
    pub predictions: Vec<Record>,
}

impl QualityHistory {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty() && self.predictions.is_empty()
    }
}

/// One rendered prediction row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictionRow {
    pub shelf_life: String,
    pub confidence: String,
    pub timestamp: String,
}

impl PredictionRow {
    /// Confidence arrives as a 0..=1 fraction and is shown as a percentage.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        let confidence = record
            .get("confidence")
            .and_then(serde_json::Value::as_f64)
            .map_or_else(|| "-".to_owned(), |c| format!("{:.1}%", c * 100.0));
        Self {
            shelf_life: format!("{} days", field_text(record, "predictedShelfLife")),
            confidence,
            timestamp: field_text(record, "timestamp"),
        }
    }
}

/// Both histories are fetched concurrently; each degrades to an empty list.
pub async fn load_quality_history<S, N>(gateway: &Gateway<S, N>, batch_id: &str) -> QualityHistory
where
    S: DurableStore,
    N: Navigator,
{
    let (scores, predictions) = futures::join!(
        fetch_records(gateway, "quality score history", quality::score_history(batch_id)),
        fetch_records(gateway, "shelf-life prediction history", quality::prediction_history(batch_id)),
    );
    QualityHistory { scores, predictions }
}

#[component]
pub fn QualityPage() -> impl IntoView {
    let gateway = expect_context::<BrowserGateway>();
    let params = use_params_map();
    let batch_id = move || params.with(|p| p.get("batchId")).unwrap_or_default();

    let history = LocalResource::new(move || {
        let gateway = gateway.clone();
        let batch_id = batch_id();
        async move { load_quality_history(&gateway, &batch_id).await }
    });

    view! {
        <div class="detail-page">
            <a class="detail-page__back" href=move || format!("/batches/{}", batch_id())>"Back to batch"</a>
            <h1>"Quality History"</h1>
            <Suspense fallback=move || view! { <p class="detail-page__loading">"Loading..."</p> }>
                {move || history.get().map(|h| view! { <QualityHistoryBody history=h/> })}
            </Suspense>
        </div>
    }
}

#[component]
fn QualityHistoryBody(history: QualityHistory) -> impl IntoView {
    if history.is_empty() {
        return view! { <p class="detail-page__missing">"No quality data available for this batch"</p> }.into_any();
    }

    let scores = (!history.scores.is_empty()).then(|| {
        view! {
            <section class="detail-page__scores">
                <h2>"Quality Scores"</h2>
                <RecordList records=history.scores.clone() columns=SCORE_COLUMNS.to_vec()/>
            </section>
        }
    });

    let predictions = (!history.predictions.is_empty()).then(|| {
        let rows = history
            .predictions
            .iter()
            .map(PredictionRow::from_record)
            .map(|row| {
                view! {
                    <tr>
                        <td>{row.shelf_life}</td>
                        <td>{row.confidence}</td>
                        <td>{row.timestamp}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>();
        view! {
            <section class="detail-page__predictions">
                <h2>"Shelf Life Predictions"</h2>
                <table class="record-list">
                    <thead>
                        <tr>
                            <th>"Predicted Shelf Life"</th>
                            <th>"Confidence"</th>
                            <th>"Timestamp"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </section>
        }
    });

    view! { {scores} {predictions} }.into_any()
}

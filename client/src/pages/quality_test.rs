use serde_json::json;

use super::*;
use crate::util::storage::MemoryStore;

struct NoNavigation;

impl Navigator for NoNavigation {
    fn hard_redirect(&self, _path: &str) {}
}

#[test]
fn unreachable_backend_yields_empty_history() {
    let gateway = Gateway::new("/api/proxy", MemoryStore::new(), NoNavigation);
    let history = futures::executor::block_on(load_quality_history(&gateway, "b1"));
    assert_eq!(history, QualityHistory::default());
    assert!(history.is_empty());
}

#[test]
fn history_with_only_predictions_is_not_empty() {
    let history = QualityHistory { scores: Vec::new(), predictions: vec![json!({ "id": "p1" })] };
    assert!(!history.is_empty());
}

#[test]
fn prediction_row_formats_days_and_percentage() {
    let row = PredictionRow::from_record(&json!({
        "predictedShelfLife": 6,
        "confidence": 0.875,
        "timestamp": "2025-01-04T10:00:00Z",
    }));
    assert_eq!(row.shelf_life, "6 days");
    assert_eq!(row.confidence, "87.5%");
    assert_eq!(row.timestamp, "2025-01-04T10:00:00Z");
}

#[test]
fn prediction_row_without_confidence_shows_dash() {
    let row = PredictionRow::from_record(&json!({ "predictedShelfLife": 3 }));
    assert_eq!(row.confidence, "-");
    assert_eq!(row.timestamp, "-");
}

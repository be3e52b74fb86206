use super::*;

#[test]
fn field_text_reads_strings_without_quotes() {
    let record = serde_json::json!({ "id": "b1", "status": "IN_TRANSIT" });
    assert_eq!(field_text(&record, "status"), "IN_TRANSIT");
}

#[test]
fn field_text_follows_dotted_paths() {
    let record = serde_json::json!({ "commodity": { "name": "Chili" } });
    assert_eq!(field_text(&record, "commodity.name"), "Chili");
}

#[test]
fn field_text_renders_numbers_and_bools() {
    let record = serde_json::json!({ "quantity": 12, "active": true, "score": 87.5 });
    assert_eq!(field_text(&record, "quantity"), "12");
    assert_eq!(field_text(&record, "active"), "true");
    assert_eq!(field_text(&record, "score"), "87.5");
}

#[test]
fn field_text_missing_or_null_is_dash() {
    let record = serde_json::json!({ "eta": null });
    assert_eq!(field_text(&record, "eta"), "-");
    assert_eq!(field_text(&record, "origin.name"), "-");
}

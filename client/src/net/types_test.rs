use super::*;

#[test]
fn user_deserializes_camel_case_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "name": "Sari",
        "email": "sari@example.com",
        "role": "FARMER",
        "companyId": "c9",
        "profileImage": "/uploads/sari.png"
    }))
    .unwrap();
    assert_eq!(user.role, Role::Farmer);
    assert_eq!(user.company_id.as_deref(), Some("c9"));
    assert_eq!(user.profile_image.as_deref(), Some("/uploads/sari.png"));
}

#[test]
fn user_optional_fields_default_to_none() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u2",
        "name": "Budi",
        "email": "budi@example.com",
        "role": "RETAIL"
    }))
    .unwrap();
    assert_eq!(user.role, Role::Retail);
    assert!(user.company_id.is_none());
    assert!(user.profile_image.is_none());
}

#[test]
fn role_accepts_lowercase_alias() {
    let role: Role = serde_json::from_str("\"retail\"").unwrap();
    assert_eq!(role, Role::Retail);
    assert_eq!(serde_json::to_string(&role).unwrap(), "\"RETAIL\"");
}

#[test]
fn user_serialization_omits_absent_optionals() {
    let user = User {
        id: "u3".to_owned(),
        name: "Ayu".to_owned(),
        email: "ayu@example.com".to_owned(),
        role: Role::Farmer,
        company_id: None,
        profile_image: None,
    };
    let value = serde_json::to_value(&user).unwrap();
    assert!(value.get("companyId").is_none());
    assert!(value.get("profileImage").is_none());
    assert_eq!(value["role"], "FARMER");
}

#[test]
fn register_request_uses_camel_case_company_id() {
    let req = RegisterRequest {
        name: "Ayu".to_owned(),
        email: "ayu@example.com".to_owned(),
        password: "secret1".to_owned(),
        role: Role::Retail,
        company_id: Some("c1".to_owned()),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["companyId"], "c1");
    assert_eq!(value["role"], "RETAIL");
}

#[test]
fn page_without_data_is_empty() {
    let page: Page<Record> = serde_json::from_str("{}").unwrap();
    assert!(page.data.is_empty());
}

#[test]
fn inventory_row_display_name_falls_back_to_unknown() {
    let row: InventoryRow = serde_json::from_value(serde_json::json!({ "id": "i1", "quantity": 4 })).unwrap();
    assert_eq!(row.display_name(), "Unknown");

    let named: InventoryRow = serde_json::from_value(serde_json::json!({
        "id": "i2",
        "quantity": 0,
        "commodity": { "name": "Spinach" }
    }))
    .unwrap();
    assert_eq!(named.display_name(), "Spinach");
}

#[test]
fn dashboard_summary_tolerates_missing_fields() {
    let summary: DashboardSummary = serde_json::from_value(serde_json::json!({ "totalBatches": 12 })).unwrap();
    assert_eq!(summary.total_batches, Some(12));
    assert!(summary.average_quality.is_none());
}

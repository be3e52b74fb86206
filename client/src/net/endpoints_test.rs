use super::*;
use crate::net::gateway::Method;
use crate::net::types::Role;

fn query(req: &ApiRequest) -> Vec<(&str, &str)> {
    req.query.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}

#[test]
fn login_posts_credentials() {
    let req = auth::login(&LoginRequest { email: "a@b.co".to_owned(), password: "secret1".to_owned() });
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/auth/login");
    assert_eq!(req.body, Some(serde_json::json!({ "email": "a@b.co", "password": "secret1" })));
}

#[test]
fn register_omits_missing_company() {
    let req = auth::register(&RegisterRequest {
        name: "Ayu".to_owned(),
        email: "ayu@example.com".to_owned(),
        password: "secret1".to_owned(),
        role: Role::Farmer,
        company_id: None,
    });
    assert_eq!(req.path, "/auth/register");
    let body = req.body.unwrap();
    assert_eq!(body["role"], "FARMER");
    assert!(body.get("companyId").is_none());
}

#[test]
fn list_params_only_emit_set_fields() {
    let params = ListParams { page: Some(2), status: Some("IN_TRANSIT".to_owned()), ..ListParams::default() };
    let req = batches::list(&params);
    assert_eq!(req.path, "/batches");
    assert_eq!(query(&req), vec![("page", "2"), ("status", "IN_TRANSIT")]);
}

#[test]
fn list_params_builder_sets_limit_and_company() {
    let req = recommendations::list(&ListParams::limit(100).company("c1"));
    assert_eq!(query(&req), vec![("limit", "100"), ("companyId", "c1")]);
}

#[test]
fn dashboard_routes_carry_company_id() {
    assert_eq!(query(&analytics::dashboard("c1")), vec![("companyId", "c1")]);
    let perf = quality::performance(Some("c1"), Some(7));
    assert_eq!(perf.path, "/quality/performance");
    assert_eq!(query(&perf), vec![("companyId", "c1"), ("days", "7")]);
}

#[test]
fn batch_scoped_paths() {
    assert_eq!(batches::by_id("b7").path, "/batches/b7");
    assert_eq!(quality::latest_score("b7").path, "/quality/batches/b7/scores/latest");
    assert_eq!(quality::prediction_history("b7").path, "/quality/batches/b7/predictions/history");
    assert_eq!(sensors::readings("b7").path, "/sensors/batches/b7/readings");
    assert_eq!(logistics::batch_routes("b7").path, "/logistics/batches/b7/routes");
}

#[test]
fn low_stock_store_filter_is_optional() {
    assert!(retail::low_stock(None).query.is_empty());
    assert_eq!(query(&retail::low_stock(Some("s1"))), vec![("storeId", "s1")]);
}

#[test]
fn recommendation_update_patches_only_given_fields() {
    let req = recommendations::update("r1", None, Some("CRITICAL"));
    assert_eq!(req.method, Method::Patch);
    assert_eq!(req.path, "/recommendations/r1");
    assert_eq!(req.body, Some(serde_json::json!({ "priority": "CRITICAL" })));
}

#[test]
fn action_create_includes_notes_when_present() {
    let req = actions::create("r1", "u1", "REROUTED", Some("moved to cold store"));
    let body = req.body.unwrap();
    assert_eq!(body["recommendationId"], "r1");
    assert_eq!(body["actionTaken"], "REROUTED");
    assert_eq!(body["notes"], "moved to cold store");

    let bare = actions::create("r1", "u1", "IGNORED", None).body.unwrap();
    assert!(bare.get("notes").is_none());
}

#[test]
fn feedback_create_body_uses_camel_case() {
    let req = feedback::create(&FeedbackRequest {
        rating: 4,
        feedback_types: vec!["Pricing".to_owned()],
        message: "too high".to_owned(),
        batch_id: None,
    });
    assert_eq!(req.method, Method::Post);
    assert_eq!(
        req.body,
        Some(serde_json::json!({ "rating": 4, "feedbackTypes": ["Pricing"], "message": "too high" }))
    );
}

#[test]
fn outcome_stats_without_filters_has_empty_query() {
    let req = outcomes::stats(None, None);
    assert_eq!(req.path, "/outcomes/stats");
    assert!(req.query.is_empty());
}

#[test]
fn reference_routes_not_yet_used_by_pages() {
    assert_eq!(commodities::list().path, "/commodities");
    assert_eq!(commodities::by_id("k1").path, "/commodities/k1");
    assert_eq!(outcomes::list(&ListParams::limit(5)).path, "/outcomes");
    assert_eq!(outcomes::by_id("o1").path, "/outcomes/o1");
    assert_eq!(analytics::weekly_metrics(&ListParams::default()).path, "/analytics/weekly-metrics");
    assert_eq!(recommendations::by_id("r1").path, "/recommendations/r1");
    assert_eq!(logistics::route_by_id("l1").path, "/logistics/routes/l1");
    assert_eq!(logistics::active().path, "/logistics/active");
    assert_eq!(quality::score_history("b7").path, "/quality/batches/b7/scores/history");
}

#[test]
fn company_scoped_summaries() {
    let summary = batches::summary("c1");
    assert_eq!(summary.path, "/batches/summary");
    assert_eq!(query(&summary), vec![("companyId", "c1")]);

    let stats = actions::stats("c1", 30);
    assert_eq!(stats.path, "/actions/stats");
    assert_eq!(query(&stats), vec![("companyId", "c1"), ("days", "30")]);

    let urgent = recommendations::by_priority("CRITICAL", Some("c1"));
    assert_eq!(urgent.path, "/recommendations/priority/CRITICAL");
    assert_eq!(query(&urgent), vec![("companyId", "c1")]);
}

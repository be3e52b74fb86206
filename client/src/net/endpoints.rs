//! Backend REST routes as [`ApiRequest`] builders.
//!
//! Every function is pure: it names the route and its parameters and leaves
//! transport, token injection and error handling to the gateway. Unset
//! optional parameters are left out of the query string.
//!
//! The module covers the whole backend surface, including routes no page
//! calls yet (commodities, outcomes, weekly metrics, action logging and the
//! like), so new screens only need a loader.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use super::gateway::ApiRequest;
use super::types::{FeedbackRequest, LoginRequest, RegisterRequest};

/// Common list filters. Each backend route reads the subset it understands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub company_id: Option<String>,
    pub status: Option<String>,
    pub batch_id: Option<String>,
    pub store_id: Option<String>,
    pub priority: Option<String>,
    pub recommendation_type: Option<String>,
    pub feedback_type: Option<String>,
}

impl ListParams {
    #[must_use]
    pub fn limit(limit: u32) -> Self {
        Self { limit: Some(limit), ..Self::default() }
    }

    #[must_use]
    pub fn company(mut self, company_id: impl Into<String>) -> Self {
        self.company_id = Some(company_id.into());
        self
    }

    fn apply(&self, req: ApiRequest) -> ApiRequest {
        req.query_opt("page", self.page)
            .query_opt("limit", self.limit)
            .query_opt("companyId", self.company_id.as_deref())
            .query_opt("status", self.status.as_deref())
            .query_opt("batchId", self.batch_id.as_deref())
            .query_opt("storeId", self.store_id.as_deref())
            .query_opt("priority", self.priority.as_deref())
            .query_opt("recommendationType", self.recommendation_type.as_deref())
            .query_opt("feedbackType", self.feedback_type.as_deref())
    }
}

fn list(path: &str, params: &ListParams) -> ApiRequest {
    params.apply(ApiRequest::get(path))
}

pub mod auth {
    use super::*;

    #[must_use]
    pub fn login(body: &LoginRequest) -> ApiRequest {
        ApiRequest::post("/auth/login", serde_json::json!(body))
    }

    #[must_use]
    pub fn register(body: &RegisterRequest) -> ApiRequest {
        ApiRequest::post("/auth/register", serde_json::json!(body))
    }

    #[must_use]
    pub fn profile() -> ApiRequest {
        ApiRequest::get("/auth/profile")
    }
}

pub mod analytics {
    use super::*;

    #[must_use]
    pub fn dashboard(company_id: &str) -> ApiRequest {
        ApiRequest::get("/analytics/dashboard").query("companyId", company_id)
    }

    #[must_use]
    pub fn weekly_metrics(params: &ListParams) -> ApiRequest {
        list("/analytics/weekly-metrics", params)
    }
}

pub mod quality {
    use super::*;

    /// Quality trend over the last `days` days.
    #[must_use]
    pub fn performance(company_id: Option<&str>, days: Option<u32>) -> ApiRequest {
        ApiRequest::get("/quality/performance")
            .query_opt("companyId", company_id)
            .query_opt("days", days)
    }

    #[must_use]
    pub fn latest_score(batch_id: &str) -> ApiRequest {
        ApiRequest::get(format!("/quality/batches/{batch_id}/scores/latest"))
    }

    #[must_use]
    pub fn score_history(batch_id: &str) -> ApiRequest {
        ApiRequest::get(format!("/quality/batches/{batch_id}/scores/history"))
    }

    #[must_use]
    pub fn latest_prediction(batch_id: &str) -> ApiRequest {
        ApiRequest::get(format!("/quality/batches/{batch_id}/predictions/latest"))
    }

    #[must_use]
    pub fn prediction_history(batch_id: &str) -> ApiRequest {
        ApiRequest::get(format!("/quality/batches/{batch_id}/predictions/history"))
    }
}

pub mod batches {
    use super::*;

    #[must_use]
    pub fn list(params: &ListParams) -> ApiRequest {
        super::list("/batches", params)
    }

    #[must_use]
    pub fn by_id(id: &str) -> ApiRequest {
        ApiRequest::get(format!("/batches/{id}"))
    }

    #[must_use]
    pub fn summary(company_id: &str) -> ApiRequest {
        ApiRequest::get("/batches/summary").query("companyId", company_id)
    }
}

pub mod recommendations {
    use super::*;

    #[must_use]
    pub fn list(params: &ListParams) -> ApiRequest {
        super::list("/recommendations", params)
    }

    #[must_use]
    pub fn by_priority(priority: &str, company_id: Option<&str>) -> ApiRequest {
        ApiRequest::get(format!("/recommendations/priority/{priority}")).query_opt("companyId", company_id)
    }

    #[must_use]
    pub fn by_id(id: &str) -> ApiRequest {
        ApiRequest::get(format!("/recommendations/{id}"))
    }

    /// Patch explanation and/or priority (`INFO`, `WARNING`, `CRITICAL`).
    #[must_use]
    pub fn update(id: &str, explanation: Option<&str>, priority: Option<&str>) -> ApiRequest {
        let mut body = serde_json::Map::new();
        if let Some(explanation) = explanation {
            body.insert("explanation".into(), explanation.into());
        }
        if let Some(priority) = priority {
            body.insert("priority".into(), priority.into());
        }
        ApiRequest::patch(format!("/recommendations/{id}"), serde_json::Value::Object(body))
    }
}

pub mod actions {
    use super::*;

    #[must_use]
    pub fn list(params: &ListParams) -> ApiRequest {
        super::list("/actions", params)
    }

    #[must_use]
    pub fn stats(company_id: &str, days: u32) -> ApiRequest {
        ApiRequest::get("/actions/stats")
            .query("companyId", company_id)
            .query("days", days)
    }

    #[must_use]
    pub fn create(recommendation_id: &str, user_id: &str, action_taken: &str, notes: Option<&str>) -> ApiRequest {
        let mut body = serde_json::json!({
            "recommendationId": recommendation_id,
            "userId": user_id,
            "actionTaken": action_taken,
        });
        if let Some(notes) = notes {
            body["notes"] = notes.into();
        }
        ApiRequest::post("/actions", body)
    }
}

pub mod feedback {
    use super::*;

    #[must_use]
    pub fn list(params: &ListParams) -> ApiRequest {
        super::list("/feedback", params)
    }

    #[must_use]
    pub fn create(body: &FeedbackRequest) -> ApiRequest {
        ApiRequest::post("/feedback", serde_json::json!(body))
    }
}

pub mod commodities {
    use super::*;

    #[must_use]
    pub fn list() -> ApiRequest {
        ApiRequest::get("/commodities")
    }

    #[must_use]
    pub fn by_id(id: &str) -> ApiRequest {
        ApiRequest::get(format!("/commodities/{id}"))
    }
}

pub mod retail {
    use super::*;

    #[must_use]
    pub fn inventory(params: &ListParams) -> ApiRequest {
        super::list("/retail/inventory", params)
    }

    #[must_use]
    pub fn low_stock(store_id: Option<&str>) -> ApiRequest {
        ApiRequest::get("/retail/inventory/low-stock").query_opt("storeId", store_id)
    }
}

pub mod sensors {
    use super::*;

    #[must_use]
    pub fn list(params: &ListParams) -> ApiRequest {
        super::list("/sensors", params)
    }

    #[must_use]
    pub fn by_id(id: &str) -> ApiRequest {
        ApiRequest::get(format!("/sensors/{id}"))
    }

    #[must_use]
    pub fn readings(batch_id: &str) -> ApiRequest {
        ApiRequest::get(format!("/sensors/batches/{batch_id}/readings"))
    }
}

pub mod logistics {
    use super::*;

    #[must_use]
    pub fn routes(params: &ListParams) -> ApiRequest {
        super::list("/logistics/routes", params)
    }

    #[must_use]
    pub fn route_by_id(id: &str) -> ApiRequest {
        ApiRequest::get(format!("/logistics/routes/{id}"))
    }

    #[must_use]
    pub fn batch_routes(batch_id: &str) -> ApiRequest {
        ApiRequest::get(format!("/logistics/batches/{batch_id}/routes"))
    }

    #[must_use]
    pub fn active() -> ApiRequest {
        ApiRequest::get("/logistics/active")
    }
}

pub mod outcomes {
    use super::*;

    #[must_use]
    pub fn list(params: &ListParams) -> ApiRequest {
        super::list("/outcomes", params)
    }

    #[must_use]
    pub fn stats(company_id: Option<&str>, days: Option<u32>) -> ApiRequest {
        ApiRequest::get("/outcomes/stats")
            .query_opt("companyId", company_id)
            .query_opt("days", days)
    }

    #[must_use]
    pub fn by_id(id: &str) -> ApiRequest {
        ApiRequest::get(format!("/outcomes/{id}"))
    }
}

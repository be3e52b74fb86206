//! Shared wire DTOs for the backend REST boundary.
//!
//! DESIGN
//! ======
//! Only the session identity and the handful of shapes the pages compute on
//! are typed. Everything else (batches, sensors, routes, recommendations)
//! stays an opaque `serde_json::Value` owned and validated by the backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role; selects the farmer or retail view set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "FARMER", alias = "farmer")]
    Farmer,
    #[serde(rename = "RETAIL", alias = "retail")]
    Retail,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Farmer => "FARMER",
            Self::Retail => "RETAIL",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Farmer => "Farmer",
            Self::Retail => "Retail",
        }
    }
}

/// The authenticated user as returned by `/auth/login` and `/auth/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// `{user, token}` body returned by login and registration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
}

/// Body of `POST /feedback`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub rating: u8,
    pub feedback_types: Vec<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
}

/// List envelope used by every paginated backend route.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

/// Opaque backend record.
pub type Record = serde_json::Value;

/// Headline figures from `/analytics/dashboard`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSummary {
    pub total_batches: Option<u64>,
    pub average_quality: Option<f64>,
    pub total_recommendations: Option<u64>,
}

/// One point of `/quality/performance`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QualityPoint {
    pub score: Option<f64>,
}

/// A retail inventory row as far as the dashboard reads it.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InventoryRow {
    pub id: String,
    pub quantity: i64,
    pub commodity: Option<Commodity>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Commodity {
    pub name: Option<String>,
}

impl InventoryRow {
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.commodity
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .unwrap_or("Unknown")
    }
}

//! Stock status badge.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockStatus {
    Good,
    Warning,
    Critical,
}

impl StockStatus {
    /// More than 10 units is good, any stock is a warning, none is critical.
    #[must_use]
    pub fn from_quantity(quantity: i64) -> Self {
        if quantity > 10 {
            Self::Good
        } else if quantity > 0 {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Good => "status-badge status-badge--good",
            Self::Warning => "status-badge status-badge--warning",
            Self::Critical => "status-badge status-badge--critical",
        }
    }
}

#[component]
pub fn StatusBadge(status: StockStatus) -> impl IntoView {
    view! { <span class=status.css_class()>{status.label()}</span> }
}

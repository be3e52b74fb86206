//! Home dashboard: headline figures, weekly quality and stock highlights.
//!
//! DESIGN
//! ======
//! The four backend calls run concurrently and fail independently. A failed
//! call contributes its empty default, so a partial backend outage still
//! renders a page. The quality chart always has seven points: missing days
//! take the matching value from [`DEFAULT_WEEK`].

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::status_badge::{StatusBadge, StockStatus};
use crate::net::endpoints::{ListParams, analytics, quality, retail};
use crate::net::gateway::{Gateway, Navigator, or_default};
use crate::net::types::{DashboardSummary, InventoryRow, Page, QualityPoint};
use crate::util::storage::DurableStore;

pub const DEFAULT_WEEK: [(&str, f64); 7] = [
    ("Mon", 75.0),
    ("Tue", 80.0),
    ("Wed", 78.0),
    ("Thu", 92.0),
    ("Fri", 85.0),
    ("Sat", 88.0),
    ("Sun", 90.0),
];

const INVENTORY_LIMIT: u32 = 10;
const LOW_STOCK_MAX: i64 = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct QualityDay {
    pub day: &'static str,
    pub score: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StockItem {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    pub status: StockStatus,
}

impl From<&InventoryRow> for StockItem {
    fn from(row: &InventoryRow) -> Self {
        Self {
            id: row.id.clone(),
            name: row.display_name().to_owned(),
            quantity: row.quantity,
            status: StockStatus::from_quantity(row.quantity),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    pub summary: DashboardSummary,
    pub quality_week: Vec<QualityDay>,
    pub recently_added: Vec<StockItem>,
    pub out_of_stock: Vec<StockItem>,
    pub low_on_stock: Vec<StockItem>,
}

/// Seven labelled points; a missing or zero score uses the default for that day.
#[must_use]
pub fn quality_week(points: &[QualityPoint]) -> Vec<QualityDay> {
    DEFAULT_WEEK
        .iter()
        .enumerate()
        .map(|(i, (day, fallback))| {
            let score = points
                .get(i)
                .and_then(|p| p.score)
                .filter(|s| *s > 0.0)
                .unwrap_or(*fallback);
            QualityDay { day: *day, score }
        })
        .collect()
}

impl DashboardData {
    #[must_use]
    pub fn assemble(
        summary: DashboardSummary,
        quality: &[QualityPoint],
        inventory: &[InventoryRow],
        low_stock: &[InventoryRow],
    ) -> Self {
        let items: Vec<StockItem> = inventory.iter().map(StockItem::from).collect();

        let recently_added = items.iter().take(2).cloned().collect();
        let out_of_stock = items.iter().filter(|i| i.quantity == 0).take(1).cloned().collect();
        let mut low_on_stock: Vec<StockItem> = items
            .iter()
            .filter(|i| (1..=LOW_STOCK_MAX).contains(&i.quantity))
            .take(1)
            .cloned()
            .collect();
        if low_on_stock.is_empty() {
            low_on_stock = low_stock.iter().take(1).map(StockItem::from).collect();
        }

        Self { summary, quality_week: quality_week(quality), recently_added, out_of_stock, low_on_stock }
    }
}

/// Fetch everything the dashboard shows. Without a company only the default
/// quality week is returned.
pub async fn load_dashboard<S, N>(gateway: &Gateway<S, N>, company_id: Option<&str>) -> DashboardData
where
    S: DurableStore,
    N: Navigator,
{
    let Some(company_id) = company_id else {
        return DashboardData::assemble(DashboardSummary::default(), &[], &[], &[]);
    };

    let (summary, quality, inventory, low_stock) = futures::join!(
        gateway.send::<DashboardSummary>(analytics::dashboard(company_id)),
        gateway.send::<Page<QualityPoint>>(quality::performance(Some(company_id), Some(7))),
        gateway.send::<Page<InventoryRow>>(retail::inventory(&ListParams::limit(INVENTORY_LIMIT))),
        gateway.send::<Page<InventoryRow>>(retail::low_stock(None)),
    );

    DashboardData::assemble(
        or_default("dashboard", summary),
        &or_default("quality performance", quality).data,
        &or_default("inventory", inventory).data,
        &or_default("low stock", low_stock).data,
    )
}

// =============================================================================
// VIEW
// =============================================================================

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<crate::state::session::SessionHandle>();
    let gateway = expect_context::<crate::net::gateway::BrowserGateway>();

    let data = LocalResource::new(move || {
        let gateway = gateway.clone();
        let company_id = session.snapshot().company_id();
        async move { load_dashboard(&gateway, company_id.as_deref()).await }
    });

    let greeting = move || {
        session.with(|s| {
            s.user
                .as_ref()
                .map_or_else(|| "Welcome".to_owned(), |u| format!("Welcome, {}", u.name))
        })
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
            </header>
            <Suspense fallback=move || view! { <p class="dashboard-page__loading">"Loading dashboard..."</p> }>
                {move || data.get().map(|d| view! { <DashboardBody data=d/> })}
            </Suspense>
        </div>
    }
}

#[component]
fn DashboardBody(data: DashboardData) -> impl IntoView {
    let summary = data.summary;
    let figure = |v: Option<u64>| v.map_or_else(|| "-".to_owned(), |n| n.to_string());
    let quality = summary.average_quality.map_or_else(|| "-".to_owned(), |q| format!("{q:.1}"));

    let bars = data
        .quality_week
        .into_iter()
        .map(|QualityDay { day, score }| {
            let height = format!("height: {}%", score.clamp(0.0, 100.0));
            view! {
                <div class="quality-chart__bar" title=format!("{day}: {score:.0}")>
                    <span class="quality-chart__fill" style=height></span>
                    <span class="quality-chart__label">{day}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="dashboard-page__figures">
            <div class="figure-card">
                <span class="figure-card__label">"Total batches"</span>
                <span class="figure-card__value">{figure(summary.total_batches)}</span>
            </div>
            <div class="figure-card">
                <span class="figure-card__label">"Average quality"</span>
                <span class="figure-card__value">{quality}</span>
            </div>
            <div class="figure-card">
                <span class="figure-card__label">"Recommendations"</span>
                <span class="figure-card__value">{figure(summary.total_recommendations)}</span>
            </div>
        </section>
        <section class="dashboard-page__quality">
            <h2>"Quality performance"</h2>
            <div class="quality-chart">{bars}</div>
        </section>
        <StockSection title="Recently added" items=data.recently_added href="/inventory"/>
        <StockSection title="Out of stock" items=data.out_of_stock href="/inventory?filter=out-of-stock"/>
        <StockSection title="Low on stock" items=data.low_on_stock href="/inventory?filter=low-stock"/>
    }
}

#[component]
fn StockSection(title: &'static str, items: Vec<StockItem>, href: &'static str) -> impl IntoView {
    let rows = items
        .into_iter()
        .map(|item| {
            view! {
                <li class="stock-list__item">
                    <span class="stock-list__name">{item.name}</span>
                    <span class="stock-list__qty">{item.quantity}</span>
                    <StatusBadge status=item.status/>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="dashboard-page__stock">
            <header class="dashboard-page__section-header">
                <h2>{title}</h2>
                <a href=href>"See all"</a>
            </header>
            {if rows.is_empty() {
                view! { <p class="stock-list__empty">"Nothing here."</p> }.into_any()
            } else {
                view! { <ul class="stock-list">{rows}</ul> }.into_any()
            }}
        </section>
    }
}

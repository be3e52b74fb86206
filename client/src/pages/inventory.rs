//! Retail inventory with optional stock filters.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::status_badge::{StatusBadge, StockStatus};
use crate::net::endpoints::{ListParams, retail};
use crate::net::gateway::{ApiRequest, BrowserGateway, Gateway, Navigator, or_default};
use crate::net::types::{InventoryRow, Page};
use crate::util::storage::DurableStore;

/// `?filter=` values understood by the inventory page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InventoryFilter {
    #[default]
    All,
    LowStock,
    OutOfStock,
}

impl InventoryFilter {
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("low-stock") => Self::LowStock,
            Some("out-of-stock") => Self::OutOfStock,
            _ => Self::All,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::All => "Inventory",
            Self::LowStock => "Low on stock",
            Self::OutOfStock => "Out of stock",
        }
    }

    /// Low stock has its own route; the other views read the full list.
    #[must_use]
    pub fn request(self) -> ApiRequest {
        match self {
            Self::LowStock => retail::low_stock(None),
            Self::All | Self::OutOfStock => retail::inventory(&ListParams::limit(100)),
        }
    }

    #[must_use]
    pub fn apply(self, rows: Vec<InventoryRow>) -> Vec<InventoryRow> {
        match self {
            Self::OutOfStock => rows.into_iter().filter(|r| r.quantity == 0).collect(),
            Self::All | Self::LowStock => rows,
        }
    }
}

pub async fn load_inventory<S, N>(gateway: &Gateway<S, N>, filter: InventoryFilter) -> Vec<InventoryRow>
where
    S: DurableStore,
    N: Navigator,
{
    let page = or_default("inventory", gateway.send::<Page<InventoryRow>>(filter.request()).await);
    filter.apply(page.data)
}

#[component]
pub fn InventoryPage() -> impl IntoView {
    let gateway = expect_context::<BrowserGateway>();
    let query = use_query_map();
    let filter = Memo::new(move |_| query.with(|q| InventoryFilter::from_query(q.get("filter").as_deref())));

    let rows = LocalResource::new(move || {
        let gateway = gateway.clone();
        let filter = filter.get();
        async move { load_inventory(&gateway, filter).await }
    });

    view! {
        <div class="list-page">
            <h1>{move || filter.get().title()}</h1>
            <nav class="list-page__filters">
                <a href="/inventory">"All"</a>
                <a href="/inventory?filter=low-stock">"Low stock"</a>
                <a href="/inventory?filter=out-of-stock">"Out of stock"</a>
            </nav>
            <Suspense fallback=move || view! { <p class="list-page__loading">"Loading inventory..."</p> }>
                {move || rows.get().map(|rows| view! { <InventoryTable rows=rows/> })}
            </Suspense>
        </div>
    }
}

#[component]
fn InventoryTable(rows: Vec<InventoryRow>) -> impl IntoView {
    if rows.is_empty() {
        return view! { <p class="record-list__empty">"No inventory items."</p> }.into_any();
    }
    let body = rows
        .into_iter()
        .map(|row| {
            let status = StockStatus::from_quantity(row.quantity);
            view! {
                <tr>
                    <td>{row.display_name().to_owned()}</td>
                    <td>{row.quantity}</td>
                    <td><StatusBadge status=status/></td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <table class="record-list">
            <thead>
                <tr>
                    <th>"Item"</th>
                    <th>"Quantity"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
    .into_any()
}

use super::*;
use crate::net::gateway::Gateway;
use crate::net::types::Commodity;
use crate::util::storage::MemoryStore;

struct NoNavigation;

impl Navigator for NoNavigation {
    fn hard_redirect(&self, _path: &str) {}
}

fn row(id: &str, name: Option<&str>, quantity: i64) -> InventoryRow {
    InventoryRow {
        id: id.to_owned(),
        quantity,
        commodity: Some(Commodity { name: name.map(str::to_owned) }),
    }
}

fn scores(values: &[Option<f64>]) -> Vec<QualityPoint> {
    values.iter().map(|score| QualityPoint { score: *score }).collect()
}

#[test]
fn empty_quality_uses_default_week() {
    let week = quality_week(&[]);
    let days: Vec<&str> = week.iter().map(|d| d.day).collect();
    assert_eq!(days, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    assert_eq!(week[3].score, 92.0);
}

#[test]
fn partial_quality_fills_gaps_per_day() {
    let week = quality_week(&scores(&[Some(61.5), None, Some(0.0)]));
    assert_eq!(week[0].score, 61.5);
    assert_eq!(week[1].score, 80.0);
    assert_eq!(week[2].score, 78.0);
    assert_eq!(week[6].score, 90.0);
}

#[test]
fn stock_item_classifies_quantity() {
    assert_eq!(StockItem::from(&row("a", Some("Kale"), 11)).status, StockStatus::Good);
    assert_eq!(StockItem::from(&row("b", Some("Kale"), 10)).status, StockStatus::Warning);
    assert_eq!(StockItem::from(&row("c", Some("Kale"), 1)).status, StockStatus::Warning);
    assert_eq!(StockItem::from(&row("d", Some("Kale"), 0)).status, StockStatus::Critical);
    assert_eq!(StockItem::from(&row("e", None, 3)).name, "Unknown");
}

#[test]
fn assemble_picks_highlights_from_inventory() {
    let inventory = vec![
        row("1", Some("Pomegranate"), 20),
        row("2", Some("Rib Eye"), 40),
        row("3", Some("Spinach"), 0),
        row("4", Some("Zucchini"), 4),
        row("5", Some("Okra"), 0),
    ];
    let data = DashboardData::assemble(DashboardSummary::default(), &[], &inventory, &[row("9", Some("Leek"), 2)]);

    let ids = |items: &[StockItem]| items.iter().map(|i| i.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&data.recently_added), ["1", "2"]);
    assert_eq!(ids(&data.out_of_stock), ["3"]);
    assert_eq!(ids(&data.low_on_stock), ["4"]);
    assert_eq!(data.quality_week.len(), 7);
}

#[test]
fn low_stock_endpoint_backs_up_inventory() {
    let inventory = vec![row("1", Some("Pomegranate"), 20)];
    let data = DashboardData::assemble(DashboardSummary::default(), &[], &inventory, &[row("9", Some("Leek"), 2)]);
    assert_eq!(data.low_on_stock.len(), 1);
    assert_eq!(data.low_on_stock[0].name, "Leek");
    assert!(data.out_of_stock.is_empty());
}

#[test]
fn failed_fetches_degrade_to_empty_page() {
    let gateway = Gateway::new("/api/proxy", MemoryStore::new(), NoNavigation);
    let data = futures::executor::block_on(load_dashboard(&gateway, Some("c1")));
    assert_eq!(data.summary, DashboardSummary::default());
    assert!(data.recently_added.is_empty());
    assert!(data.low_on_stock.is_empty());
    assert_eq!(data.quality_week, quality_week(&[]));
}

#[test]
fn missing_company_skips_fetching() {
    let gateway = Gateway::new("/api/proxy", MemoryStore::new(), NoNavigation);
    let data = futures::executor::block_on(load_dashboard(&gateway, None));
    assert_eq!(data.quality_week.len(), 7);
    assert!(data.out_of_stock.is_empty());
}

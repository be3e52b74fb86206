use super::*;

#[test]
fn quantity_thresholds() {
    assert_eq!(StockStatus::from_quantity(40), StockStatus::Good);
    assert_eq!(StockStatus::from_quantity(11), StockStatus::Good);
    assert_eq!(StockStatus::from_quantity(10), StockStatus::Warning);
    assert_eq!(StockStatus::from_quantity(1), StockStatus::Warning);
    assert_eq!(StockStatus::from_quantity(0), StockStatus::Critical);
    assert_eq!(StockStatus::from_quantity(-3), StockStatus::Critical);
}

#[test]
fn css_class_carries_modifier() {
    assert!(StockStatus::Warning.css_class().ends_with("--warning"));
    assert_eq!(StockStatus::Critical.label(), "Critical");
}

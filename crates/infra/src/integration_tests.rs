//! Cross-crate flows: fetch records, run the analytics, export the rows.

use stocklens_analytics::{
    DEFAULT_THRESHOLD, DEFAULT_WINDOW, compare_strategies_seeded, find_by_name, forecast_sales,
    quick_sort, replenishment_plan, sort_by_name,
};
use stocklens_core::{SaleId, SalesRecord, StockItem, StockItemId};

use crate::sink::{RecordingSink, ResultSink};
use crate::source::{InMemoryRecordSource, RecordSource};

fn item(name: &str, quantity: u32) -> StockItem {
    StockItem {
        id: StockItemId::new(),
        name: name.to_string(),
        quantity,
    }
}

fn seeded_source() -> InMemoryRecordSource {
    stocklens_observability::init();

    let source = InMemoryRecordSource::new();
    source
        .seed_items([
            item("Mouse", 25),
            item("Keyboard", 5),
            item("Webcam", 12),
            item("Headset", 9),
        ])
        .unwrap();
    source
}

#[test]
fn fetch_sort_and_export_inventory() {
    let source = seeded_source();
    let sink = RecordingSink::new();

    let items = source.fetch_stock_items().unwrap();
    let (sorted, metrics) = quick_sort(&items);
    sink.accept(&sorted).unwrap();

    let quantities: Vec<u64> = sink
        .rows()
        .iter()
        .map(|row| row["quantity"].as_u64().unwrap())
        .collect();
    assert_eq!(quantities, vec![5, 9, 12, 25]);
    assert!(metrics.comparisons > 0);
}

#[test]
fn fetch_plan_and_export_replenishment() {
    let source = seeded_source();
    let sink = RecordingSink::new();

    let items = source.fetch_stock_items().unwrap();
    let plan = replenishment_plan(&items, DEFAULT_THRESHOLD);
    sink.accept(&plan).unwrap();

    let rows = sink.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "Keyboard");
    assert_eq!(rows[0]["quantity_to_order"], 5);
    assert_eq!(rows[1]["name"], "Headset");
    assert_eq!(rows[1]["quantity_to_order"], 1);
}

#[test]
fn fetch_sort_by_name_and_search() {
    let source = seeded_source();

    let mut items = source.fetch_stock_items().unwrap();
    sort_by_name(&mut items);

    let found = find_by_name(&items, "mouse").expect("Mouse is in stock");
    assert_eq!(found.name, "Mouse");
    assert_eq!(found.quantity, 25);

    assert!(find_by_name(&items, "Nonexistent").is_none());
}

#[test]
fn fetch_history_and_forecast() {
    let source = seeded_source();
    let tracked = StockItemId::new();

    source
        .seed_sales([4, 6, 5, 10, 8].map(|quantity_sold| SalesRecord {
            sale_id: SaleId::new(),
            item_id: tracked,
            quantity_sold,
        }))
        .unwrap();

    let history = source.fetch_sales_history(tracked).unwrap();
    let forecast = forecast_sales(&history, DEFAULT_WINDOW).expect("history is non-empty");
    assert!((forecast - 23.0 / 3.0).abs() < f64::EPSILON);

    let empty = source.fetch_sales_history(StockItemId::new()).unwrap();
    assert_eq!(forecast_sales(&empty, DEFAULT_WINDOW), None);
}

#[test]
fn compare_strategies_and_export_the_table() {
    let source = seeded_source();
    let sink = RecordingSink::new();

    let items = source.fetch_stock_items().unwrap();
    let rows = compare_strategies_seeded(&items, 7);
    sink.accept(&rows).unwrap();

    let exported = sink.rows();
    assert_eq!(exported.len(), 3);
    assert_eq!(exported[0]["algorithm"], "quicksort");
    assert_eq!(exported[1]["algorithm"], "mergesort");
    assert_eq!(exported[2]["algorithm"], "bubblesort");
    for row in &exported {
        assert!(row["elapsed_seconds"].as_f64().unwrap() >= 0.0);
    }
}

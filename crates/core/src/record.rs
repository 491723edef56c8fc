//! Inventory and sales records, plus the derived row types handed to sinks.

use serde::{Deserialize, Serialize};

use crate::id::{SaleId, StockItemId};

/// One stock record.
///
/// Quantity is non-negative by construction. Records that cannot satisfy the
/// domain invariants (non-empty name, integral quantity) are dropped by the
/// record source before they reach the analytics core; the core performs no
/// re-validation. Items are consumed read-only everywhere: sorting returns
/// reordered sequences without touching individual records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: StockItemId,
    pub name: String,
    pub quantity: u32,
}

/// One historical sale event for an item.
///
/// A fetched history is ordered by retrieval order, which the forecaster
/// treats as chronological; no timestamp is carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub sale_id: SaleId,
    pub item_id: StockItemId,
    pub quantity_sold: u32,
}

/// Derived reorder row: how far below the threshold an item sits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplenishmentEntry {
    pub name: String,
    pub current_quantity: u32,
    pub quantity_to_order: u32,
}

/// One result row of the sort-strategy comparison.
///
/// Flat on purpose so a result sink can export rows without unpacking a
/// nested snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub algorithm: String,
    pub elapsed_seconds: f64,
    pub comparisons: u64,
    pub exchanges: u64,
    pub recursive_calls: u64,
}

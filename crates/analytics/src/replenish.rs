//! Greedy replenishment planning.
//!
//! "Greedy" here means a single-pass linear filter with a fixed per-item
//! top-up formula. There is no budget or cross-item constraint to optimize
//! against, so nothing more elaborate is warranted.

use stocklens_core::{ReplenishmentEntry, StockItem};

/// Reorder threshold applied when the caller does not supply one.
pub const DEFAULT_THRESHOLD: u32 = 10;

/// Build the reorder list: one entry per item strictly below `threshold`,
/// in input order, topping each item back up to the threshold.
///
/// Pure and O(n); an empty result simply means nothing qualifies.
pub fn replenishment_plan(items: &[StockItem], threshold: u32) -> Vec<ReplenishmentEntry> {
    items
        .iter()
        .filter(|item| item.quantity < threshold)
        .map(|item| ReplenishmentEntry {
            name: item.name.clone(),
            current_quantity: item.quantity,
            quantity_to_order: threshold - item.quantity,
        })
        .collect()
}

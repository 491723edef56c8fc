//! Trailing moving-average demand forecast.

use stocklens_core::SalesRecord;

/// Number of trailing entries used when the caller does not supply a window.
pub const DEFAULT_WINDOW: usize = 3;

/// Mean of the last `min(window, len)` quantities, in the order given.
///
/// Returns `None` for an empty history or a zero window — an expected
/// "no data" outcome, not an error. The window counts entries, not time:
/// sparse or irregularly spaced histories still average the last N retrieved
/// records, a known and intentional limitation.
pub fn moving_average(quantities: &[u32], window: usize) -> Option<f64> {
    if quantities.is_empty() || window == 0 {
        return None;
    }

    let tail = &quantities[quantities.len().saturating_sub(window)..];
    let sum: u64 = tail.iter().map(|&q| u64::from(q)).sum();
    Some(sum as f64 / tail.len() as f64)
}

/// Forecast over one item's sales history.
///
/// The history's sequence order is treated as chronological; only
/// `quantity_sold` feeds the average.
pub fn forecast_sales(history: &[SalesRecord], window: usize) -> Option<f64> {
    let quantities: Vec<u32> = history.iter().map(|r| r.quantity_sold).collect();
    moving_average(&quantities, window)
}

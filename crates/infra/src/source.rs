//! Record retrieval contract.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

use stocklens_core::{SalesRecord, StockItem, StockItemId};

/// Failure modes of a backing record store.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The store could not be reached.
    #[error("record source unavailable: {0}")]
    Unavailable(String),

    /// The store returned rows that could not be cleaned into valid records.
    #[error("malformed records: {0}")]
    Malformed(String),
}

/// Supplier of validated inventory data.
///
/// Implementations own validation and cleaning: every `StockItem` handed
/// out already satisfies the domain invariants (non-empty name, integral
/// non-negative quantity), and rows that cannot be cleaned are dropped
/// before they cross this boundary. The analytics core performs no
/// re-validation. Retry policy, if any, also lives here.
pub trait RecordSource {
    fn fetch_stock_items(&self) -> Result<Vec<StockItem>, SourceError>;

    /// Sales history for one item, in chronological (retrieval) order.
    fn fetch_sales_history(&self, item_id: StockItemId) -> Result<Vec<SalesRecord>, SourceError>;

    /// Connectivity check with bounded retries.
    ///
    /// Returns `true` as soon as one fetch succeeds. Each failed attempt is
    /// logged; up to `retries` additional attempts follow the first.
    fn probe(&self, retries: u32) -> bool {
        for attempt in 0..=retries {
            match self.fetch_stock_items() {
                Ok(_) => {
                    tracing::info!(attempt, "record source reachable");
                    return true;
                }
                Err(err) => {
                    tracing::warn!(attempt, error = %err, "record source probe failed");
                }
            }
        }
        false
    }
}

/// In-memory record source seeded with already-valid records.
///
/// Intended for tests/dev in place of a real backing store. Not optimized
/// for performance.
#[derive(Debug, Default)]
pub struct InMemoryRecordSource {
    items: RwLock<Vec<StockItem>>,
    sales: RwLock<HashMap<StockItemId, Vec<SalesRecord>>>,
}

impl InMemoryRecordSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_items(
        &self,
        items: impl IntoIterator<Item = StockItem>,
    ) -> Result<(), SourceError> {
        let mut guard = self
            .items
            .write()
            .map_err(|_| SourceError::Unavailable("lock poisoned".to_string()))?;
        guard.extend(items);
        Ok(())
    }

    /// Append sale events; per-item histories keep insertion order.
    pub fn seed_sales(
        &self,
        records: impl IntoIterator<Item = SalesRecord>,
    ) -> Result<(), SourceError> {
        let mut guard = self
            .sales
            .write()
            .map_err(|_| SourceError::Unavailable("lock poisoned".to_string()))?;
        for record in records {
            guard.entry(record.item_id).or_default().push(record);
        }
        Ok(())
    }
}

impl RecordSource for InMemoryRecordSource {
    fn fetch_stock_items(&self) -> Result<Vec<StockItem>, SourceError> {
        let guard = self
            .items
            .read()
            .map_err(|_| SourceError::Unavailable("lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn fetch_sales_history(&self, item_id: StockItemId) -> Result<Vec<SalesRecord>, SourceError> {
        let guard = self
            .sales
            .read()
            .map_err(|_| SourceError::Unavailable("lock poisoned".to_string()))?;
        Ok(guard.get(&item_id).cloned().unwrap_or_default())
    }
}

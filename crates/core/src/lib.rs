//! `stocklens-core` — domain foundation for the inventory analytics engine.
//!
//! This crate contains **pure data model** only: strongly-typed identifiers,
//! the stock/sales record types every analysis consumes, the derived row
//! types handed to result sinks, and the domain error model. No algorithms
//! and no IO live here.

pub mod error;
pub mod id;
pub mod metrics;
pub mod record;

pub use error::DomainError;
pub use id::{SaleId, StockItemId};
pub use metrics::MetricsSnapshot;
pub use record::{ComparisonRow, ReplenishmentEntry, SalesRecord, StockItem};

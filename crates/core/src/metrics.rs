//! Instrumentation snapshot emitted by each algorithm run.

use serde::{Deserialize, Serialize};

/// Counter totals for exactly one algorithm invocation.
///
/// A snapshot is ephemeral: it is produced at the end of a single run and
/// never shared across runs, so counts cannot leak between invocations.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Quantity-to-quantity comparisons performed.
    pub comparisons: u64,
    /// Physical element moves/swaps performed.
    pub exchanges: u64,
    /// Recursive descents taken (zero for non-recursive algorithms).
    pub recursive_calls: u64,
}

impl MetricsSnapshot {
    /// True when the run did no counted work (empty or singleton input).
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

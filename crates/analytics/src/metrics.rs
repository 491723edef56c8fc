//! Per-run instrumentation counters.

use stocklens_core::MetricsSnapshot;

/// Accumulates comparison, exchange and recursive-call counts for exactly
/// one algorithm run.
///
/// A recorder is scoped to a single invocation: every public sort entry
/// point builds a fresh recorder (or resets one it exclusively owns) and
/// hands the totals back as an immutable [`MetricsSnapshot`], so concurrent
/// or consecutive runs can never contaminate each other's counts.
#[derive(Debug, Default)]
pub struct MetricsRecorder {
    comparisons: u64,
    exchanges: u64,
    recursive_calls: u64,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero all three counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// One comparison between two quantities.
    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// One physical swap/move of elements.
    pub fn record_exchange(&mut self) {
        self.exchanges += 1;
    }

    /// One recursive descent.
    pub fn record_recursive_call(&mut self) {
        self.recursive_calls += 1;
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            comparisons: self.comparisons,
            exchanges: self.exchanges,
            recursive_calls: self.recursive_calls,
        }
    }
}

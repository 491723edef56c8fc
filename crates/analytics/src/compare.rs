//! Side-by-side timing and instrumentation of the sort strategies.

use std::time::Instant;

use stocklens_core::{ComparisonRow, StockItem};

use crate::sort::{BubbleSort, MergeSort, QuickSort, SortStrategy};

/// Run quicksort, mergesort and bubble sort over the same input, timing
/// each run and capturing its metrics snapshot.
///
/// Each strategy sorts its own copy of the input, so no run observes
/// another's work; the fixed execution order is cosmetic, not a data
/// dependency. One row is produced per strategy, in execution order.
pub fn compare_strategies(items: &[StockItem]) -> Vec<ComparisonRow> {
    run_all(
        vec![
            Box::new(QuickSort::new()),
            Box::new(MergeSort::new()),
            Box::new(BubbleSort::new()),
        ],
        items,
    )
}

/// Same comparison with a pinned quicksort pivot sequence, for reproducible
/// runs.
pub fn compare_strategies_seeded(items: &[StockItem], seed: u64) -> Vec<ComparisonRow> {
    run_all(
        vec![
            Box::new(QuickSort::seeded(seed)),
            Box::new(MergeSort::new()),
            Box::new(BubbleSort::new()),
        ],
        items,
    )
}

fn run_all(strategies: Vec<Box<dyn SortStrategy>>, items: &[StockItem]) -> Vec<ComparisonRow> {
    strategies
        .into_iter()
        .map(|mut strategy| {
            let started = Instant::now();
            let (_, metrics) = strategy.sort(items);
            let elapsed_seconds = started.elapsed().as_secs_f64();

            tracing::info!(
                algorithm = strategy.name(),
                elapsed_seconds,
                comparisons = metrics.comparisons,
                "comparison run complete"
            );

            ComparisonRow {
                algorithm: strategy.name().to_string(),
                elapsed_seconds,
                comparisons: metrics.comparisons,
                exchanges: metrics.exchanges,
                recursive_calls: metrics.recursive_calls,
            }
        })
        .collect()
}

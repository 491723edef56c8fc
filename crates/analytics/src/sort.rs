//! The three instrumented sort strategies.
//!
//! All strategies order stock items by ascending quantity and report the
//! real work they did through a [`MetricsSnapshot`]. None of them raise
//! domain errors: empty or singleton input comes back unchanged with
//! all-zero metrics.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use stocklens_core::{MetricsSnapshot, StockItem};

use crate::metrics::MetricsRecorder;

/// A quantity-ordering sort over stock items.
///
/// Implementations return a freshly ordered sequence together with the
/// instrumentation snapshot for that single run. The input slice is never
/// mutated, and no references into it are retained after the call returns.
pub trait SortStrategy {
    /// Strategy name used in comparison rows and trace events.
    fn name(&self) -> &'static str;

    fn sort(&mut self, items: &[StockItem]) -> (Vec<StockItem>, MetricsSnapshot);
}

fn trace_run(algorithm: &str, metrics: &MetricsSnapshot) {
    tracing::debug!(
        algorithm,
        comparisons = metrics.comparisons,
        exchanges = metrics.exchanges,
        recursive_calls = metrics.recursive_calls,
        "sort run finished"
    );
}

/// Randomized-pivot quicksort with three-way partitioning.
///
/// The pivot index is drawn uniformly from the injected random source,
/// which keeps pre-sorted or adversarial input away from the quadratic
/// worst case and lets tests pin the pivot sequence with a seeded rng.
/// Elements equal to the pivot are grouped in one pass (one comparison per
/// element examined), then `sort(less) + equal + sort(greater)` is
/// concatenated. Not stable: equal-quantity items may be reordered.
#[derive(Debug)]
pub struct QuickSort<R: Rng> {
    rng: R,
}

impl QuickSort<StdRng> {
    /// Strategy with a pivot source seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Strategy with a fixed pivot sequence, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for QuickSort<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QuickSort<R> {
    /// Strategy over an arbitrary random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn sort_recursive(
        &mut self,
        items: Vec<StockItem>,
        recorder: &mut MetricsRecorder,
    ) -> Vec<StockItem> {
        let n = items.len();
        if n <= 1 {
            return items;
        }
        recorder.record_recursive_call();

        let pivot = items[self.rng.random_range(0..n)].quantity;
        let mut less = Vec::new();
        let mut equal = Vec::new();
        let mut greater = Vec::new();
        for item in items {
            recorder.record_comparison();
            if item.quantity < pivot {
                less.push(item);
            } else if item.quantity == pivot {
                equal.push(item);
            } else {
                greater.push(item);
            }
        }

        let mut sorted = self.sort_recursive(less, recorder);
        sorted.extend(equal);
        sorted.extend(self.sort_recursive(greater, recorder));
        sorted
    }
}

impl<R: Rng> SortStrategy for QuickSort<R> {
    fn name(&self) -> &'static str {
        "quicksort"
    }

    fn sort(&mut self, items: &[StockItem]) -> (Vec<StockItem>, MetricsSnapshot) {
        let mut recorder = MetricsRecorder::new();
        let sorted = self.sort_recursive(items.to_vec(), &mut recorder);
        let metrics = recorder.snapshot();
        trace_run(self.name(), &metrics);
        (sorted, metrics)
    }
}

/// Top-down mergesort.
///
/// Splits at the midpoint, recurses, then merges by repeated front-element
/// comparison. One comparison is counted per merge step; an exchange is
/// counted whenever a right-half element is taken ahead of a remaining
/// left-half element, capturing the inversions resolved at merge time.
/// Stable: the left element wins ties, so equal-quantity items keep their
/// input order.
#[derive(Debug, Default)]
pub struct MergeSort;

impl MergeSort {
    pub fn new() -> Self {
        Self
    }

    fn sort_recursive(items: Vec<StockItem>, recorder: &mut MetricsRecorder) -> Vec<StockItem> {
        if items.len() <= 1 {
            return items;
        }
        recorder.record_recursive_call();

        let mut left = items;
        let right = left.split_off(left.len() / 2);
        let left = Self::sort_recursive(left, recorder);
        let right = Self::sort_recursive(right, recorder);
        Self::merge(left, right, recorder)
    }

    fn merge(
        left: Vec<StockItem>,
        right: Vec<StockItem>,
        recorder: &mut MetricsRecorder,
    ) -> Vec<StockItem> {
        let mut merged = Vec::with_capacity(left.len() + right.len());
        let mut left = left.into_iter();
        let mut right = right.into_iter();
        let mut next_left = left.next();
        let mut next_right = right.next();

        loop {
            match (next_left.take(), next_right.take()) {
                (Some(l), Some(r)) => {
                    recorder.record_comparison();
                    if l.quantity <= r.quantity {
                        merged.push(l);
                        next_left = left.next();
                        next_right = Some(r);
                    } else {
                        recorder.record_exchange();
                        merged.push(r);
                        next_right = right.next();
                        next_left = Some(l);
                    }
                }
                (Some(l), None) => {
                    merged.push(l);
                    next_left = left.next();
                }
                (None, Some(r)) => {
                    merged.push(r);
                    next_right = right.next();
                }
                (None, None) => break,
            }
        }
        merged
    }
}

impl SortStrategy for MergeSort {
    fn name(&self) -> &'static str {
        "mergesort"
    }

    fn sort(&mut self, items: &[StockItem]) -> (Vec<StockItem>, MetricsSnapshot) {
        let mut recorder = MetricsRecorder::new();
        let sorted = Self::sort_recursive(items.to_vec(), &mut recorder);
        let metrics = recorder.snapshot();
        trace_run(self.name(), &metrics);
        (sorted, metrics)
    }
}

/// Adjacent-exchange (bubble) sort with early exit.
///
/// Pass-based neighbor compare-and-swap: one comparison per neighbor check,
/// one exchange per swap. A pass with zero swaps ends the scan, so
/// already-sorted input costs exactly one pass (n − 1 comparisons, no
/// exchanges). The exchange count equals the number of quantity-order
/// inversions in the input. The recursion counter stays zero.
#[derive(Debug, Default)]
pub struct BubbleSort;

impl BubbleSort {
    pub fn new() -> Self {
        Self
    }
}

impl SortStrategy for BubbleSort {
    fn name(&self) -> &'static str {
        "bubblesort"
    }

    fn sort(&mut self, items: &[StockItem]) -> (Vec<StockItem>, MetricsSnapshot) {
        let mut recorder = MetricsRecorder::new();
        let mut sorted = items.to_vec();
        let n = sorted.len();

        for pass in 0..n {
            let mut swapped = false;
            for j in 0..n - pass - 1 {
                recorder.record_comparison();
                if sorted[j].quantity > sorted[j + 1].quantity {
                    sorted.swap(j, j + 1);
                    recorder.record_exchange();
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }

        let metrics = recorder.snapshot();
        trace_run(self.name(), &metrics);
        (sorted, metrics)
    }
}

/// One-shot quicksort with an entropy-seeded pivot source.
pub fn quick_sort(items: &[StockItem]) -> (Vec<StockItem>, MetricsSnapshot) {
    QuickSort::new().sort(items)
}

/// One-shot mergesort.
pub fn merge_sort(items: &[StockItem]) -> (Vec<StockItem>, MetricsSnapshot) {
    MergeSort::new().sort(items)
}

/// One-shot bubble sort.
pub fn bubble_sort(items: &[StockItem]) -> (Vec<StockItem>, MetricsSnapshot) {
    BubbleSort::new().sort(items)
}

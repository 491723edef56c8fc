//! Inventory analytics algorithms.
//!
//! Everything in this crate is deterministic, synchronous domain logic with
//! no IO beyond `tracing` events: the instrumented sort strategies, binary
//! search over name-sorted inventory, the greedy replenishment planner, the
//! trailing moving-average forecaster, and the comparator that races the
//! sort strategies against each other on independent copies of one input.
//!
//! Data flows one way through these modules — records in, derived rows out.
//! No module depends on another's internal state; the comparator composes
//! the sort strategies and nothing else.

pub mod compare;
pub mod forecast;
pub mod metrics;
pub mod replenish;
pub mod search;
pub mod sort;

pub use compare::{compare_strategies, compare_strategies_seeded};
pub use forecast::{DEFAULT_WINDOW, forecast_sales, moving_average};
pub use metrics::MetricsRecorder;
pub use replenish::{DEFAULT_THRESHOLD, replenishment_plan};
pub use search::{find_by_name, sort_by_name};
pub use sort::{
    BubbleSort, MergeSort, QuickSort, SortStrategy, bubble_sort, merge_sort, quick_sort,
};

//! Shared tracing/logging setup.
//!
//! The core crates only ever emit `tracing` events; where those events end
//! up (format, destination, filtering) is decided here, once, per process.

pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call more than once; later calls become no-ops.
pub fn init() {
    tracing::init();
}

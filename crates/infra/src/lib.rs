//! Collaborator contracts and in-memory implementations.
//!
//! The analytics core consumes already-validated records and hands back
//! plain structured rows. Everything around that — fetching, cleaning,
//! retrying, exporting, displaying — lives behind the traits in this crate,
//! never inside the core.

pub mod sink;
pub mod source;

pub use sink::{RecordingSink, ResultSink, SinkError};
pub use source::{InMemoryRecordSource, RecordSource, SourceError};

#[cfg(test)]
mod integration_tests;

//! Result export contract.

use std::sync::RwLock;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Failure modes of a result sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// A row could not be encoded for the sink's format.
    #[error("failed to encode row: {0}")]
    Encode(#[from] serde_json::Error),

    /// The sink's destination could not be written.
    #[error("sink unavailable: {0}")]
    Unavailable(String),
}

/// Consumer of homogeneous result rows.
///
/// The core hands over plain structured rows (stock items, reorder entries,
/// comparison rows); all format-specific logic — CSV layout, display
/// columns, file handling — stays on this side of the boundary.
pub trait ResultSink {
    fn accept<T: Serialize>(&self, rows: &[T]) -> Result<(), SinkError>;
}

/// Sink that buffers rows as JSON values.
///
/// Intended for tests: assertions can inspect exactly what the core
/// exported without involving any real destination.
#[derive(Debug, Default)]
pub struct RecordingSink {
    rows: RwLock<Vec<Value>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything accepted so far, in acceptance order.
    pub fn rows(&self) -> Vec<Value> {
        self.rows
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl ResultSink for RecordingSink {
    fn accept<T: Serialize>(&self, rows: &[T]) -> Result<(), SinkError> {
        let mut encoded = Vec::with_capacity(rows.len());
        for row in rows {
            encoded.push(serde_json::to_value(row)?);
        }

        let mut guard = self
            .rows
            .write()
            .map_err(|_| SinkError::Unavailable("lock poisoned".to_string()))?;
        guard.extend(encoded);
        Ok(())
    }
}

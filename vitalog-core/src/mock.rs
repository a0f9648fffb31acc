//! Mock log store for testing.

use std::sync::Mutex;

use crate::client::LogStore;
use crate::entry::{LogEntry, NewLogEntry};
use crate::error::ClientError;

/// Timestamp stamped onto entries created through the mock.
const MOCK_TIMESTAMP: &str = "1970-01-01T00:00:00Z";

/// An in-memory [`LogStore`] for testing.
///
/// This allows testing code that depends on [`LogStore`] without a running
/// backend.
///
/// # Example
///
/// ```
/// use vitalog_core::{LogStore, MeasurementKind, MockLogStore, NewLogEntry};
///
/// # async fn demo() -> Result<(), vitalog_core::ClientError> {
/// let mock = MockLogStore::new();
/// mock.create_log(NewLogEntry::single(MeasurementKind::BodyTemperature, 36.6)).await?;
/// assert_eq!(mock.fetch_logs().await?.len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct MockLogStore {
    entries: Mutex<Vec<LogEntry>>,
}

impl MockLogStore {
    /// Create an empty mock store.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock store pre-seeded with entries.
    pub fn with_entries(entries: Vec<LogEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }
}

impl Default for MockLogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LogStore for MockLogStore {
    async fn fetch_logs(&self) -> Result<Vec<LogEntry>, ClientError> {
        Ok(self.entries.lock().unwrap().clone())
    }

    async fn create_log(&self, entry: NewLogEntry) -> Result<(), ClientError> {
        let mut entries = self.entries.lock().unwrap();
        let id = format!("mock-{}", entries.len() + 1);
        entries.push(LogEntry {
            id,
            timestamp: MOCK_TIMESTAMP.to_string(),
            kind: entry.kind,
            value_1: Some(entry.value_1),
            unit_1: Some(entry.unit_1),
            value_2: entry.value_2,
            unit_2: entry.unit_2,
            notes: None,
        });
        Ok(())
    }
}

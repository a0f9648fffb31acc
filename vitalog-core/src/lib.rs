//! Core library for VitaLog, a personal health-logging client.
//!
//! This crate provides the pieces of the app that are independent of any GUI
//! toolkit:
//!
//! - the angle-value mapping behind the circular dial input,
//! - the logbook entry model shared with the remote backend,
//! - an async HTTP client for the `api/logs` endpoint.
//!
//! # Example
//!
//! ```no_run
//! use vitalog_core::{ClientConfig, LogClient, LogStore, MeasurementKind, NewLogEntry};
//!
//! async fn log_temperature() -> Result<(), vitalog_core::ClientError> {
//!     // Build the client from the environment (or pass an explicit config).
//!     let client = LogClient::new(ClientConfig::from_env())?;
//!
//!     // Post a reading.
//!     let entry = NewLogEntry::single(MeasurementKind::BodyTemperature, 36.6);
//!     client.create_log(entry).await?;
//!
//!     // List everything the backend has.
//!     let entries = client.fetch_logs().await?;
//!     println!("{} entries", entries.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! Use [`MockLogStore`] to test code that consumes a [`LogStore`] without a
//! running backend:
//!
//! ```
//! use vitalog_core::{LogStore, MockLogStore};
//!
//! # async fn demo() -> Result<(), vitalog_core::ClientError> {
//! let mock = MockLogStore::new();
//! assert!(mock.fetch_logs().await?.is_empty());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod dial;
mod entry;
mod error;
mod mock;

// Re-export public API
pub use client::{BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL, LogClient, LogStore};
pub use dial::{Range, pointer_to_value, round1, value_to_angle};
pub use entry::{LogEntry, LogsResponse, MeasurementKind, NewLogEntry};
pub use error::{ClientError, DialError};
pub use mock::MockLogStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_store_create_then_fetch() {
        let mock = MockLogStore::new();
        assert!(mock.fetch_logs().await.unwrap().is_empty());

        let entry = NewLogEntry::single(MeasurementKind::BodyTemperature, 38.5);
        mock.create_log(entry).await.unwrap();

        let entries = mock.fetch_logs().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, "body_temperature");
        assert_eq!(entries[0].value_1, Some(f64::from(38.5f32)));
        assert_eq!(entries[0].unit_1.as_deref(), Some("°C"));
        assert!(entries[0].value_2.is_none());
    }

    #[tokio::test]
    async fn test_mock_store_seeded_entries() {
        let seeded = LogEntry {
            id: "1".to_string(),
            timestamp: "2026-08-01T09:15:00Z".to_string(),
            kind: "blood_sugar".to_string(),
            value_1: Some(92.0),
            unit_1: Some("mg/dL".to_string()),
            value_2: None,
            unit_2: None,
            notes: Some("fasting".to_string()),
        };

        let mock = MockLogStore::with_entries(vec![seeded]);
        let entries = mock.fetch_logs().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].notes.as_deref(), Some("fasting"));
    }

    #[test]
    fn test_dial_mapping_matches_temperature_screen() {
        let (range, initial) = MeasurementKind::BodyTemperature.dial_entry().unwrap();

        // The seeded value is reported unchanged.
        assert_eq!(round1(range.clamp(initial)), initial);

        // A drag to the bottom of the dial reads the middle of the range.
        let value = pointer_to_value(120.0, 240.0, 120.0, range);
        assert_eq!(value, 38.5);
    }
}

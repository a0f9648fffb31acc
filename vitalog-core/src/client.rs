//! HTTP client for the remote logbook endpoint.
//!
//! The backend is an external collaborator reached over plain HTTP/JSON:
//! `GET {base}/api/logs` lists entries, `POST {base}/api/logs` creates one.
//! Screens issue at most one request per lifecycle event, so there is no
//! retry, cancellation, or deduplication here.

use std::future::Future;
use std::time::Duration;

use log::{debug, info};

use crate::entry::{LogEntry, LogsResponse, NewLogEntry};
use crate::error::ClientError;

/// Default base URL of the logbook backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "VITALOG_API_URL";

/// Default HTTP timeout for logbook requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for [`LogClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,

    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Build a config from the environment, falling back to defaults.
    ///
    /// Honors [`BASE_URL_ENV`] for the base URL.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// A store of logbook entries.
///
/// [`LogClient`] talks to the real backend; [`MockLogStore`](crate::MockLogStore)
/// keeps entries in memory so store-consuming code can be tested without a
/// server.
pub trait LogStore: Send + Sync {
    /// Fetch all entries, in the order the backend returns them.
    fn fetch_logs(&self) -> impl Future<Output = Result<Vec<LogEntry>, ClientError>> + Send;

    /// Create a new entry.
    fn create_log(&self, entry: NewLogEntry) -> impl Future<Output = Result<(), ClientError>> + Send;
}

/// HTTP implementation of [`LogStore`] against the REST backend.
///
/// Uses a reusable `reqwest::Client` with connection pooling and a request
/// timeout.
pub struct LogClient {
    http: reqwest::Client,
    base_url: String,
}

impl LogClient {
    /// Create a client from a config.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    fn logs_url(&self) -> String {
        format!("{}/api/logs", self.base_url)
    }

    fn check_status(response: &reqwest::Response) -> Result<(), ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::Status(status.as_u16()))
        }
    }
}

impl LogStore for LogClient {
    async fn fetch_logs(&self) -> Result<Vec<LogEntry>, ClientError> {
        let url = self.logs_url();
        debug!("fetching logs from {}", url);

        let response = self.http.get(&url).send().await?;
        Self::check_status(&response)?;

        let bytes = response.bytes().await?;
        let parsed: LogsResponse = serde_json::from_slice(&bytes)?;

        info!("fetched {} log entries", parsed.data.len());
        Ok(parsed.data)
    }

    async fn create_log(&self, entry: NewLogEntry) -> Result<(), ClientError> {
        let url = self.logs_url();
        debug!("posting {} entry to {}", entry.kind, url);

        let response = self.http.post(&url).json(&entry).send().await?;
        Self::check_status(&response)?;

        // Any 2xx is success; the response body is unused.
        info!("created {} entry", entry.kind);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_client_creation_and_url_join() {
        let client = LogClient::new(ClientConfig {
            base_url: "http://health.example:8080".to_string(),
            ..ClientConfig::default()
        })
        .unwrap();

        assert_eq!(client.logs_url(), "http://health.example:8080/api/logs");
    }
}

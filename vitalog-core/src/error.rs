//! Error types for the VitaLog core crate.

/// Errors that can occur when talking to the remote logbook endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or the response body not read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Server returned status {0}")]
    Status(u16),

    /// The response body was not valid logbook JSON.
    #[error("Failed to parse response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors produced when constructing dial geometry.
#[derive(Debug, thiserror::Error)]
pub enum DialError {
    /// The range bounds were inverted or empty.
    #[error("Invalid dial range: min {min} must be less than max {max}")]
    InvalidRange {
        /// Lower bound that was provided.
        min: f32,
        /// Upper bound that was provided.
        max: f32,
    },
}

//! Error types for the Bluelytics client.

use thiserror::Error;

/// Error type for parallel-rate requests.
///
/// Unlike [`BcraError`](crate::bcra::BcraError), this one is *hard*: the
/// dashboard lets it propagate and abort the render cycle.
#[derive(Debug, Error)]
pub enum BlueError {
    /// HTTP/network error from reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("Bluelytics replied {status}: {body}")]
    Remote {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// JSON deserialization error
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

/// Result type alias for Bluelytics operations.
pub type BlueResult<T> = Result<T, BlueError>;

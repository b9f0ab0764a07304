//! Error types for the movie API client.

use async_resource::Rejection;
use thiserror::Error;

/// Errors that can occur while looking up movie details.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The movie identifier was empty.
    #[error("Invalid movie id")]
    InvalidId,

    /// The API has no movie with this identifier.
    #[error("Movie not found: {0}")]
    NotFound(String),

    /// The API rejected the configured credentials.
    #[error("Movie API rejected the credentials")]
    Unauthorized,

    /// Any other non-success HTTP status.
    #[error("Movie API returned HTTP {status} - {reason}")]
    Status { status: u16, reason: String },

    /// The request never produced a response.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not a movie record.
    #[error("Malformed movie payload: {0}")]
    Decode(String),

    /// The client configuration is unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<ApiError> for Rejection {
    fn from(error: ApiError) -> Self {
        Rejection::error(error)
    }
}

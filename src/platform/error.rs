use reqwest::StatusCode;
use thiserror::Error;

/// Failure kinds for platform API calls.
///
/// The kind is decided once, at the transport boundary; callers match on the
/// variants and never see raw status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The resource does not exist (HTTP 404).
    #[error("resource not found")]
    NotFound,

    /// The API rejected the request body (HTTP 422). `message` carries the
    /// error body's `message` field.
    #[error("unprocessable request: {message}")]
    Unprocessable { message: String },

    /// Any other non-success response.
    #[error("{url} - {status}, {message}")]
    Status {
        url: String,
        status: StatusCode,
        message: String,
    },

    /// Invalid client configuration (base URL, path).
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

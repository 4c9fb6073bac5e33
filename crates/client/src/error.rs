//! Error types for the WordPress client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the WordPress backend.
///
/// These never escape the [`WpClient`](crate::WpClient) gateway surface;
/// they exist so the endpoint layer can report precisely what went wrong
/// before the gateway logs it and degrades to a default.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error response from the backend.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body did not have the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid or missing URL configuration.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

//! Dataset fetch error types.

/// Errors that can occur when fetching and decoding the routes dataset.
///
/// Any of these aborts the whole query; the system never returns partial
/// results when the dataset could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP transport failed (connection, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP status {status}: {message}")]
    Status { status: u16, message: String },

    /// Payload could not be decoded in the selected format
    #[error("parse error: {message}")]
    Parse { message: String },
}

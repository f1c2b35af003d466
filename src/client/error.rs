//! Error taxonomy for directory operations.

use thiserror::Error;

use crate::hunter::FieldError;

/// Errors surfaced by [`DirectoryClient`](crate::client::DirectoryClient)
/// operations.
///
/// Every variant is recoverable: callers turn it into a user-facing message
/// and the store keeps its last-known-good state. Nothing here is fatal to
/// the process.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Local input rejected before any request was sent.
    #[error("invalid input: {0}")]
    Validation(#[from] FieldError),

    /// The request could not be completed: connect failure, transport
    /// error, or a malformed response body.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server received the request and reported failure.
    #[error("server rejected request ({status}): {message}")]
    Remote { status: u16, message: String },

    /// A well-formed search that legitimately matched nothing. A normal
    /// outcome, not a fault.
    #[error("{message}")]
    NotFound { message: String },
}

impl DirectoryError {
    /// True when the error came from local validation, meaning no request
    /// reached the network.
    pub fn is_local(&self) -> bool {
        matches!(self, DirectoryError::Validation(_))
    }
}

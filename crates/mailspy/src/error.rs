//! Error types for the transport layer.

use thiserror::Error;

/// Result type alias for transport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while persisting message renderings.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying storage failed. Fatal for the current send; never retried.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Preview filenames are derived from the first to-address, so a message
    /// without one cannot be previewed.
    #[error("message has no recipients")]
    NoRecipients,
}

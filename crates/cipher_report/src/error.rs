//! Error types for report assembly and storage.

use cipher_base::CipherError;
use thiserror::Error;

/// Errors from narrative parsing, report assembly, journaling, or storage.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    /// The narrative collaborator returned no text.
    #[error("no data received from the narrative generator")]
    EmptyResponse,
    /// Narrative or stored JSON could not be decoded.
    #[error("invalid response format: {0}")]
    Format(#[from] serde_json::Error),
    /// The birth date could not be interpreted by the engine.
    #[error(transparent)]
    Cipher(#[from] CipherError),
    /// Storage I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// User id is empty or contains characters outside `[A-Za-z0-9_-]`.
    #[error("invalid user id {0:?}")]
    InvalidUserId(String),
    /// Impact magnitude outside 1..=5.
    #[error("impact magnitude {0} outside 1..=5")]
    InvalidMagnitude(u8),
}

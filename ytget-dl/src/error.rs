//! Engine boundary error.

use pyo3::PyErr;
use thiserror::Error;

/// Failure raised by the embedded yt-dlp engine.
///
/// One kind only: the engine can fail for many unrelated reasons (network,
/// filesystem, extraction, unsupported URL) and this boundary treats them all
/// the same, carrying the engine's description as an opaque payload.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DownloadError {
    message: String,
}

impl DownloadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Engine-reported description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<PyErr> for DownloadError {
    fn from(err: PyErr) -> Self {
        Self::new(err.to_string())
    }
}

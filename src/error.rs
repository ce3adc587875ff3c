//! Errors surfaced by a paste run.
//!
//! None of these are recovered internally: each one terminates the run and
//! is reported to the operator. Batches already published stay published.

use std::path::PathBuf;

use crate::clipboard::ClipboardError;

/// Errors that can occur while collecting photos or pacing batches.
#[derive(Debug, thiserror::Error)]
pub enum PasteError {
    #[error("Directory not found or not readable: {path}")]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

impl PasteError {
    /// Whether the run failed before anything touched the clipboard.
    pub fn is_before_clipboard(&self) -> bool {
        !matches!(self, PasteError::Clipboard(_))
    }
}

//! Clipboard operation errors.

/// Errors that can occur while publishing a file list to the clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard is busy (held by another process): {reason}")]
    Busy { reason: String },

    #[error("Failed to write file list to clipboard: {reason}")]
    Write { reason: String },

    #[error("Failed to read file list from clipboard: {reason}")]
    Read { reason: String },

    #[error("No clipboard tool available. On Linux, install xclip.")]
    NoToolAvailable,

    #[error("Platform not supported (only Windows, macOS and Linux)")]
    UnsupportedPlatform,
}

/// Errors from parsing a dropped-file-list payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("Payload too short for a DROPFILES header ({len} bytes)")]
    TooShort { len: usize },

    #[error("File list offset {offset} lies outside the {len}-byte payload")]
    InvalidOffset { offset: u32, len: usize },

    #[error("Wide file list has an odd byte count ({len} bytes)")]
    OddLength { len: usize },

    #[error("File list is missing its double-null terminator")]
    Unterminated,
}

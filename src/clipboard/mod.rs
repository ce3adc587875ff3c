//! Clipboard publishing of file lists.
//!
//! A batch of photos is placed on the clipboard as a dropped-file list so the
//! target application receives real files on paste. On Windows the payload
//! is the native CF_HDROP structure built by [`drop_files`]. On macOS and
//! Linux the equivalent file-reference formats are written through
//! `osascript` and `xclip`.
//!
//! # Example
//!
//! ```ignore
//! use photo_paster::clipboard::{FileListClipboard, Publisher};
//! use std::path::PathBuf;
//!
//! let batch = vec![PathBuf::from(r"C:\Photos\IMG_0001.jpg")];
//! Publisher::new().publish(&batch)?;
//! ```

pub mod drop_files;
mod error;
pub mod publish;
pub mod tool;
pub mod tools;

pub use drop_files::{decode_file_list, encode_file_list, DropFilesHeader, CF_HDROP};
pub use error::{ClipboardError, PayloadError};
pub use publish::Publisher;

use std::path::PathBuf;

/// Capability to replace the clipboard contents with a list of files.
///
/// Each call is one scoped transaction: claim the clipboard, clear it, write
/// the list, release it. An empty list is valid and is published as such.
pub trait FileListClipboard {
    fn publish(&self, paths: &[PathBuf]) -> Result<(), ClipboardError>;
}

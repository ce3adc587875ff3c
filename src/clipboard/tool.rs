//! Clipboard tool abstraction.

use std::path::PathBuf;

/// Identifies which tool placed a file list on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// Native Windows clipboard, CF_HDROP format
    Win32,
    /// macOS AppleScript file references
    OsaScript,
    /// Linux X11 `text/uri-list`
    Xclip,
}

impl ToolKind {
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Win32 => "win32",
            ToolKind::OsaScript => "osascript",
            ToolKind::Xclip => "xclip",
        }
    }
}

/// Failure modes reported by a single tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// The tool cannot publish file lists on this system.
    NotSupported,
    /// The tool binary is not installed.
    NotFound,
    /// Another process holds the clipboard.
    Busy(String),
    /// The tool ran but the clipboard operation failed.
    Failed(String),
}

/// A platform mechanism able to publish a list of files to the clipboard.
pub trait ClipboardTool {
    fn kind(&self) -> ToolKind;

    /// Whether the tool can run here (platform match, binary installed).
    fn is_available(&self) -> bool;

    /// Replace the clipboard contents with the given file list.
    fn try_publish(&self, paths: &[PathBuf]) -> Result<(), ToolError>;

    /// Read the file list currently on the clipboard.
    ///
    /// An empty list means the clipboard holds no file list. Tools that
    /// can only write report `NotSupported`.
    fn read_file_list(&self) -> Result<Vec<PathBuf>, ToolError> {
        Err(ToolError::NotSupported)
    }

    fn name(&self) -> &'static str {
        self.kind().name()
    }
}

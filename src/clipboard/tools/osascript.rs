//! macOS AppleScript clipboard tool.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::clipboard::tool::{ClipboardTool, ToolError, ToolKind};

/// macOS AppleScript clipboard tool.
///
/// Uses `osascript` to put a list of POSIX file references on the
/// pasteboard, so the batch pastes as attachments.
pub struct OsaScript;

impl OsaScript {
    pub fn new() -> Self {
        Self
    }

    /// Escape a path for use in AppleScript string.
    ///
    /// Escapes backslashes, double quotes, and control characters
    /// (newlines, carriage returns, tabs) to prevent AppleScript injection
    /// or syntax errors.
    pub fn escape_path(path: &Path) -> String {
        path.display()
            .to_string()
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    /// Build the AppleScript that sets the clipboard to a list of files.
    pub fn build_file_list_script(paths: &[PathBuf]) -> String {
        let items: Vec<String> = paths
            .iter()
            .map(|p| format!("POSIX file \"{}\"", Self::escape_path(p)))
            .collect();
        format!("set the clipboard to {{{}}}", items.join(", "))
    }

    fn run_script(script: &str) -> Result<(), ToolError> {
        let output = Command::new("osascript")
            .args(["-e", script])
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ToolError::NotFound,
                _ => ToolError::Failed(e.to_string()),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(ToolError::Failed(
                String::from_utf8_lossy(&output.stderr).to_string(),
            ))
        }
    }
}

impl ClipboardTool for OsaScript {
    fn kind(&self) -> ToolKind {
        ToolKind::OsaScript
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn try_publish(&self, paths: &[PathBuf]) -> Result<(), ToolError> {
        Self::run_script(&Self::build_file_list_script(paths))
    }
}

impl Default for OsaScript {
    fn default() -> Self {
        Self::new()
    }
}

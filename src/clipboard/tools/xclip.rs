//! Linux xclip clipboard tool.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::clipboard::tool::{ClipboardTool, ToolError, ToolKind};

/// Linux X11 clipboard tool using xclip.
///
/// Publishes the batch as a `text/uri-list`, which file managers and
/// browsers treat as a set of copied files.
pub struct Xclip;

impl Xclip {
    pub fn new() -> Self {
        Self
    }

    /// Build a file:// URI for the given path.
    ///
    /// Spaces and special characters are percent-encoded per RFC 3986.
    /// Non-ASCII characters are encoded as UTF-8 bytes.
    pub fn build_file_uri(path: &Path) -> String {
        let path_str = path.display().to_string();
        let mut encoded = String::new();

        for c in path_str.chars() {
            if c.is_ascii_alphanumeric() || c == '/' || c == '.' || c == '-' || c == '_' {
                encoded.push(c);
            } else {
                for byte in c.to_string().as_bytes() {
                    encoded.push_str(&format!("%{:02X}", byte));
                }
            }
        }

        format!("file://{}", encoded)
    }

    /// Build a `text/uri-list` body (CRLF-separated, RFC 2483).
    pub fn build_uri_list(paths: &[PathBuf]) -> String {
        paths
            .iter()
            .map(|p| format!("{}\r\n", Self::build_file_uri(p)))
            .collect()
    }

    fn tool_exists() -> bool {
        Command::new("which")
            .arg("xclip")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl ClipboardTool for Xclip {
    fn kind(&self) -> ToolKind {
        ToolKind::Xclip
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && Self::tool_exists()
    }

    fn try_publish(&self, paths: &[PathBuf]) -> Result<(), ToolError> {
        let body = Self::build_uri_list(paths);

        let mut child = Command::new("xclip")
            .args(["-selection", "clipboard", "-t", "text/uri-list"])
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ToolError::NotFound,
                _ => ToolError::Failed(e.to_string()),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(body.as_bytes())
                .map_err(|e| ToolError::Failed(e.to_string()))?;
        }

        let status = child
            .wait()
            .map_err(|e| ToolError::Failed(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(ToolError::Failed("xclip failed".to_string()))
        }
    }
}

impl Default for Xclip {
    fn default() -> Self {
        Self::new()
    }
}

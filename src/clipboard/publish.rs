//! Publish orchestrator for clipboard file lists.

use std::path::PathBuf;

use tracing::{debug, warn};

use super::error::ClipboardError;
use super::tool::{ClipboardTool, ToolError, ToolKind};
use super::tools::platform_tools;
use super::FileListClipboard;

/// Publishes file lists using the first available tool that succeeds.
///
/// A busy clipboard is reported immediately rather than handed to the next
/// tool. Other failures fall through in priority order.
pub struct Publisher {
    tools: Vec<Box<dyn ClipboardTool>>,
}

impl Publisher {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn ClipboardTool>>) -> Self {
        Self { tools }
    }

    pub fn tools(&self) -> &[Box<dyn ClipboardTool>] {
        &self.tools
    }

    /// Publish and report which tool did the work.
    pub fn publish_with(&self, paths: &[PathBuf]) -> Result<ToolKind, ClipboardError> {
        let mut last_error: Option<String> = None;

        for tool in self.tools.iter().filter(|t| t.is_available()) {
            match tool.try_publish(paths) {
                Ok(()) => {
                    debug!(tool = tool.name(), files = paths.len(), "published file list");
                    return Ok(tool.kind());
                }
                Err(ToolError::NotSupported) | Err(ToolError::NotFound) => continue,
                Err(ToolError::Busy(reason)) => return Err(ClipboardError::Busy { reason }),
                Err(ToolError::Failed(msg)) => {
                    warn!(tool = tool.name(), error = %msg, "clipboard tool failed, trying next");
                    last_error = Some(msg);
                }
            }
        }

        match last_error {
            Some(reason) => Err(ClipboardError::Write { reason }),
            None => Err(ClipboardError::NoToolAvailable),
        }
    }
}

impl Publisher {
    /// Read back the file list currently on the clipboard.
    ///
    /// Uses the first available tool that can read. An empty list means the
    /// clipboard holds no file list.
    pub fn read_file_list(&self) -> Result<Vec<PathBuf>, ClipboardError> {
        for tool in self.tools.iter().filter(|t| t.is_available()) {
            match tool.read_file_list() {
                Ok(paths) => {
                    debug!(tool = tool.name(), files = paths.len(), "read file list");
                    return Ok(paths);
                }
                Err(ToolError::NotSupported) | Err(ToolError::NotFound) => continue,
                Err(ToolError::Busy(reason)) => return Err(ClipboardError::Busy { reason }),
                Err(ToolError::Failed(reason)) => return Err(ClipboardError::Read { reason }),
            }
        }
        Err(ClipboardError::NoToolAvailable)
    }
}

impl FileListClipboard for Publisher {
    fn publish(&self, paths: &[PathBuf]) -> Result<(), ClipboardError> {
        self.publish_with(paths).map(|_| ())
    }
}

impl Default for Publisher {
    fn default() -> Self {
        Self::new()
    }
}

//! Native Windows clipboard tool.

use std::path::PathBuf;

use crate::clipboard::tool::{ClipboardTool, ToolError, ToolKind};

/// Writes and reads CF_HDROP payloads straight on the Windows clipboard.
///
/// Opening the clipboard claims it for this process; the handle is released
/// when the guard drops, whether or not the operation succeeded.
pub struct Win32;

impl Win32 {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for Win32 {
    fn kind(&self) -> ToolKind {
        ToolKind::Win32
    }

    fn is_available(&self) -> bool {
        cfg!(windows)
    }

    #[cfg(windows)]
    fn try_publish(&self, paths: &[PathBuf]) -> Result<(), ToolError> {
        use crate::clipboard::drop_files::{encode_file_list, CF_HDROP};
        use clipboard_win::{raw, Clipboard};

        let payload = encode_file_list(paths);

        let _guard = Clipboard::new().map_err(|e| ToolError::Busy(e.to_string()))?;
        raw::empty().map_err(|e| ToolError::Failed(format!("EmptyClipboard: {}", e)))?;
        raw::set_without_clear(CF_HDROP, &payload)
            .map_err(|e| ToolError::Failed(format!("SetClipboardData: {}", e)))?;
        Ok(())
    }

    #[cfg(not(windows))]
    fn try_publish(&self, _paths: &[PathBuf]) -> Result<(), ToolError> {
        Err(ToolError::NotSupported)
    }

    #[cfg(windows)]
    fn read_file_list(&self) -> Result<Vec<PathBuf>, ToolError> {
        use crate::clipboard::drop_files::{decode_file_list, CF_HDROP};
        use clipboard_win::{raw, Clipboard};

        let _guard = Clipboard::new().map_err(|e| ToolError::Busy(e.to_string()))?;
        if !raw::is_format_avail(CF_HDROP) {
            return Ok(Vec::new());
        }

        let mut payload = Vec::new();
        raw::get_vec(CF_HDROP, &mut payload)
            .map_err(|e| ToolError::Failed(format!("GetClipboardData: {}", e)))?;
        decode_file_list(&payload).map_err(|e| ToolError::Failed(e.to_string()))
    }
}

impl Default for Win32 {
    fn default() -> Self {
        Self::new()
    }
}

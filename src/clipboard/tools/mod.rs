//! Platform clipboard tools, in priority order.

pub mod osascript;
pub mod win32;
pub mod xclip;

use super::tool::ClipboardTool;

pub use osascript::OsaScript;
pub use win32::Win32;
pub use xclip::Xclip;

/// Tools for the current platform. Unavailable ones are skipped at publish time.
pub fn platform_tools() -> Vec<Box<dyn ClipboardTool>> {
    vec![
        Box::new(Win32::new()),
        Box::new(OsaScript::new()),
        Box::new(Xclip::new()),
    ]
}

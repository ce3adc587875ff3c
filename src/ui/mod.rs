//! Terminal presentation: photo table, start prompt and live status.

pub mod panel;
pub mod prompt;
pub mod status;
pub mod table;

pub use prompt::confirm;
pub use status::TerminalObserver;
pub use table::print_photo_table;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate from the left, keeping the end of the string (useful for paths).
pub fn truncate_start(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let target_width = max_width.saturating_sub(1);
    let mut kept: Vec<char> = Vec::new();
    let mut current_width = 0;

    for c in s.chars().rev() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        kept.push(c);
        current_width += char_width;
    }

    let tail: String = kept.into_iter().rev().collect();
    format!("…{}", tail)
}

/// Format seconds as `MM:SS`, or `H:MM:SS` past an hour.
pub fn format_clock(secs: u64) -> String {
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{:02}:{:02}", m, s)
    }
}

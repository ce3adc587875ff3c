//! Listing of collected photos.

use std::io::{self, Write};
use std::path::PathBuf;

use super::truncate_start;
use crate::theme::Theme;

/// Width of the "Nr." column.
const NR_WIDTH: usize = 4;

/// Fallback path column width when the terminal size is unknown.
const DEFAULT_PATH_WIDTH: usize = 100;

/// Path column width for the current terminal.
pub fn path_column_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _)| (cols as usize).saturating_sub(NR_WIDTH + 3).max(20))
        .unwrap_or(DEFAULT_PATH_WIDTH)
}

/// Print the numbered table of photos in paste order.
pub fn print_photo_table<W: Write>(
    out: &mut W,
    photos: &[PathBuf],
    theme: &Theme,
    path_width: usize,
) -> io::Result<()> {
    writeln!(out, "{}", theme.success_text("Found photos"))?;
    writeln!(
        out,
        "{} | {}",
        theme.accent_text(&format!("{:>width$}", "Nr.", width = NR_WIDTH)),
        theme.highlight_text("Path")
    )?;
    writeln!(
        out,
        "{}",
        theme.secondary_text(&format!(
            "{}-+-{}",
            "-".repeat(NR_WIDTH),
            "-".repeat(path_width.min(DEFAULT_PATH_WIDTH))
        ))
    )?;

    for (idx, photo) in photos.iter().enumerate() {
        let path = truncate_start(&photo.display().to_string(), path_width);
        writeln!(
            out,
            "{} | {}",
            theme.accent_text(&format!("{:>width$}", idx + 1, width = NR_WIDTH)),
            theme.highlight_text(&path)
        )?;
    }

    Ok(())
}

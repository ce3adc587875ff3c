//! CLI definitions for photo-paster

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use std::path::PathBuf;

/// Build clap styles using our theme colors.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser, Debug)]
#[command(name = "photo-paster")]
#[command(about = "Upload photos to a web messenger in paste-sized clipboard batches.")]
#[command(
    long_about = "Photo Paster - stage photos on the clipboard in batches.

Collects the images (jpg, jpeg, png, bmp, gif, tiff, webp) directly inside
the given folders, shows them in paste order and, once confirmed, copies
them to the clipboard a batch at a time. After each batch there is a pause
to paste it into the target before the next batch replaces it.

Batch size and pause length are read from ~/.config/photo-paster/config.toml:

    [batch]
    size = 16
    delay_secs = 15
    lead_in_secs = 3

    [notify]
    beep = true

EXAMPLES:
    photo-paster ~/Pictures/trip           Paste one folder
    photo-paster day1 day2 day3            Paste several folders in order"
)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Folders containing the photos to paste
    #[arg(required = true, num_args = 1.., value_name = "PHOTOS_FOLDER")]
    pub photos_folder: Vec<PathBuf>,
}

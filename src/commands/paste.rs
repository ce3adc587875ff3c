//! Paste command handler

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

use photo_paster::scheduler::BatchScheduler;
use photo_paster::theme::current_theme;
use photo_paster::ui::{confirm, print_photo_table, table::path_column_width, TerminalObserver};
use photo_paster::{collect, Config, Publisher};

/// Collect photos from the given folders and paste them in batches.
///
/// Nothing touches the clipboard until the operator confirms the start.
pub fn handle(folders: &[PathBuf]) -> Result<()> {
    let config = Config::load()?;
    let schedule = config.schedule();
    let theme = current_theme();

    println!("{}", theme.accent_text("Gathering photos..."));
    let photos = collect(folders)?;

    let mut stdout = io::stdout();
    print_photo_table(&mut stdout, &photos, &theme, path_column_width())?;
    writeln!(
        stdout,
        "{} {} {} photos in provided folders!",
        theme.primary_text(">"),
        theme.success_text("Found"),
        theme.highlight_text(&photos.len().to_string())
    )?;

    let start = confirm(
        &theme.success_text("Start upload process?"),
        &mut io::stdin().lock(),
        &mut stdout,
    )
    .context("Failed to read confirmation")?;
    if !start {
        return Ok(());
    }

    let live = atty::is(atty::Stream::Stdout);
    let mut observer = TerminalObserver::new(io::stdout(), live, config.notify.beep, schedule.wait_secs);
    let mut scheduler = BatchScheduler::new(schedule, Publisher::new());

    let summary = match scheduler.run(&photos, &mut observer) {
        Ok(state) => state,
        Err(err) if err.is_before_clipboard() => return Err(err.into()),
        Err(err) => {
            // The failed batch was reported before its publish was attempted.
            let state = observer.state();
            let published = state.photos_processed - state.current_batch_size;
            return Err(anyhow::Error::new(err).context(format!(
                "Paste run aborted at batch {}/{} ({} of {} photos were published)",
                state.current_batch, state.total_batches, published, state.total_photos
            )));
        }
    };

    if summary.total_batches > 0 {
        match scheduler.clipboard().read_file_list() {
            Ok(files) => debug!(files = files.len(), "file list left on clipboard"),
            Err(err) => debug!(error = %err, "could not read clipboard back"),
        }
    }

    println!(
        "{} {}",
        theme.success_text("✓ All batches processed successfully!"),
        theme.secondary_text(&format!(
            "({} photos in {} batches)",
            summary.photos_processed, summary.total_batches
        ))
    );
    Ok(())
}

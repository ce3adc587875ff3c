//! Live status display for a paste run.
//!
//! Renders an upload-status panel, a message panel and a progress line, and
//! redraws them in place on every scheduler notification. When stdout is
//! not a terminal, it falls back to one plain line per batch event.

use std::io::Write;
use std::time::Instant;

use crossterm::{cursor, queue, terminal};

use super::format_clock;
use super::panel::{render_panel, Span};
use crate::scheduler::{ScheduleObserver, ScheduleState};
use crate::theme::Theme;

/// Width of the progress bar in cells.
const BAR_WIDTH: usize = 30;

/// What the message panel currently says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    Starting,
    Countdown(u64),
    ReadyForNext,
    AllProcessed,
}

/// Scheduler observer that draws progress to a terminal.
pub struct TerminalObserver<W: Write> {
    out: W,
    theme: Theme,
    live: bool,
    beep: bool,
    wait_secs: u64,
    started: Instant,
    state: ScheduleState,
    message: StatusMessage,
    drawn_lines: u16,
}

impl<W: Write> TerminalObserver<W> {
    /// Create an observer.
    ///
    /// `live` redraws the frame in place; otherwise events are appended as
    /// plain lines. `wait_secs` is used to estimate the time remaining.
    pub fn new(out: W, live: bool, beep: bool, wait_secs: u64) -> Self {
        Self {
            out,
            theme: crate::theme::current_theme(),
            live,
            beep,
            wait_secs,
            started: Instant::now(),
            state: ScheduleState::default(),
            message: StatusMessage::Starting,
            drawn_lines: 0,
        }
    }

    /// Last progress reported by the scheduler.
    pub fn state(&self) -> ScheduleState {
        self.state
    }

    pub fn message(&self) -> StatusMessage {
        self.message
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render the full status frame as lines.
    pub fn render_frame(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(7);
        lines.extend(self.counter_panel());
        lines.extend(self.message_panel());
        lines.push(self.progress_line());
        lines
    }

    fn counter_panel(&self) -> [String; 3] {
        let t = &self.theme;
        let s = &self.state;
        render_panel(
            "Upload Status",
            t.accent,
            &[
                Span::bold("Batch Progress: ", t.text_primary),
                Span::bold(
                    format!("{}/{}", s.current_batch, s.total_batches),
                    t.accent,
                ),
                Span::bold(" | Photos: ", t.text_primary),
                Span::bold(
                    format!("{}/{}", s.photos_processed, s.total_photos),
                    t.success,
                ),
                Span::bold(" | Current Batch Size: ", t.text_primary),
                Span::bold(s.current_batch_size.to_string(), t.warning),
            ],
        )
    }

    fn message_panel(&self) -> [String; 3] {
        let t = &self.theme;
        match self.message {
            StatusMessage::Starting => {
                render_panel("Status", t.success, &[Span::bold("Starting...", t.success)])
            }
            StatusMessage::Countdown(secs) => render_panel(
                "Waiting",
                t.warning,
                &[
                    Span::bold("Batch copied! Next batch in ", t.text_primary),
                    Span::bold(secs.to_string(), t.error),
                    Span::bold(" seconds...", t.text_primary),
                ],
            ),
            StatusMessage::ReadyForNext => render_panel(
                "Status",
                t.success,
                &[Span::bold("Ready for next batch...", t.success)],
            ),
            StatusMessage::AllProcessed => render_panel(
                "Status",
                t.success,
                &[Span::bold("All batches processed.", t.success)],
            ),
        }
    }

    fn progress_line(&self) -> String {
        let t = &self.theme;
        let s = &self.state;

        // A batch counts as done once its wait is over.
        let done = match self.message {
            StatusMessage::ReadyForNext | StatusMessage::AllProcessed => s.current_batch,
            _ => s.current_batch.saturating_sub(1),
        };
        let ratio = if s.total_batches == 0 {
            1.0
        } else {
            done as f64 / s.total_batches as f64
        };
        let filled = ((ratio * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);

        let elapsed = self.started.elapsed().as_secs();
        let remaining_batches = s.total_batches.saturating_sub(s.current_batch) as u64;
        let eta = remaining_batches * self.wait_secs + s.seconds_remaining;

        format!(
            "{} {}{} {:>3}% {} elapsed {} remaining",
            t.primary_text("Processing batches..."),
            t.success_text(&"█".repeat(filled)),
            t.secondary_text(&"░".repeat(BAR_WIDTH - filled)),
            (ratio * 100.0).round() as u64,
            t.accent_text(&format_clock(elapsed)),
            t.highlight_text(&format_clock(eta)),
        )
    }

    /// Redraw the frame in place, replacing the previous one.
    fn redraw(&mut self) {
        let lines = self.render_frame();
        if self.drawn_lines > 0 {
            let _ = queue!(
                self.out,
                cursor::MoveToPreviousLine(self.drawn_lines),
                terminal::Clear(terminal::ClearType::FromCursorDown)
            );
        }
        for line in &lines {
            let _ = writeln!(self.out, "{}", line);
        }
        self.drawn_lines = lines.len() as u16;
        let _ = self.out.flush();
    }

    fn log_line(&mut self, line: &str) {
        let _ = writeln!(self.out, "{}", line);
        let _ = self.out.flush();
    }

    fn update(&mut self, plain: Option<String>) {
        if self.live {
            self.redraw();
        } else if let Some(line) = plain {
            self.log_line(&line);
        }
    }
}

impl<W: Write> ScheduleObserver for TerminalObserver<W> {
    fn on_start(&mut self, state: &ScheduleState) {
        self.started = Instant::now();
        self.state = *state;
        self.message = StatusMessage::Starting;
        self.update(Some("Starting...".to_string()));
    }

    fn on_state_change(&mut self, state: &ScheduleState) {
        if self.beep {
            let _ = write!(self.out, "\x07");
        }
        self.state = *state;
        self.update(Some(format!(
            "Batch {}/{}: {} photo(s) on clipboard ({}/{} total)",
            state.current_batch,
            state.total_batches,
            state.current_batch_size,
            state.photos_processed,
            state.total_photos
        )));
    }

    fn on_tick(&mut self, seconds_remaining: u64) {
        self.state.seconds_remaining = seconds_remaining;
        self.message = StatusMessage::Countdown(seconds_remaining);
        self.update(None);
    }

    fn on_batch_settled(&mut self, state: &ScheduleState, is_last: bool) {
        self.state = *state;
        self.message = if is_last {
            StatusMessage::AllProcessed
        } else {
            StatusMessage::ReadyForNext
        };
        let line = if is_last {
            "All batches processed."
        } else {
            "Ready for next batch..."
        };
        self.update(Some(line.to_string()));
    }
}

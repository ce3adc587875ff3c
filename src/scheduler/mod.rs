//! Batch pacing.
//!
//! The scheduler splits the photo queue into fixed-size batches and, for
//! each one in order:
//!
//! 1. reports the new progress to the observer,
//! 2. publishes the batch to the clipboard,
//! 3. counts the wait down one second at a time,
//! 4. reports that the batch has settled.
//!
//! Any clipboard failure ends the run. Batches already published are not
//! rolled back; the last reported state says how far the run got.

mod observer;
mod sleeper;
mod state;

pub use observer::{callbacks, Callbacks, ScheduleObserver};
pub use sleeper::{Sleeper, ThreadSleeper};
pub use state::ScheduleState;

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use crate::clipboard::FileListClipboard;
use crate::error::PasteError;

/// Files per clipboard write.
pub const DEFAULT_BATCH_SIZE: usize = 16;

/// Seconds to wait after each clipboard write.
pub const DEFAULT_WAIT_SECS: u64 = 15;

/// Seconds to wait before the first clipboard write.
pub const DEFAULT_LEAD_IN_SECS: u64 = 3;

/// Pacing parameters for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleConfig {
    pub batch_size: usize,
    pub wait_secs: u64,
    pub lead_in_secs: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            wait_secs: DEFAULT_WAIT_SECS,
            lead_in_secs: DEFAULT_LEAD_IN_SECS,
        }
    }
}

impl ScheduleConfig {
    pub fn validate(&self) -> Result<(), PasteError> {
        if self.batch_size == 0 {
            return Err(PasteError::InvalidConfiguration(
                "batch size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Number of batches needed for `total` photos.
pub fn batch_count(total: usize, batch_size: usize) -> usize {
    if batch_size == 0 {
        0
    } else {
        total.div_ceil(batch_size)
    }
}

/// Split the queue into consecutive batches. Only the last may be short.
///
/// # Panics
/// Panics if `batch_size` is zero; validate the config first.
pub fn partition(queue: &[PathBuf], batch_size: usize) -> std::slice::Chunks<'_, PathBuf> {
    queue.chunks(batch_size)
}

/// Drives batches onto the clipboard with a fixed wait between them.
pub struct BatchScheduler<C, S = ThreadSleeper> {
    config: ScheduleConfig,
    clipboard: C,
    sleeper: S,
}

impl<C: FileListClipboard> BatchScheduler<C, ThreadSleeper> {
    pub fn new(config: ScheduleConfig, clipboard: C) -> Self {
        Self::with_sleeper(config, clipboard, ThreadSleeper)
    }
}

impl<C: FileListClipboard, S: Sleeper> BatchScheduler<C, S> {
    /// Create with a custom sleeper (for testing).
    pub fn with_sleeper(config: ScheduleConfig, clipboard: C, sleeper: S) -> Self {
        Self {
            config,
            clipboard,
            sleeper,
        }
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Publish the whole queue, batch by batch.
    ///
    /// Returns the final progress. An empty queue returns at once without
    /// notifying the observer or touching the clipboard.
    ///
    /// # Errors
    /// - `PasteError::InvalidConfiguration` - batch size is zero
    /// - `PasteError::Clipboard` - a publish failed; later batches are not attempted
    pub fn run(
        &mut self,
        queue: &[PathBuf],
        observer: &mut dyn ScheduleObserver,
    ) -> Result<ScheduleState, PasteError> {
        self.config.validate()?;

        let batch_size = self.config.batch_size;
        let total_photos = queue.len();
        let total_batches = batch_count(total_photos, batch_size);
        let mut state = ScheduleState::new(total_batches, total_photos);

        if total_photos == 0 {
            debug!("empty queue, nothing to publish");
            return Ok(state);
        }

        info!(total_photos, total_batches, batch_size, "starting paste run");
        observer.on_start(&state);
        if self.config.lead_in_secs > 0 {
            self.sleeper
                .sleep(Duration::from_secs(self.config.lead_in_secs));
        }

        for (index, batch) in partition(queue, batch_size).enumerate() {
            state.begin_batch(index + 1, batch.len());
            observer.on_state_change(&state);

            self.clipboard.publish(batch)?;
            info!(
                batch = state.current_batch,
                total_batches,
                photos = batch.len(),
                processed = state.photos_processed,
                "batch on clipboard"
            );

            for remaining in (1..=self.config.wait_secs).rev() {
                state.seconds_remaining = remaining;
                observer.on_tick(remaining);
                self.sleeper.sleep(Duration::from_secs(1));
            }
            state.seconds_remaining = 0;

            observer.on_batch_settled(&state, state.is_last_batch());
        }

        Ok(state)
    }
}

//! Live progress of a paste run.

/// Snapshot of scheduler progress, handed to observers.
///
/// `photos_processed` is the sum of the sizes of all batches dispatched so
/// far. `current_batch` is 1-based and ends equal to `total_batches`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleState {
    pub current_batch: usize,
    pub total_batches: usize,
    pub current_batch_size: usize,
    pub photos_processed: usize,
    pub total_photos: usize,
    pub seconds_remaining: u64,
}

impl ScheduleState {
    pub fn new(total_batches: usize, total_photos: usize) -> Self {
        Self {
            total_batches,
            total_photos,
            ..Self::default()
        }
    }

    /// Advance to the given 1-based batch holding `size` photos.
    pub(crate) fn begin_batch(&mut self, batch: usize, size: usize) {
        debug_assert!(batch > self.current_batch);
        self.current_batch = batch;
        self.current_batch_size = size;
        self.photos_processed += size;
        self.seconds_remaining = 0;
        debug_assert!(self.photos_processed <= self.total_photos);
    }

    pub fn is_last_batch(&self) -> bool {
        self.current_batch == self.total_batches
    }
}

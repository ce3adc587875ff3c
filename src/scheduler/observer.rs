//! Progress notifications from the scheduler.

use super::state::ScheduleState;

/// Receives scheduler progress. The scheduler never renders anything itself.
pub trait ScheduleObserver {
    /// Called once before the lead-in pause of a non-empty run.
    fn on_start(&mut self, _state: &ScheduleState) {}

    /// Called when a batch is about to be placed on the clipboard.
    fn on_state_change(&mut self, state: &ScheduleState);

    /// Called at the start of each second of the post-batch wait.
    fn on_tick(&mut self, seconds_remaining: u64);

    /// Called once a batch's wait is over. `is_last` distinguishes
    /// "ready for next batch" from "all batches processed".
    fn on_batch_settled(&mut self, _state: &ScheduleState, _is_last: bool) {}
}

/// Adapts a pair of closures into an observer.
pub struct Callbacks<F, G> {
    on_state_change: F,
    on_tick: G,
}

/// Build an observer from a state-change closure and a tick closure.
pub fn callbacks<F, G>(on_state_change: F, on_tick: G) -> Callbacks<F, G>
where
    F: FnMut(&ScheduleState),
    G: FnMut(u64),
{
    Callbacks {
        on_state_change,
        on_tick,
    }
}

impl<F, G> ScheduleObserver for Callbacks<F, G>
where
    F: FnMut(&ScheduleState),
    G: FnMut(u64),
{
    fn on_state_change(&mut self, state: &ScheduleState) {
        (self.on_state_change)(state)
    }

    fn on_tick(&mut self, seconds_remaining: u64) {
        (self.on_tick)(seconds_remaining)
    }
}

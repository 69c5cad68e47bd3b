//! Fire-and-forget timers.
//!
//! The page never reads a clock; the embedder passes elapsed time into
//! `Page::on_frame`, which drains whatever came due. Superseded timers are
//! consequence-free by design of the tasks themselves (hiding an already
//! hidden toast is a no-op), so nothing here supports cancellation.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerTask {
    ResetForm,
    HideToast,
}

#[derive(Debug, Default)]
pub struct Timers {
    pending: Vec<(Duration, TimerTask)>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_after(&mut self, now: Duration, delay: Duration, task: TimerTask) {
        self.pending.push((now + delay, task));
    }

    /// Remove and return every task whose deadline has passed, in deadline
    /// order (insertion order for ties).
    pub fn take_due(&mut self, now: Duration) -> Vec<TimerTask> {
        self.pending.sort_by_key(|(at, _)| *at);
        let split = self.pending.partition_point(|(at, _)| *at <= now);
        self.pending.drain(..split).map(|(_, task)| task).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

//! Cancelable deadlines for long-press detection.
//!
//! The recognizer arms at most one deadline per session through a
//! [`Scheduler`]. Cancellation is part of the scheduler contract: once
//! [`Scheduler::cancel`] returns, that timer is gone and can never be handed
//! back as due. Ids are never reused, so a late fire for an old id is also
//! distinguishable from the session's current timer.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::collections::BTreeMap;

/// Handle for one scheduled deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Something that can hold deadlines on the recognizer's behalf.
///
/// Times are milliseconds on the same monotonic clock the host stamps
/// pointer events with.
pub trait Scheduler {
    /// Arm a deadline at absolute time `at_ms`.
    fn schedule(&mut self, at_ms: u64) -> TimerId;

    /// Disarm a deadline. Cancelling an unknown or already-fired id is a no-op.
    fn cancel(&mut self, id: TimerId);
}

/// Deterministic in-memory scheduler.
///
/// The owner polls it with [`TimerQueue::pop_due`] (the replay tool, tests)
/// or sleeps until [`TimerQueue::next_deadline`] (the tokio driver).
#[derive(Debug, Default)]
pub struct TimerQueue {
    next_id: u64,
    pending: BTreeMap<TimerId, u64>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Earliest armed deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.values().copied().min()
    }

    /// Remove and return the earliest timer due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(TimerId, u64)> {
        let (id, at) = self
            .pending
            .iter()
            .filter(|(_, at)| **at <= now_ms)
            .min_by_key(|(id, at)| (**at, **id))
            .map(|(id, at)| (*id, *at))?;
        self.pending.remove(&id);
        Some((id, at))
    }

    /// Whether `id` is still armed.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, at_ms: u64) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.insert(id, at_ms);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.remove(&id);
    }
}

//! Bookkeeping for one pointer-down-to-release interaction.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::Serialize;

use crate::doc::ElementId;
use crate::geometry::{Delta, Point};
use crate::timer::TimerId;

/// Where a session is in its press → release lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No contact is down.
    #[default]
    Idle,
    /// Contact is down and has not moved past the slop.
    Pressed,
    /// Contact moved past the slop; every further move is a drag update.
    Dragging,
    /// A classification (or a cancel) has been issued. Terminal.
    Resolved,
}

/// State for one continuous contact.
#[derive(Debug, Clone)]
pub struct InteractionSession {
    /// Element the contact started on.
    pub target_id: ElementId,
    /// Position at pointer-down.
    pub start_position: Point,
    /// Timestamp (ms) at pointer-down.
    pub start_time: u64,
    /// Most recent position seen.
    pub last_position: Point,
    /// Most recent timestamp seen; later events must not go backwards.
    pub last_time: u64,
    state: SessionState,
    moved_beyond_threshold: bool,
    long_press_timer: Option<TimerId>,
}

impl InteractionSession {
    /// Start a session in [`SessionState::Pressed`].
    #[must_use]
    pub fn new(target_id: ElementId, position: Point, time: u64) -> Self {
        Self {
            target_id,
            start_position: position,
            start_time: time,
            last_position: position,
            last_time: time,
            state: SessionState::Pressed,
            moved_beyond_threshold: false,
            long_press_timer: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn moved_beyond_threshold(&self) -> bool {
        self.moved_beyond_threshold
    }

    #[must_use]
    pub fn long_press_timer(&self) -> Option<TimerId> {
        self.long_press_timer
    }

    /// Offset of `position` from the press point.
    #[must_use]
    pub fn displacement(&self, position: Point) -> Delta {
        position.delta_from(self.start_position)
    }

    /// Milliseconds between press and `time`.
    #[must_use]
    pub fn duration(&self, time: u64) -> u64 {
        time.saturating_sub(self.start_time)
    }

    pub(crate) fn arm_timer(&mut self, id: TimerId) {
        self.long_press_timer = Some(id);
    }

    /// Detach the armed timer handle so the caller can cancel it.
    pub(crate) fn take_timer(&mut self) -> Option<TimerId> {
        self.long_press_timer.take()
    }

    /// Latch the moved flag and switch to dragging. Never reverts.
    pub(crate) fn begin_drag(&mut self) {
        self.moved_beyond_threshold = true;
        self.state = SessionState::Dragging;
    }

    /// Latch the moved flag without starting a drag (e.g. a jump seen only at release).
    pub(crate) fn mark_moved(&mut self) {
        self.moved_beyond_threshold = true;
    }

    pub(crate) fn record(&mut self, position: Point, time: u64) {
        self.last_position = position;
        self.last_time = time;
    }

    pub(crate) fn resolve(&mut self) {
        self.state = SessionState::Resolved;
    }
}

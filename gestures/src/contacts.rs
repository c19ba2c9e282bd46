//! Per-contact routing in front of the recognizer.
//!
//! Touch screens report several contacts at once; the recognizer only
//! classifies one. The gate keeps track of which contacts are down, feeds the
//! primary one through, and cancels the session as soon as a second finger
//! lands. Classification stays off until every contact is lifted and a fresh
//! single contact starts.

#[cfg(test)]
#[path = "contacts_test.rs"]
mod contacts_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GestureConfig;
use crate::doc::ElementId;
use crate::error::GestureError;
use crate::geometry::Point;
use crate::recognizer::{Gesture, GestureRecognizer};
use crate::timer::{Scheduler, TimerQueue};

/// Browser pointer / touch identifier.
pub type PointerId = i32;

/// One raw input sample from the host, without a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerInput {
    /// Contact landed on an editable element.
    Down { pointer_id: PointerId, element_id: ElementId, x: f64, y: f64 },
    /// Contact moved.
    Move { pointer_id: PointerId, x: f64, y: f64 },
    /// Contact lifted.
    Up { pointer_id: PointerId, x: f64, y: f64 },
    /// The browser took the contact away (scroll, system gesture, etc.).
    Cancel { pointer_id: PointerId },
}

/// Routes multi-contact input into a single-contact recognizer.
pub struct ContactGate<S: Scheduler = TimerQueue> {
    recognizer: GestureRecognizer<S>,
    live: BTreeSet<PointerId>,
    primary: Option<PointerId>,
}

impl ContactGate<TimerQueue> {
    /// Create a gate around a fresh [`TimerQueue`]-backed recognizer.
    pub fn new(config: GestureConfig) -> Result<Self, GestureError> {
        Ok(Self::with_recognizer(GestureRecognizer::new(config)?))
    }

    /// Fire the primary contact's long-press if it is due at `now_ms`.
    pub fn fire_due(&mut self, now_ms: u64) -> Result<Option<Gesture>, GestureError> {
        self.recognizer.fire_due(now_ms)
    }

    /// Earliest armed long-press deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.recognizer.next_deadline()
    }
}

impl<S: Scheduler> ContactGate<S> {
    #[must_use]
    pub fn with_recognizer(recognizer: GestureRecognizer<S>) -> Self {
        Self { recognizer, live: BTreeSet::new(), primary: None }
    }

    #[must_use]
    pub fn recognizer(&self) -> &GestureRecognizer<S> {
        &self.recognizer
    }

    /// Number of contacts currently down.
    #[must_use]
    pub fn live_contacts(&self) -> usize {
        self.live.len()
    }

    /// Dispatch one input sample observed at `time`.
    pub fn handle(&mut self, input: PointerInput, time: u64) -> Result<Option<Gesture>, GestureError> {
        match input {
            PointerInput::Down { pointer_id, element_id, x, y } => {
                self.down(pointer_id, element_id, Point::new(x, y), time).map(|()| None)
            }
            PointerInput::Move { pointer_id, x, y } => self.moved(pointer_id, Point::new(x, y), time),
            PointerInput::Up { pointer_id, x, y } => self.up(pointer_id, Point::new(x, y), time),
            PointerInput::Cancel { pointer_id } => {
                self.cancel(pointer_id);
                Ok(None)
            }
        }
    }

    pub fn down(
        &mut self,
        pointer_id: PointerId,
        element_id: ElementId,
        position: Point,
        time: u64,
    ) -> Result<(), GestureError> {
        if !self.live.insert(pointer_id) {
            if self.primary == Some(pointer_id) {
                self.primary = None;
                self.recognizer.on_pointer_cancel();
            }
            return Err(GestureError::InvalidState("pointer down for a contact that is already down"));
        }
        if self.live.len() > 1 {
            if let Some(primary) = self.primary.take() {
                debug!(primary, extra = pointer_id, "second contact, cancelling gesture");
                self.recognizer.on_pointer_cancel();
            }
            return Ok(());
        }
        self.primary = Some(pointer_id);
        self.recognizer.on_pointer_down(element_id, position, time)
    }

    pub fn moved(&mut self, pointer_id: PointerId, position: Point, time: u64) -> Result<Option<Gesture>, GestureError> {
        if !self.live.contains(&pointer_id) {
            return Err(GestureError::InvalidState("pointer move for a contact that is not down"));
        }
        if self.primary == Some(pointer_id) {
            return self.recognizer.on_pointer_move(position, time);
        }
        Ok(None)
    }

    pub fn up(&mut self, pointer_id: PointerId, position: Point, time: u64) -> Result<Option<Gesture>, GestureError> {
        if !self.live.remove(&pointer_id) {
            return Err(GestureError::InvalidState("pointer up for a contact that is not down"));
        }
        if self.primary == Some(pointer_id) {
            self.primary = None;
            return self.recognizer.on_pointer_up(position, time);
        }
        Ok(None)
    }

    /// Drop a contact. Unknown contacts are ignored.
    pub fn cancel(&mut self, pointer_id: PointerId) {
        self.live.remove(&pointer_id);
        if self.primary == Some(pointer_id) {
            self.primary = None;
            self.recognizer.on_pointer_cancel();
        }
    }
}

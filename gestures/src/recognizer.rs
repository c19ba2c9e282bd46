//! Tap / long-press / drag classification for a single contact.
//!
//! The recognizer sees one contact at a time. A pointer-down opens an
//! [`InteractionSession`] and arms a long-press deadline; moves either stay
//! inside the slop or promote the session to a drag; release, cancel, or the
//! deadline firing resolve it. Each session yields at most one terminal
//! classification (`Tap`, `LongPress`, or `DragEnd`), plus any number of
//! `DragUpdate`s while dragging.
//!
//! Resolution drops the session outright, so a release after a long-press
//! finds nothing to classify. Long-press and tap are mutually exclusive by
//! construction rather than by flag.

#[cfg(test)]
#[path = "recognizer_test.rs"]
mod recognizer_test;

use serde::Serialize;
use tracing::debug;

use crate::config::GestureConfig;
use crate::doc::ElementId;
use crate::error::GestureError;
use crate::geometry::Point;
use crate::session::{InteractionSession, SessionState};
use crate::timer::{Scheduler, TimerId, TimerQueue};

/// Classification emitted to the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Gesture {
    /// Short, stationary contact. The host selects the element.
    Tap { element_id: ElementId },
    /// Held, stationary contact. The host opens the element's edit panel.
    LongPress { element_id: ElementId },
    /// Incremental movement since the previous update.
    DragUpdate { element_id: ElementId, dx: f64, dy: f64 },
    /// The dragged contact was released.
    DragEnd { element_id: ElementId },
}

impl Gesture {
    #[must_use]
    pub fn element_id(&self) -> ElementId {
        match *self {
            Self::Tap { element_id }
            | Self::LongPress { element_id }
            | Self::DragUpdate { element_id, .. }
            | Self::DragEnd { element_id } => element_id,
        }
    }
}

/// Gesture state machine for one pointing-device contact.
pub struct GestureRecognizer<S: Scheduler = TimerQueue> {
    config: GestureConfig,
    scheduler: S,
    session: Option<InteractionSession>,
}

impl GestureRecognizer<TimerQueue> {
    /// Create a recognizer backed by an in-memory [`TimerQueue`].
    pub fn new(config: GestureConfig) -> Result<Self, GestureError> {
        Self::with_scheduler(config, TimerQueue::new())
    }

    /// Earliest armed long-press deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.scheduler.next_deadline()
    }

    /// Fire the long-press timer if it is due at `now_ms`.
    pub fn fire_due(&mut self, now_ms: u64) -> Result<Option<Gesture>, GestureError> {
        match self.scheduler.pop_due(now_ms) {
            Some((id, _)) => self.on_long_press_timer_fire(id),
            None => Ok(None),
        }
    }
}

impl<S: Scheduler> GestureRecognizer<S> {
    /// Create a recognizer that arms its deadlines through `scheduler`.
    pub fn with_scheduler(config: GestureConfig, scheduler: S) -> Result<Self, GestureError> {
        config.validate()?;
        Ok(Self { config, scheduler, session: None })
    }

    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// State of the active session, or `Idle` when there is none.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.session.as_ref().map_or(SessionState::Idle, InteractionSession::state)
    }

    #[must_use]
    pub fn session(&self) -> Option<&InteractionSession> {
        self.session.as_ref()
    }

    /// Start a session on `element_id` and arm the long-press deadline.
    ///
    /// A down while a session is live is malformed: the live session is
    /// discarded (no classification) and `InvalidState` is returned.
    pub fn on_pointer_down(&mut self, element_id: ElementId, position: Point, time: u64) -> Result<(), GestureError> {
        if self.session.is_some() {
            self.reset();
            return Err(GestureError::InvalidState("pointer down while a session is active"));
        }

        let mut session = InteractionSession::new(element_id, position, time);
        let timer = self.scheduler.schedule(time.saturating_add(self.config.long_press_ms));
        session.arm_timer(timer);
        debug!(%element_id, x = position.x, y = position.y, time, timer = timer.raw(), "gesture pressed");
        self.session = Some(session);
        Ok(())
    }

    /// Track movement. Emits `DragUpdate` once the contact has left the slop.
    pub fn on_pointer_move(&mut self, position: Point, time: u64) -> Result<Option<Gesture>, GestureError> {
        let threshold = self.config.move_threshold_px;
        let Some(session) = self.session.as_mut() else {
            return Ok(None);
        };
        if time < session.last_time {
            self.reset();
            return Err(GestureError::InvalidState("pointer move went back in time"));
        }

        let element_id = session.target_id;
        let gesture = match session.state() {
            SessionState::Dragging => {
                let delta = position.delta_from(session.last_position);
                Some(Gesture::DragUpdate { element_id, dx: delta.dx, dy: delta.dy })
            }
            SessionState::Pressed if session.displacement(position).exceeds(threshold) => {
                session.begin_drag();
                if let Some(timer) = session.take_timer() {
                    self.scheduler.cancel(timer);
                }
                // The first update covers the whole slop so the element tracks the finger exactly.
                let delta = session.displacement(position);
                debug!(%element_id, dx = delta.dx, dy = delta.dy, "gesture drag started");
                Some(Gesture::DragUpdate { element_id, dx: delta.dx, dy: delta.dy })
            }
            _ => None,
        };
        session.record(position, time);
        Ok(gesture)
    }

    /// Release the contact and classify the session.
    pub fn on_pointer_up(&mut self, position: Point, time: u64) -> Result<Option<Gesture>, GestureError> {
        let Some(mut session) = self.session.take() else {
            return Ok(None);
        };
        if let Some(timer) = session.take_timer() {
            self.scheduler.cancel(timer);
        }
        if time < session.last_time {
            return Err(GestureError::InvalidState("pointer up went back in time"));
        }

        let element_id = session.target_id;
        if session.state() == SessionState::Dragging {
            session.resolve();
            debug!(%element_id, "gesture drag ended");
            return Ok(Some(Gesture::DragEnd { element_id }));
        }

        if session.displacement(position).exceeds(self.config.move_threshold_px) {
            session.mark_moved();
        }
        let duration = session.duration(time);
        session.resolve();
        if duration < self.config.tap_max_ms && !session.moved_beyond_threshold() {
            debug!(%element_id, duration, "gesture tap");
            Ok(Some(Gesture::Tap { element_id }))
        } else {
            debug!(%element_id, duration, moved = session.moved_beyond_threshold(), "gesture released without classification");
            Ok(None)
        }
    }

    /// Abort the session without classifying it. Safe to call at any time.
    pub fn on_pointer_cancel(&mut self) {
        if let Some(session) = self.session.as_ref() {
            debug!(element_id = %session.target_id, "gesture cancelled");
        }
        self.reset();
    }

    /// The scheduler reports that `timer` elapsed.
    ///
    /// Only the session's currently armed timer is honoured. Anything else
    /// (no session, the session already dragging, an old id) is rejected
    /// without disturbing the live session.
    pub fn on_long_press_timer_fire(&mut self, timer: TimerId) -> Result<Option<Gesture>, GestureError> {
        let Some(session) = self.session.as_mut() else {
            return Err(GestureError::InvalidState("long-press timer fired with no active session"));
        };
        if session.long_press_timer() != Some(timer) {
            return Err(GestureError::InvalidState("long-press timer is not armed for this session"));
        }

        session.take_timer();
        session.resolve();
        let element_id = session.target_id;
        self.session = None;
        debug!(%element_id, timer = timer.raw(), "gesture long press");
        Ok(Some(Gesture::LongPress { element_id }))
    }

    /// Drop any live session and disarm its deadline.
    fn reset(&mut self) {
        if let Some(mut session) = self.session.take() {
            if let Some(timer) = session.take_timer() {
                self.scheduler.cancel(timer);
            }
            session.resolve();
        }
    }
}

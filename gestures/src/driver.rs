//! Tokio task that owns a recognizer and its long-press clock.
//!
//! DESIGN
//! ======
//! Pointer input and timer expiry are handled on one task, one at a time.
//! The loop `select!`s between the next input sample and a sleep until the
//! armed long-press deadline. A deadline that was cancelled by an earlier
//! sample is simply no longer returned by the queue, so a stale timer can't
//! race a session that already resolved.
//!
//! Event times are milliseconds since the driver was spawned, read from
//! `tokio::time::Instant` so tests can pause and advance the clock.
//!
//! ERROR HANDLING
//! ==============
//! Rejected samples are logged at `warn` and dropped. The task ends when the
//! input sender is dropped or nobody is listening for gestures any more.

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::config::GestureConfig;
use crate::contacts::{ContactGate, PointerInput};
use crate::error::GestureError;
use crate::recognizer::Gesture;

/// Channels and task handle for a running driver.
pub struct GestureDriverHandle {
    /// Feed raw pointer samples here.
    pub input: mpsc::Sender<PointerInput>,
    /// Classifications come out here, in order.
    pub gestures: mpsc::Receiver<Gesture>,
    /// The driver task. Completes once `input` is dropped.
    pub task: JoinHandle<()>,
}

/// Spawn a driver on the current tokio runtime.
pub fn spawn_gesture_driver(config: GestureConfig, capacity: usize) -> Result<GestureDriverHandle, GestureError> {
    if capacity == 0 {
        return Err(GestureError::InvalidConfig("driver channel capacity must be positive".into()));
    }
    let gate = ContactGate::new(config)?;
    let (input_tx, input_rx) = mpsc::channel(capacity);
    let (gesture_tx, gesture_rx) = mpsc::channel(capacity);

    info!(
        long_press_ms = config.long_press_ms,
        move_threshold_px = config.move_threshold_px,
        tap_max_ms = config.tap_max_ms,
        capacity,
        "gesture driver started"
    );

    let origin = Instant::now();
    let task = tokio::spawn(run(gate, origin, input_rx, gesture_tx));
    Ok(GestureDriverHandle { input: input_tx, gestures: gesture_rx, task })
}

async fn run(
    mut gate: ContactGate,
    origin: Instant,
    mut input: mpsc::Receiver<PointerInput>,
    gestures: mpsc::Sender<Gesture>,
) {
    loop {
        let deadline = gate.next_deadline().map(|ms| origin + Duration::from_millis(ms));
        tokio::select! {
            maybe_input = input.recv() => {
                let Some(sample) = maybe_input else {
                    debug!("gesture input closed");
                    break;
                };
                let now = elapsed_ms(origin);
                // A deadline that passed while we were busy still wins over this sample.
                if !forward(gate.fire_due(now), &gestures).await {
                    break;
                }
                if !forward(gate.handle(sample, now), &gestures).await {
                    break;
                }
            }
            () = sleep_until_deadline(deadline) => {
                if !forward(gate.fire_due(elapsed_ms(origin)), &gestures).await {
                    break;
                }
            }
        }
    }
}

async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending::<()>().await,
    }
}

/// Send a classification on. Returns false once the receiver is gone.
async fn forward(result: Result<Option<Gesture>, GestureError>, gestures: &mpsc::Sender<Gesture>) -> bool {
    match result {
        Ok(Some(gesture)) => {
            if gestures.send(gesture).await.is_err() {
                debug!("gesture receiver dropped");
                return false;
            }
            true
        }
        Ok(None) => true,
        Err(e) => {
            warn!(error = %e, "pointer input rejected");
            true
        }
    }
}

fn elapsed_ms(origin: Instant) -> u64 {
    u64::try_from(origin.elapsed().as_millis()).unwrap_or(u64::MAX)
}

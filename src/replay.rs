//! Offline replay of recorded pointer traces.
//!
//! A trace is JSON lines, one timestamped sample per line:
//!
//! ```text
//! {"t":0,"kind":"down","pointer_id":1,"element_id":"…","x":0,"y":0}
//! {"t":50,"kind":"move","pointer_id":1,"x":20,"y":0}
//! {"t":200,"kind":"up","pointer_id":1,"x":20,"y":0}
//! ```
//!
//! Blank lines and `#` comments are skipped. Each emitted gesture is written
//! back out as a JSON line carrying the time it fired at.

#[cfg(test)]
#[path = "replay_test.rs"]
mod replay_test;

use std::io::{BufRead, Write};

use gestures::contacts::{ContactGate, PointerInput};
use gestures::{Gesture, GestureConfig, GestureError};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: invalid sample: {source}")]
    Parse { line: usize, source: serde_json::Error },
    #[error("failed to encode gesture: {0}")]
    Encode(serde_json::Error),
    #[error(transparent)]
    Config(#[from] GestureError),
}

/// One recorded input sample.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TimedInput {
    /// Milliseconds on the trace's monotonic clock.
    pub t: u64,
    #[serde(flatten)]
    pub input: PointerInput,
}

/// One gesture as written to the output.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Emitted {
    pub t: u64,
    #[serde(flatten)]
    pub gesture: Gesture,
}

/// Counters reported after a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Samples fed to the recognizer.
    pub samples: usize,
    /// Samples the recognizer refused as out of sequence.
    pub rejected: usize,
    /// Gestures written out.
    pub gestures: usize,
}

/// Replay every sample from `reader`, writing gestures to `out`.
///
/// A long-press still armed when the trace ends fires at its deadline, as it
/// would have if the finger stayed down.
pub fn replay<R: BufRead, W: Write>(
    config: GestureConfig,
    reader: R,
    out: &mut W,
) -> Result<ReplaySummary, ReplayError> {
    let mut gate = ContactGate::new(config)?;
    let mut summary = ReplaySummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let sample: TimedInput =
            serde_json::from_str(trimmed).map_err(|source| ReplayError::Parse { line: idx + 1, source })?;
        summary.samples += 1;

        if let Some(deadline) = gate.next_deadline().filter(|at| *at <= sample.t) {
            let due = gate.fire_due(deadline);
            record(due, deadline, out, &mut summary)?;
        }
        let handled = gate.handle(sample.input, sample.t);
        record(handled, sample.t, out, &mut summary)?;
    }

    if let Some(deadline) = gate.next_deadline() {
        debug!(deadline, "trace ended with a press still held");
        let due = gate.fire_due(deadline);
        record(due, deadline, out, &mut summary)?;
    }
    out.flush()?;
    Ok(summary)
}

fn record<W: Write>(
    result: Result<Option<Gesture>, GestureError>,
    t: u64,
    out: &mut W,
    summary: &mut ReplaySummary,
) -> Result<(), ReplayError> {
    match result {
        Ok(Some(gesture)) => {
            let line = serde_json::to_string(&Emitted { t, gesture }).map_err(ReplayError::Encode)?;
            writeln!(out, "{line}")?;
            summary.gestures += 1;
        }
        Ok(None) => {}
        Err(e) => {
            warn!(t, error = %e, "sample rejected");
            summary.rejected += 1;
        }
    }
    Ok(())
}

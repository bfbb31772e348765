//! Queue history recording.
//!
//! Engines report each scheduling decision to a `SnapshotRecorder`,
//! which accumulates `QueueSnapshot` rows in chronological order. The
//! recorder is a passive sink: it never feeds back into engine state.

use super::EPSILON;
use crate::models::QueueSnapshot;

/// Chronological sink for queue snapshots.
#[derive(Debug, Clone, Default)]
pub struct SnapshotRecorder {
    history: Vec<QueueSnapshot>,
}

impl SnapshotRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the queue state at one scheduling decision.
    ///
    /// `time` must be non-decreasing across calls.
    pub fn record(&mut self, time: f64, executing: Option<String>, queue: Vec<String>) {
        debug_assert!(
            self.history.last().map_or(true, |s| s.time <= time + EPSILON),
            "snapshot times must be non-decreasing"
        );
        self.history.push(QueueSnapshot::new(time, executing, queue));
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Consumes the recorder and returns the history.
    pub fn into_history(self) -> Vec<QueueSnapshot> {
        self.history
    }
}

//! Ready-queue snapshots.
//!
//! One `QueueSnapshot` is recorded per scheduling decision: each time
//! a process is selected to run, or at each Round Robin quantum
//! boundary. Idle gaps record nothing — no decision is made there.

use serde::{Deserialize, Serialize};

/// Ready-queue state captured at one scheduling decision.
///
/// `queue` order is discipline-defined: arrival order for FCFS, burst
/// order for SJF/SRTF, rotation order for Round Robin. It is never
/// re-sorted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueSnapshot {
    /// Decision time.
    pub time: f64,
    /// Process occupying the CPU at this decision, if any.
    pub executing: Option<String>,
    /// Names of ready-but-not-running processes, in dispatch order.
    pub queue: Vec<String>,
}

impl QueueSnapshot {
    /// Creates a new snapshot.
    pub fn new(time: f64, executing: Option<String>, queue: Vec<String>) -> Self {
        Self {
            time,
            executing,
            queue,
        }
    }

    /// Number of ready processes at this decision.
    #[inline]
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }
}

//! Execution output models.
//!
//! Engines emit `ExecutionSlice` rows as they run; the metrics layer
//! folds them into `CompletedProcess` summaries and packs everything
//! into a `SimulationResult`.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::QueueSnapshot;

/// One contiguous span during which a single process occupies the CPU.
///
/// FCFS and non-preemptive SJF emit exactly one slice per process;
/// SRTF and Round Robin may split a process across many slices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process name.
    pub name: String,
    /// Slice start time.
    pub start: f64,
    /// Slice end time.
    pub finish: f64,
    /// Burst time still owed after this slice. Exactly zero when the
    /// process completed in this slice.
    pub remaining_after: f64,
}

impl ExecutionSlice {
    /// Creates a new slice.
    pub fn new(name: impl Into<String>, start: f64, finish: f64, remaining_after: f64) -> Self {
        Self {
            name: name.into(),
            start,
            finish,
            remaining_after,
        }
    }

    /// Slice duration (finish - start).
    #[inline]
    pub fn duration(&self) -> f64 {
        self.finish - self.start
    }

    /// Whether the process completed in this slice.
    #[inline]
    pub fn is_final(&self) -> bool {
        self.remaining_after == 0.0
    }
}

/// Per-process timing summary, folded from that process's slices.
///
/// Invariants for valid input: `turnaround == finish - arrival`,
/// `waiting == turnaround - burst`, and both are non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// Process name.
    pub name: String,
    /// Arrival time from the input.
    pub arrival: f64,
    /// Total burst time from the input.
    pub burst: f64,
    /// First time the process ran (first slice's start).
    pub start: f64,
    /// Completion time (last slice's finish).
    pub finish: f64,
    /// Time spent ready but not running.
    pub waiting: f64,
    /// Time from arrival to completion.
    pub turnaround: f64,
}

impl CompletedProcess {
    /// Response time: delay from arrival to first execution.
    #[inline]
    pub fn response(&self) -> f64 {
        self.start - self.arrival
    }
}

/// Complete outcome of one simulation run.
///
/// Both the raw per-slice view and the folded per-process view are
/// always present, alongside the chronological queue history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Per-process summaries, ordered by (start, arrival, name).
    pub completed: Vec<CompletedProcess>,
    /// Execution slices in chronological order.
    pub slices: Vec<ExecutionSlice>,
    /// Ready-queue state at each scheduling decision.
    pub queue_history: Vec<QueueSnapshot>,
    /// Mean waiting time across completed processes (0 when empty).
    pub avg_waiting: f64,
    /// Mean turnaround time across completed processes (0 when empty).
    pub avg_turnaround: f64,
}

impl SimulationResult {
    /// Makespan: latest finish time across all slices. Zero for an
    /// empty run.
    pub fn makespan(&self) -> f64 {
        self.slices.iter().map(|s| s.finish).fold(0.0, f64::max)
    }

    /// Finds the summary for a given process.
    pub fn completed_for(&self, name: &str) -> Option<&CompletedProcess> {
        self.completed.iter().find(|c| c.name == name)
    }

    /// Returns all slices of a given process, in chronological order.
    pub fn slices_for(&self, name: &str) -> Vec<&ExecutionSlice> {
        self.slices.iter().filter(|s| s.name == name).collect()
    }

    /// Number of completed processes.
    pub fn process_count(&self) -> usize {
        self.completed.len()
    }

    /// Whether the run simulated no processes.
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }
}

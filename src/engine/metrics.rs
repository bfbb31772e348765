//! Per-process metrics and run-level aggregates.
//!
//! Engines emit raw `ExecutionSlice` rows; this module folds them into
//! `CompletedProcess` summaries and computes the run-level means. The
//! fold is the single place timing formulas live, so a process split
//! across many slices reconciles to the same numbers as one executed
//! in a single piece.
//!
//! # Definitions
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | finish - arrival |
//! | Waiting | turnaround - burst |
//! | Avg Waiting | mean over completed processes |
//! | Avg Turnaround | mean over completed processes |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use std::collections::HashMap;

use super::recorder::SnapshotRecorder;
use super::EPSILON;
use crate::models::{CompletedProcess, ExecutionSlice, ProcessSpec, SimulationResult};

/// Folds chronological slices into per-process summaries.
///
/// `start` is the first slice's start, `finish` the last slice's
/// finish; waiting and turnaround derive from the process's original
/// arrival and total burst. Output is ordered by (start, arrival,
/// name), independent of completion order.
pub fn fold_slices(specs: &[ProcessSpec], slices: &[ExecutionSlice]) -> Vec<CompletedProcess> {
    let mut first_start: HashMap<&str, f64> = HashMap::new();
    let mut last_finish: HashMap<&str, f64> = HashMap::new();

    for slice in slices {
        first_start.entry(slice.name.as_str()).or_insert(slice.start);
        last_finish.insert(slice.name.as_str(), slice.finish);
    }

    let mut completed: Vec<CompletedProcess> = specs
        .iter()
        .filter_map(|spec| {
            let start = *first_start.get(spec.name.as_str())?;
            let finish = *last_finish.get(spec.name.as_str())?;
            let turnaround = finish - spec.arrival;
            Some(CompletedProcess {
                name: spec.name.clone(),
                arrival: spec.arrival,
                burst: spec.burst,
                start,
                finish,
                waiting: zero_clamped(turnaround - spec.burst),
                turnaround,
            })
        })
        .collect();

    completed.sort_by(|a, b| {
        a.start
            .total_cmp(&b.start)
            .then_with(|| a.arrival.total_cmp(&b.arrival))
            .then_with(|| a.name.cmp(&b.name))
    });
    completed
}

/// Run-level means of waiting and turnaround time.
///
/// Aggregates only — per-process fields are owned by the fold.
/// Returns `(0.0, 0.0)` for an empty sequence.
pub fn averages(completed: &[CompletedProcess]) -> (f64, f64) {
    if completed.is_empty() {
        return (0.0, 0.0);
    }
    let n = completed.len() as f64;
    let waiting: f64 = completed.iter().map(|c| c.waiting).sum();
    let turnaround: f64 = completed.iter().map(|c| c.turnaround).sum();
    (waiting / n, turnaround / n)
}

/// Packs engine output into a `SimulationResult`.
pub(crate) fn assemble(
    specs: &[ProcessSpec],
    slices: Vec<ExecutionSlice>,
    recorder: SnapshotRecorder,
) -> SimulationResult {
    let completed = fold_slices(specs, &slices);
    let (avg_waiting, avg_turnaround) = averages(&completed);
    SimulationResult {
        completed,
        slices,
        queue_history: recorder.into_history(),
        avg_waiting,
        avg_turnaround,
    }
}

/// Collapses sub-epsilon rounding residue to exactly zero.
fn zero_clamped(value: f64) -> f64 {
    if value.abs() < EPSILON {
        0.0
    } else {
        value
    }
}

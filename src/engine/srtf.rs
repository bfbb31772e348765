//! Shortest Remaining Time First scheduling (preemptive SJF).
//!
//! # Algorithm
//!
//! Event-driven: the ready structure is a binary min-heap keyed by
//! `(remaining burst, arrival, admission order)`. Each step admits all
//! arrived processes, pops the least entry, and runs it until either
//! it finishes or the next arrival occurs — whichever comes first —
//! so no per-unit-time polling is needed. A preempted process re-enters
//! the heap with its reduced remaining burst and its original
//! admission number.
//!
//! Each pop emits exactly one slice and one queue snapshot; adjacent
//! slices of the same process are not merged, keeping slices 1:1 with
//! scheduling decisions.
//!
//! # Complexity
//! O(n log n) over the whole run: every process is pushed and popped
//! at most once per arrival event.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2
//! (preemptive variant)

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::recorder::SnapshotRecorder;
use super::{metrics, Engine, EPSILON};
use crate::models::{ExecutionSlice, ProcessSpec, SimulationResult};

/// Shortest Remaining Time First (preemptive).
#[derive(Debug, Clone, Copy)]
pub struct Srtf;

/// Ready-structure entry for one admitted process.
#[derive(Debug, Clone)]
struct ReadyEntry {
    /// Index into the input slice.
    idx: usize,
    /// Burst time still owed.
    remaining: f64,
    /// Arrival time, for tie-breaking.
    arrival: f64,
    /// Admission number; stable across preemption re-inserts, so a
    /// preempted process outranks a later admission on a full tie.
    seq: usize,
}

impl ReadyEntry {
    /// Dispatch order: least remaining first, then earliest arrival,
    /// then earliest admission.
    fn dispatch_cmp(&self, other: &Self) -> Ordering {
        self.remaining
            .total_cmp(&other.remaining)
            .then_with(|| self.arrival.total_cmp(&other.arrival))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialEq for ReadyEntry {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for ReadyEntry {}

impl Ord for ReadyEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse so the least entry pops first.
        other.dispatch_cmp(self)
    }
}

impl PartialOrd for ReadyEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Engine for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn run(&self, processes: &[ProcessSpec]) -> SimulationResult {
        // Admission order: arrival, ties by submission order.
        let mut pending: Vec<usize> = (0..processes.len()).collect();
        pending.sort_by(|&a, &b| processes[a].arrival.total_cmp(&processes[b].arrival));

        let mut ready: BinaryHeap<ReadyEntry> = BinaryHeap::new();
        let mut slices = Vec::new();
        let mut recorder = SnapshotRecorder::new();
        let mut clock = 0.0_f64;
        let mut cursor = 0;
        let mut admissions = 0;

        while cursor < pending.len() || !ready.is_empty() {
            // Admit everything that has arrived by now.
            while cursor < pending.len() {
                let idx = pending[cursor];
                if processes[idx].arrival > clock + EPSILON {
                    break;
                }
                ready.push(ReadyEntry {
                    idx,
                    remaining: processes[idx].burst,
                    arrival: processes[idx].arrival,
                    seq: admissions,
                });
                admissions += 1;
                cursor += 1;
            }

            let Some(mut entry) = ready.pop() else {
                // Idle: jump straight to the next arrival.
                clock = processes[pending[cursor]].arrival;
                continue;
            };

            let process = &processes[entry.idx];
            recorder.record(
                clock,
                Some(process.name.clone()),
                queued_names(&ready, processes),
            );

            // Run until completion or until a new arrival could preempt.
            let next_arrival = pending
                .get(cursor)
                .map_or(f64::INFINITY, |&idx| processes[idx].arrival);
            let run_time = entry.remaining.min(next_arrival - clock);

            let start = clock;
            clock += run_time;
            entry.remaining -= run_time;
            if entry.remaining.abs() <= EPSILON {
                entry.remaining = 0.0;
            }

            slices.push(ExecutionSlice::new(
                &process.name,
                start,
                clock,
                entry.remaining,
            ));

            if entry.remaining > 0.0 {
                ready.push(entry);
            }
        }

        metrics::assemble(processes, slices, recorder)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Heap contents in dispatch order, for snapshots.
fn queued_names(ready: &BinaryHeap<ReadyEntry>, processes: &[ProcessSpec]) -> Vec<String> {
    let mut entries: Vec<&ReadyEntry> = ready.iter().collect();
    entries.sort_by(|a, b| a.dispatch_cmp(b));
    entries
        .iter()
        .map(|e| processes[e.idx].name.clone())
        .collect()
}

//! Round Robin scheduling.
//!
//! # Algorithm
//!
//! Fixed time quantum, FIFO rotation. Each iteration runs the front of
//! the ready queue for at most one quantum, then requeues it behind any
//! processes that arrived during the slice — so a process arriving
//! exactly at the slice boundary goes ahead of the just-preempted one.
//! An empty ready queue jumps the clock straight to the next arrival
//! instead of polling time unit by unit.
//!
//! One slice and one snapshot per quantum grant; the metrics fold
//! reconciles the fragments into per-process totals against the
//! original burst.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use super::recorder::SnapshotRecorder;
use super::{metrics, Engine, EPSILON};
use crate::models::{ExecutionSlice, ProcessSpec, SimulationResult};
use crate::validation::ValidationError;

/// Round Robin (preemptive, fixed quantum).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRobin {
    quantum: f64,
}

/// A process admitted to the rotation, with its owed burst.
#[derive(Debug, Clone, Copy)]
struct Rotation {
    idx: usize,
    remaining: f64,
}

impl RoundRobin {
    /// Creates a Round Robin engine.
    ///
    /// Fails with [`ValidationError::InvalidQuantum`] unless `quantum`
    /// is finite and positive.
    pub fn new(quantum: f64) -> Result<Self, ValidationError> {
        if !quantum.is_finite() || quantum <= 0.0 {
            return Err(ValidationError::InvalidQuantum { quantum });
        }
        Ok(Self { quantum })
    }

    /// The configured time quantum.
    #[inline]
    pub fn quantum(&self) -> f64 {
        self.quantum
    }
}

impl Engine for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&self, processes: &[ProcessSpec]) -> SimulationResult {
        // Admission order: arrival, ties by submission order.
        let mut pending: Vec<usize> = (0..processes.len()).collect();
        pending.sort_by(|&a, &b| processes[a].arrival.total_cmp(&processes[b].arrival));

        let mut ready: VecDeque<Rotation> = VecDeque::new();
        let mut slices = Vec::new();
        let mut recorder = SnapshotRecorder::new();
        let mut clock = 0.0_f64;
        let mut cursor = 0;

        let admit = |clock: f64, cursor: &mut usize, ready: &mut VecDeque<Rotation>| {
            while *cursor < pending.len() {
                let idx = pending[*cursor];
                if processes[idx].arrival > clock + EPSILON {
                    break;
                }
                ready.push_back(Rotation {
                    idx,
                    remaining: processes[idx].burst,
                });
                *cursor += 1;
            }
        };

        loop {
            admit(clock, &mut cursor, &mut ready);

            let Some(mut current) = ready.pop_front() else {
                if cursor >= pending.len() {
                    break;
                }
                // Idle: jump straight to the next arrival.
                clock = processes[pending[cursor]].arrival;
                continue;
            };

            let process = &processes[current.idx];
            let exec = current.remaining.min(self.quantum);
            let start = clock;
            clock += exec;
            current.remaining -= exec;
            if current.remaining.abs() <= EPSILON {
                current.remaining = 0.0;
            }

            slices.push(ExecutionSlice::new(&process.name, start, clock, current.remaining));

            // Arrivals during the slice enqueue ahead of the requeue.
            admit(clock, &mut cursor, &mut ready);
            if current.remaining > 0.0 {
                ready.push_back(current);
            }

            recorder.record(
                clock,
                Some(process.name.clone()),
                ready.iter().map(|r| processes[r.idx].name.clone()).collect(),
            );
        }

        metrics::assemble(processes, slices, recorder)
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}

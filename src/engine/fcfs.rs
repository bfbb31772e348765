//! First-Come First-Served scheduling.
//!
//! # Algorithm
//!
//! Processes run to completion in arrival order; ties on arrival keep
//! submission order. When nothing has arrived yet the CPU idles and
//! the next process starts at its own arrival time. One slice and one
//! queue snapshot per process.
//!
//! # Complexity
//! O(n log n) for the arrival sort; snapshot construction is O(n^2)
//! worst case.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use super::recorder::SnapshotRecorder;
use super::{metrics, Engine, EPSILON};
use crate::models::{ExecutionSlice, ProcessSpec, SimulationResult};

/// First-Come First-Served (non-preemptive).
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl Engine for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, processes: &[ProcessSpec]) -> SimulationResult {
        // Stable sort: equal arrivals keep submission order.
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by(|&a, &b| processes[a].arrival.total_cmp(&processes[b].arrival));

        let mut slices = Vec::with_capacity(processes.len());
        let mut recorder = SnapshotRecorder::new();
        let mut clock = 0.0_f64;

        for (position, &idx) in order.iter().enumerate() {
            let process = &processes[idx];
            let start = clock.max(process.arrival);
            let finish = start + process.burst;
            clock = finish;

            slices.push(ExecutionSlice::new(&process.name, start, finish, 0.0));

            // Arrived-but-not-yet-served processes, in service order.
            let waiting: Vec<String> = order[position + 1..]
                .iter()
                .map(|&next| &processes[next])
                .filter(|p| p.arrival <= finish + EPSILON)
                .map(|p| p.name.clone())
                .collect();
            recorder.record(finish, Some(process.name.clone()), waiting);
        }

        metrics::assemble(processes, slices, recorder)
    }

    fn description(&self) -> &'static str {
        "First-Come First-Served"
    }
}

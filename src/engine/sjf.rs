//! Shortest Job First scheduling (non-preemptive).
//!
//! # Algorithm
//!
//! At each decision point, run the available process with the smallest
//! burst to completion. Ties break by earlier arrival, then by name,
//! so the order is fully deterministic. When no process has arrived
//! yet, the clock jumps to the earliest remaining arrival; the jump
//! itself leaves no slice or snapshot.
//!
//! Once a process starts it is never preempted, even if a shorter one
//! arrives mid-run.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use std::cmp::Ordering;

use super::recorder::SnapshotRecorder;
use super::{metrics, Engine, EPSILON};
use crate::models::{ExecutionSlice, ProcessSpec, SimulationResult};

/// Shortest Job First (non-preemptive).
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

/// Service order: shortest burst first, ties by arrival, then name.
fn service_cmp(a: &ProcessSpec, b: &ProcessSpec) -> Ordering {
    a.burst
        .total_cmp(&b.burst)
        .then_with(|| a.arrival.total_cmp(&b.arrival))
        .then_with(|| a.name.cmp(&b.name))
}

impl Engine for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn run(&self, processes: &[ProcessSpec]) -> SimulationResult {
        let mut remaining: Vec<usize> = (0..processes.len()).collect();
        let mut slices = Vec::with_capacity(processes.len());
        let mut recorder = SnapshotRecorder::new();
        let mut clock = 0.0_f64;

        while !remaining.is_empty() {
            let next = remaining
                .iter()
                .copied()
                .filter(|&i| processes[i].arrival <= clock + EPSILON)
                .min_by(|&a, &b| service_cmp(&processes[a], &processes[b]));

            let Some(chosen) = next else {
                // CPU idle: jump to the earliest remaining arrival.
                clock = remaining
                    .iter()
                    .map(|&i| processes[i].arrival)
                    .fold(f64::INFINITY, f64::min);
                continue;
            };

            let process = &processes[chosen];
            let start = clock.max(process.arrival);
            let finish = start + process.burst;
            clock = finish;
            remaining.retain(|&i| i != chosen);

            slices.push(ExecutionSlice::new(&process.name, start, finish, 0.0));

            // Processes waiting at the finish, shortest burst first.
            let mut queued: Vec<usize> = remaining
                .iter()
                .copied()
                .filter(|&i| processes[i].arrival <= finish + EPSILON)
                .collect();
            queued.sort_by(|&a, &b| service_cmp(&processes[a], &processes[b]));
            recorder.record(
                finish,
                Some(process.name.clone()),
                queued.iter().map(|&i| processes[i].name.clone()).collect(),
            );
        }

        metrics::assemble(processes, slices, recorder)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs(entries: &[(&str, f64, f64)]) -> Vec<ProcessSpec> {
        entries
            .iter()
            .map(|&(name, arrival, burst)| ProcessSpec::new(name, arrival, burst))
            .collect()
    }

    #[test]
    fn test_sjf_picks_shortest_available() {
        let input = specs(&[("A", 0.0, 7.0), ("B", 2.0, 4.0), ("C", 4.0, 1.0)]);
        let result = Sjf.run(&input);

        // A(0-7), then C (shorter) at 7-8, then B at 8-12.
        let names: Vec<&str> = result.slices.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "B"]);

        assert!((result.completed_for("A").unwrap().waiting - 0.0).abs() < 1e-10);
        assert!((result.completed_for("C").unwrap().waiting - 3.0).abs() < 1e-10);
        assert!((result.completed_for("B").unwrap().waiting - 6.0).abs() < 1e-10);
        assert!((result.avg_waiting - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_never_preempts() {
        // B is much shorter but arrives while A is running.
        let input = specs(&[("A", 0.0, 10.0), ("B", 1.0, 1.0)]);
        let result = Sjf.run(&input);

        assert_eq!(result.slices.len(), 2);
        let a = result.completed_for("A").unwrap();
        assert!((a.finish - 10.0).abs() < 1e-10);
        let b = result.completed_for("B").unwrap();
        assert!((b.start - 10.0).abs() < 1e-10);
        assert!((b.waiting - 9.0).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_tie_breaks_by_arrival_then_name() {
        // Equal bursts: earlier arrival wins.
        let input = specs(&[("A", 1.0, 3.0), ("B", 0.0, 3.0)]);
        let result = Sjf.run(&input);
        assert_eq!(result.slices[0].name, "B");

        // Equal burst and arrival: name order wins, not submission order.
        let input = specs(&[("Y", 0.0, 3.0), ("X", 0.0, 3.0)]);
        let result = Sjf.run(&input);
        assert_eq!(result.slices[0].name, "X");
    }

    #[test]
    fn test_sjf_idle_jump() {
        let input = specs(&[("A", 0.0, 1.0), ("B", 5.0, 2.0)]);
        let result = Sjf.run(&input);

        let b = result.completed_for("B").unwrap();
        assert!((b.start - 5.0).abs() < 1e-10);
        assert!((b.waiting - 0.0).abs() < 1e-10);
        assert_eq!(result.queue_history.len(), 2);
    }

    #[test]
    fn test_sjf_starts_at_first_arrival() {
        // Nothing arrives at t=0.
        let input = specs(&[("A", 3.0, 2.0)]);
        let result = Sjf.run(&input);
        assert!((result.slices[0].start - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_snapshot_queue_in_burst_order() {
        let input = specs(&[("A", 0.0, 7.0), ("B", 2.0, 4.0), ("C", 4.0, 1.0)]);
        let result = Sjf.run(&input);

        let first = &result.queue_history[0];
        assert_eq!(first.time, 7.0);
        assert_eq!(first.executing.as_deref(), Some("A"));
        // C (burst 1) ahead of B (burst 4).
        assert_eq!(first.queue, vec!["C".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_sjf_completed_ordered_by_start() {
        let input = specs(&[("A", 0.0, 7.0), ("B", 2.0, 4.0), ("C", 4.0, 1.0)]);
        let result = Sjf.run(&input);
        let names: Vec<&str> = result.completed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "B"]);
    }

    #[test]
    fn test_sjf_empty_input() {
        let result = Sjf.run(&[]);
        assert!(result.is_empty());
        assert_eq!(result.avg_turnaround, 0.0);
    }
}

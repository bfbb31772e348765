//! Scheduling engines and the simulation entry point.
//!
//! Each discipline is an [`Engine`]: a pure function from a validated
//! process list to a [`SimulationResult`]. [`simulate`] dispatches on a
//! [`Discipline`] selector; [`SimulationRequest`] is the typed form of
//! a full wire request (descriptors + algorithm + quantum) that
//! validates everything before running.
//!
//! # Usage
//!
//! ```
//! use sched_sim::engine::{simulate, Discipline, SimParams};
//! use sched_sim::models::ProcessSpec;
//!
//! let processes = vec![
//!     ProcessSpec::new("A", 0.0, 5.0),
//!     ProcessSpec::new("B", 1.0, 3.0),
//! ];
//!
//! let params = SimParams::new().with_quantum(2.0);
//! let result = simulate(Discipline::RoundRobin, &processes, &params).unwrap();
//! assert_eq!(result.process_count(), 2);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod metrics;
mod recorder;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::Fcfs;
pub use metrics::{averages, fold_slices};
pub use recorder::SnapshotRecorder;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{ProcessSpec, RawProcess, SimulationResult};
use crate::validation::{self, ValidationError};

/// Tolerance for time comparisons, absorbing rational rounding.
pub const EPSILON: f64 = 1e-9;

/// A scheduling discipline: a pure function over a validated process
/// list.
///
/// Implementors must not mutate or retain the input; every run works
/// on private copies, so repeated runs are bit-identical.
pub trait Engine: Send + Sync + fmt::Debug {
    /// Discipline name (e.g., "FCFS", "SRTF").
    fn name(&self) -> &'static str;

    /// Simulates the given processes, returning slices, per-process
    /// metrics, and the queue history.
    fn run(&self, processes: &[ProcessSpec]) -> SimulationResult;

    /// Human-readable discipline description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Discipline selector, matching the wire selectors `"FCFS"`, `"SJF"`,
/// `"SRTF"`, and `"RR"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    /// First-Come First-Served (non-preemptive).
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest Job First (non-preemptive).
    #[serde(rename = "SJF")]
    Sjf,
    /// Shortest Remaining Time First (preemptive SJF).
    #[serde(rename = "SRTF")]
    Srtf,
    /// Round Robin (preemptive, fixed quantum).
    #[serde(rename = "RR")]
    RoundRobin,
}

impl Discipline {
    /// All disciplines, in wire-selector order.
    pub const ALL: [Discipline; 4] = [
        Discipline::Fcfs,
        Discipline::Sjf,
        Discipline::Srtf,
        Discipline::RoundRobin,
    ];

    /// The wire selector for this discipline.
    pub fn selector(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "FCFS",
            Discipline::Sjf => "SJF",
            Discipline::Srtf => "SRTF",
            Discipline::RoundRobin => "RR",
        }
    }

    /// Whether this discipline requires a time quantum.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, Discipline::RoundRobin)
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for Discipline {
    type Err = ValidationError;

    /// Parses a wire selector, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Discipline::Fcfs),
            "SJF" => Ok(Discipline::Sjf),
            "SRTF" => Ok(Discipline::Srtf),
            "RR" => Ok(Discipline::RoundRobin),
            _ => Err(ValidationError::UnknownDiscipline {
                selector: s.to_string(),
            }),
        }
    }
}

/// Per-call simulation parameters.
///
/// Only Round Robin consumes any: its time quantum. There is no core
/// default quantum; the caller owns defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    /// Round Robin time quantum.
    #[serde(default)]
    pub quantum: Option<f64>,
}

impl SimParams {
    /// Creates empty parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: f64) -> Self {
        self.quantum = Some(quantum);
        self
    }
}

/// Runs one simulation of `processes` under `discipline`.
///
/// The only failure modes are parameter errors: Round Robin selected
/// without a quantum, or with a non-positive one. Input descriptors
/// are expected to have passed [`crate::validation::validate`];
/// use [`SimulationRequest`] to do both in one step.
pub fn simulate(
    discipline: Discipline,
    processes: &[ProcessSpec],
    params: &SimParams,
) -> Result<SimulationResult, ValidationError> {
    match discipline {
        Discipline::Fcfs => Ok(Fcfs.run(processes)),
        Discipline::Sjf => Ok(Sjf.run(processes)),
        Discipline::Srtf => Ok(Srtf.run(processes)),
        Discipline::RoundRobin => {
            let quantum = params.quantum.ok_or(ValidationError::MissingQuantum)?;
            Ok(RoundRobin::new(quantum)?.run(processes))
        }
    }
}

/// A full simulation request: the typed form of the wire payload
/// `{"algorithm": ..., "quantum": ..., "processes": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Selected discipline.
    #[serde(rename = "algorithm")]
    pub discipline: Discipline,
    /// Round Robin time quantum.
    #[serde(default)]
    pub quantum: Option<f64>,
    /// Raw process descriptors.
    #[serde(default)]
    pub processes: Vec<RawProcess>,
}

impl SimulationRequest {
    /// Creates a request with no quantum and no processes.
    pub fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            quantum: None,
            processes: Vec::new(),
        }
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: f64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Adds a process descriptor.
    pub fn with_process(mut self, process: RawProcess) -> Self {
        self.processes.push(process);
        self
    }

    /// Validates the whole request, then simulates.
    ///
    /// Collects every validation problem — descriptor errors and
    /// quantum errors together — rather than stopping at the first.
    pub fn run(&self) -> Result<SimulationResult, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let specs = match validation::validate(&self.processes) {
            Ok(specs) => specs,
            Err(descriptor_errors) => {
                errors.extend(descriptor_errors);
                Vec::new()
            }
        };

        let params = SimParams {
            quantum: self.quantum,
        };
        if self.discipline.requires_quantum() {
            match self.quantum {
                None => errors.push(ValidationError::MissingQuantum),
                Some(q) if !q.is_finite() || q <= 0.0 => {
                    errors.push(ValidationError::InvalidQuantum { quantum: q })
                }
                Some(_) => {}
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        simulate(self.discipline, &specs, &params).map_err(|e| vec![e])
    }
}


// Cross-engine invariants over generated workloads. Tolerances are
// wider than EPSILON because slice times accumulate float error.
#[cfg(test)]
mod invariant_tests {
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn check_invariants(
        processes: &[ProcessSpec],
        result: &SimulationResult,
        quantum: Option<f64>,
    ) {
        assert_eq!(result.completed.len(), processes.len());

        for spec in processes {
            let completed = result.completed_for(&spec.name).unwrap();
            assert_eq!(completed.turnaround, completed.finish - completed.arrival);
            assert!(completed.waiting >= 0.0);
            assert!(completed.turnaround >= completed.burst - TOLERANCE);
            assert!(
                (completed.waiting - (completed.turnaround - completed.burst)).abs() < TOLERANCE
            );
            assert!(completed.start >= spec.arrival - TOLERANCE);

            // Slice durations conserve the burst; fragments never overlap.
            let slices = result.slices_for(&spec.name);
            let total: f64 = slices.iter().map(|s| s.duration()).sum();
            assert!((total - spec.burst).abs() < TOLERANCE, "{}", spec.name);
            for pair in slices.windows(2) {
                assert!(pair[0].finish <= pair[1].start + TOLERANCE);
            }
            if let Some(q) = quantum {
                for slice in &slices {
                    assert!(slice.duration() <= q + TOLERANCE);
                }
            }
        }

        let times: Vec<f64> = result.queue_history.iter().map(|s| s.time).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }

    fn workloads() -> impl Strategy<Value = Vec<ProcessSpec>> {
        prop::collection::vec((0.0f64..50.0, 0.0f64..20.0), 0..8).prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (arrival, burst))| ProcessSpec::new(format!("P{i}"), arrival, burst))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_nonpreemptive_engines_hold_invariants(processes in workloads()) {
            for discipline in [Discipline::Fcfs, Discipline::Sjf, Discipline::Srtf] {
                let result = simulate(discipline, &processes, &SimParams::new()).unwrap();
                check_invariants(&processes, &result, None);
            }
        }

        #[test]
        fn prop_round_robin_holds_invariants(
            processes in workloads(),
            quantum in 0.5f64..5.0,
        ) {
            let params = SimParams::new().with_quantum(quantum);
            let result = simulate(Discipline::RoundRobin, &processes, &params).unwrap();
            check_invariants(&processes, &result, Some(quantum));
        }

        #[test]
        fn prop_fcfs_and_sjf_emit_one_slice_each(processes in workloads()) {
            for discipline in [Discipline::Fcfs, Discipline::Sjf] {
                let result = simulate(discipline, &processes, &SimParams::new()).unwrap();
                prop_assert_eq!(result.slices.len(), processes.len());
                prop_assert!(result.slices.iter().all(|s| s.is_final()));
            }
        }
    }

    #[test]
    fn test_seeded_workload_conserves_total_burst() {
        let mut rng = SmallRng::seed_from_u64(42);
        let processes: Vec<ProcessSpec> = (0..20)
            .map(|i| {
                ProcessSpec::new(
                    format!("P{i}"),
                    rng.random_range(0.0..30.0),
                    rng.random_range(0.0..10.0),
                )
            })
            .collect();
        let total_burst: f64 = processes.iter().map(|p| p.burst).sum();
        let params = SimParams::new().with_quantum(1.5);

        for discipline in Discipline::ALL {
            let result = simulate(discipline, &processes, &params).unwrap();
            let total_sliced: f64 = result.slices.iter().map(|s| s.duration()).sum();
            assert!((total_sliced - total_burst).abs() < TOLERANCE, "{discipline}");
            check_invariants(&processes, &result, None);
        }
    }
}

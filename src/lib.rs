//! CPU scheduling simulator over logical time.
//!
//! Simulates process workloads under four classic disciplines — FCFS,
//! SJF, SRTF, and Round Robin — and reports per-process timing metrics
//! (start, finish, waiting, turnaround) together with a chronological
//! queue history suitable for visualization. Time is a non-negative
//! rational (`f64`); nothing here runs against a wall clock.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessSpec`, `ExecutionSlice`,
//!   `CompletedProcess`, `QueueSnapshot`, `SimulationResult`
//! - **`engine`**: The discipline engines and the `simulate` entry point
//! - **`validation`**: Input integrity checks (missing fields, negative
//!   times, duplicate names, quantum bounds)
//!
//! # Quick Start
//!
//! ```
//! use sched_sim::engine::{simulate, Discipline, SimParams};
//! use sched_sim::models::ProcessSpec;
//!
//! let processes = vec![
//!     ProcessSpec::new("A", 0.0, 4.0),
//!     ProcessSpec::new("B", 1.0, 3.0),
//! ];
//!
//! let result = simulate(Discipline::Fcfs, &processes, &SimParams::new()).unwrap();
//! assert_eq!(result.completed[0].name, "A");
//! assert!((result.avg_waiting - 1.5).abs() < 1e-9);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod engine;
pub mod models;
pub mod validation;

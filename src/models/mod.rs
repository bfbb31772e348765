//! Simulation domain models.
//!
//! Provides the data types flowing through one simulation run: raw
//! descriptors enter through validation, engines emit slices and
//! queue snapshots, and the aggregator folds them into per-process
//! summaries.
//!
//! # Pipeline
//!
//! | Model | Stage |
//! |-------|-------|
//! | `RawProcess` | unvalidated descriptor (wire form) |
//! | `ProcessSpec` | validated engine input |
//! | `ExecutionSlice` | one contiguous span of CPU occupancy |
//! | `QueueSnapshot` | ready-queue state at a scheduling decision |
//! | `CompletedProcess` | per-process folded metrics |
//! | `SimulationResult` | full outcome of one run |

mod execution;
mod process;
mod snapshot;

pub use execution::{CompletedProcess, ExecutionSlice, SimulationResult};
pub use process::{ProcessSpec, RawProcess};
pub use snapshot::QueueSnapshot;

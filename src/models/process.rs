//! Process descriptor models.
//!
//! `RawProcess` is the unvalidated wire form (every field optional);
//! `ProcessSpec` is the validated input the engines consume. The split
//! keeps malformed descriptors out of the simulation layer: a bad
//! descriptor fails in [`crate::validation::validate`] with a precise
//! error instead of a deserialization error.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 3.1:
//! Process Concept

use serde::{Deserialize, Serialize};

/// An unvalidated process descriptor, as submitted by a caller.
///
/// All fields are optional so that incomplete descriptors still
/// deserialize; validation reports exactly which fields are missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProcess {
    /// Process name.
    #[serde(default)]
    pub name: Option<String>,
    /// Arrival time.
    #[serde(default)]
    pub arrival: Option<f64>,
    /// Burst (service) time.
    #[serde(default)]
    pub burst: Option<f64>,
}

impl RawProcess {
    /// Creates a fully populated descriptor.
    pub fn new(name: impl Into<String>, arrival: f64, burst: f64) -> Self {
        Self {
            name: Some(name.into()),
            arrival: Some(arrival),
            burst: Some(burst),
        }
    }
}

/// A validated process: the immutable input to every engine.
///
/// # Time Representation
/// Times are non-negative rationals relative to a simulation epoch
/// (t=0). The consumer defines the unit; the engines only ever compare
/// and add these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Process name, unique within a run.
    pub name: String,
    /// Time the process becomes ready for scheduling.
    pub arrival: f64,
    /// Total CPU service time required.
    pub burst: f64,
}

impl ProcessSpec {
    /// Creates a new process spec.
    pub fn new(name: impl Into<String>, arrival: f64, burst: f64) -> Self {
        Self {
            name: name.into(),
            arrival,
            burst,
        }
    }
}

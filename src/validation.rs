//! Input validation for simulation requests.
//!
//! Checks process descriptors before simulation. Detects:
//! - Missing `name`/`arrival`/`burst` fields
//! - Empty or duplicate names
//! - Negative or non-finite times
//!
//! The quantum and discipline-selector variants of [`ValidationError`]
//! are raised by the engine layer; they share this taxonomy so a caller
//! sees one error type for every way a request can be malformed.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ProcessSpec, RawProcess};

/// Validation result: the normalized process list, or every problem found.
pub type ValidationResult = Result<Vec<ProcessSpec>, Vec<ValidationError>>;

/// A way in which a simulation request can be malformed.
///
/// Serializes with a tagged wire form, e.g.
/// `{"error": "negative_field", "details": {...}}`.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "error", content = "details", rename_all = "snake_case")]
pub enum ValidationError {
    /// A descriptor lacks a required field.
    #[error("process #{index}: missing required field `{field}`")]
    MissingField {
        /// Position of the descriptor in the submitted list.
        index: usize,
        /// Name of the missing field.
        field: String,
    },

    /// A descriptor's name is present but empty.
    #[error("process #{index}: name must not be empty")]
    EmptyName {
        /// Position of the descriptor in the submitted list.
        index: usize,
    },

    /// An arrival or burst time is negative.
    #[error("process #{index}: {field} must be non-negative (got {value})")]
    NegativeField {
        /// Position of the descriptor in the submitted list.
        index: usize,
        /// Name of the offending field.
        field: String,
        /// The rejected value.
        value: f64,
    },

    /// An arrival or burst time is NaN or infinite.
    #[error("process #{index}: {field} must be finite (got {value})")]
    NonFiniteField {
        /// Position of the descriptor in the submitted list.
        index: usize,
        /// Name of the offending field.
        field: String,
        /// The rejected value.
        value: f64,
    },

    /// Two descriptors share a name. Metrics and queue history are
    /// keyed by name, so duplicates are rejected rather than merged.
    #[error("process #{index}: duplicate process name `{name}`")]
    DuplicateName {
        /// Position of the second occurrence.
        index: usize,
        /// The repeated name.
        name: String,
    },

    /// Round Robin was selected without a time quantum.
    #[error("round robin requires a time quantum")]
    MissingQuantum,

    /// The time quantum is zero, negative, or non-finite.
    #[error("time quantum must be positive and finite (got {quantum})")]
    InvalidQuantum {
        /// The rejected value.
        quantum: f64,
    },

    /// The discipline selector matched no known discipline.
    #[error("unknown scheduling discipline `{selector}`")]
    UnknownDiscipline {
        /// The rejected selector string.
        selector: String,
    },
}

/// Validates raw descriptors into engine-ready process specs.
///
/// Checks:
/// 1. Every descriptor carries `name`, `arrival`, and `burst`
/// 2. Names are non-empty and unique within the run
/// 3. Times are finite and non-negative
///
/// # Returns
/// `Ok(specs)` in submission order if all checks pass, `Err(errors)`
/// with every detected issue otherwise — never just the first one.
pub fn validate(processes: &[RawProcess]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut specs = Vec::with_capacity(processes.len());
    let mut seen: HashSet<&str> = HashSet::new();

    for (index, raw) in processes.iter().enumerate() {
        let name = match raw.name.as_deref() {
            Some("") => {
                errors.push(ValidationError::EmptyName { index });
                None
            }
            Some(name) => {
                if !seen.insert(name) {
                    errors.push(ValidationError::DuplicateName {
                        index,
                        name: name.to_string(),
                    });
                    None
                } else {
                    Some(name)
                }
            }
            None => {
                errors.push(ValidationError::MissingField {
                    index,
                    field: "name".into(),
                });
                None
            }
        };

        let arrival = check_time(index, "arrival", raw.arrival, &mut errors);
        let burst = check_time(index, "burst", raw.burst, &mut errors);

        if let (Some(name), Some(arrival), Some(burst)) = (name, arrival, burst) {
            specs.push(ProcessSpec::new(name, arrival, burst));
        }
    }

    if errors.is_empty() {
        Ok(specs)
    } else {
        Err(errors)
    }
}

/// Checks one time field: present, finite, non-negative.
fn check_time(
    index: usize,
    field: &str,
    value: Option<f64>,
    errors: &mut Vec<ValidationError>,
) -> Option<f64> {
    match value {
        None => {
            errors.push(ValidationError::MissingField {
                index,
                field: field.into(),
            });
            None
        }
        Some(v) if !v.is_finite() => {
            errors.push(ValidationError::NonFiniteField {
                index,
                field: field.into(),
                value: v,
            });
            None
        }
        Some(v) if v < 0.0 => {
            errors.push(ValidationError::NegativeField {
                index,
                field: field.into(),
                value: v,
            });
            None
        }
        Some(v) => Some(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let raw = vec![
            RawProcess::new("A", 0.0, 4.0),
            RawProcess::new("B", 1.5, 3.0),
        ];
        let specs = validate(&raw).unwrap();
        assert_eq!(specs.len(), 2);
        // Submission order is preserved.
        assert_eq!(specs[0], ProcessSpec::new("A", 0.0, 4.0));
        assert_eq!(specs[1], ProcessSpec::new("B", 1.5, 3.0));
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert_eq!(validate(&[]).unwrap(), Vec::new());
    }

    #[test]
    fn test_missing_fields() {
        let errors = validate(&[RawProcess::default()]).unwrap_err();
        assert_eq!(errors.len(), 3);
        for field in ["name", "arrival", "burst"] {
            assert!(errors.contains(&ValidationError::MissingField {
                index: 0,
                field: field.into(),
            }));
        }
    }

    #[test]
    fn test_empty_name() {
        let errors = validate(&[RawProcess::new("", 0.0, 1.0)]).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptyName { index: 0 }]);
    }

    #[test]
    fn test_negative_times() {
        let errors = validate(&[RawProcess::new("A", -1.0, -2.0)]).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| matches!(
            e,
            ValidationError::NegativeField { index: 0, .. }
        )));
    }

    #[test]
    fn test_non_finite_times() {
        let errors = validate(&[RawProcess::new("A", f64::NAN, f64::INFINITY)]).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| matches!(
            e,
            ValidationError::NonFiniteField { index: 0, .. }
        )));
    }

    #[test]
    fn test_duplicate_name() {
        let raw = vec![
            RawProcess::new("A", 0.0, 1.0),
            RawProcess::new("B", 0.0, 1.0),
            RawProcess::new("A", 2.0, 1.0),
        ];
        let errors = validate(&raw).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateName {
                index: 2,
                name: "A".into(),
            }]
        );
    }

    #[test]
    fn test_collects_all_errors() {
        let raw = vec![
            RawProcess::new("", -1.0, 2.0),   // empty name + negative arrival
            RawProcess::default(),            // three missing fields
            RawProcess::new("A", 0.0, 1.0),   // fine
            RawProcess::new("A", 1.0, 1.0),   // duplicate
        ];
        let errors = validate(&raw).unwrap_err();
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn test_zero_times_are_valid() {
        let specs = validate(&[RawProcess::new("A", 0.0, 0.0)]).unwrap();
        assert_eq!(specs[0].burst, 0.0);
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::NegativeField {
            index: 1,
            field: "burst".into(),
            value: -2.5,
        };
        assert_eq!(err.to_string(), "process #1: burst must be non-negative (got -2.5)");
        assert_eq!(
            ValidationError::MissingQuantum.to_string(),
            "round robin requires a time quantum"
        );
    }

    #[test]
    fn test_error_wire_format() {
        let err = ValidationError::DuplicateName {
            index: 2,
            name: "A".into(),
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["error"], "duplicate_name");
        assert_eq!(json["details"]["index"], 2);
        assert_eq!(json["details"]["name"], "A");

        let unit = serde_json::to_value(ValidationError::MissingQuantum).unwrap();
        assert_eq!(unit["error"], "missing_quantum");
    }
}

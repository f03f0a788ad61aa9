//! Input validation for process sets.
//!
//! The schedulers trust their input; these checks belong to the boundary
//! that collects processes from the user. Detects:
//! - Empty process sets
//! - Empty or duplicate IDs
//! - Negative or non-finite arrivals
//! - Non-positive or non-finite bursts
//!
//! Duplicate IDs are reported here but never rejected by the schedulers
//! themselves: results are keyed by input position, so a duplicate only
//! makes the output ambiguous to read.

use std::collections::HashSet;

use crate::error::SimulationError;
use crate::models::ProcessSpec;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes supplied.
    EmptyProcessSet,
    /// A process has a blank ID.
    EmptyId,
    /// Two processes share the same ID.
    DuplicateId,
    /// Arrival is negative or not finite.
    InvalidArrival,
    /// Burst is non-positive or not finite.
    InvalidBurst,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set before simulation.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "At least one process required",
        ));
    }

    let mut ids = HashSet::new();
    for (idx, p) in processes.iter().enumerate() {
        if p.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process at row {} has no ID", idx + 1),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if let Some(reason) = arrival_problem(p.arrival) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrival,
                format!("Process '{}' {reason}", p.id),
            ));
        }

        if let Some(reason) = burst_problem(p.burst) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurst,
                format!("Process '{}' {reason}", p.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks the preconditions shared by every scheduler.
///
/// Stops at the first violation. Duplicate IDs are allowed.
pub fn check_preconditions(processes: &[ProcessSpec]) -> Result<(), SimulationError> {
    if processes.is_empty() {
        return Err(SimulationError::EmptyProcessSet);
    }

    for p in processes {
        if let Some(reason) = arrival_problem(p.arrival).or_else(|| burst_problem(p.burst)) {
            return Err(SimulationError::InvalidProcess {
                id: p.id.clone(),
                reason: reason.to_string(),
            });
        }
    }

    Ok(())
}

/// Keeps only processes with `burst > 0`.
///
/// # Errors
/// - [`SimulationError::EmptyProcessSet`] if `processes` is empty.
/// - [`SimulationError::NoRunnableProcess`] if nothing survives the filter.
pub fn runnable_processes(processes: &[ProcessSpec]) -> Result<Vec<ProcessSpec>, SimulationError> {
    if processes.is_empty() {
        return Err(SimulationError::EmptyProcessSet);
    }

    let runnable: Vec<ProcessSpec> = processes.iter().filter(|p| p.burst > 0.0).cloned().collect();
    if runnable.is_empty() {
        return Err(SimulationError::NoRunnableProcess);
    }
    Ok(runnable)
}

fn arrival_problem(arrival: f64) -> Option<&'static str> {
    if !arrival.is_finite() {
        Some("has a non-finite arrival time")
    } else if arrival < 0.0 {
        Some("has a negative arrival time")
    } else {
        None
    }
}

fn burst_problem(burst: f64) -> Option<&'static str> {
    if !burst.is_finite() {
        Some("has a non-finite burst time")
    } else if burst <= 0.0 {
        Some("has a non-positive burst time")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new("P1", 0.0, 5.0),
            ProcessSpec::new("P2", 2.0, 3.0),
            ProcessSpec::new("P3", 4.0, 1.0),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
        assert!(check_preconditions(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_set() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyProcessSet);
        assert_eq!(check_preconditions(&[]), Err(SimulationError::EmptyProcessSet));
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![ProcessSpec::new("P1", 0.0, 1.0), ProcessSpec::new("P1", 1.0, 1.0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("P1")));
        // Schedulers tolerate duplicates.
        assert!(check_preconditions(&processes).is_ok());
    }

    #[test]
    fn test_empty_id() {
        let processes = vec![ProcessSpec::new("", 0.0, 1.0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyId));
    }

    #[test]
    fn test_invalid_arrival() {
        let processes = vec![ProcessSpec::new("A", -1.0, 1.0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidArrival));
        assert!(matches!(
            check_preconditions(&processes),
            Err(SimulationError::InvalidProcess { ref id, .. }) if id == "A"
        ));
    }

    #[test]
    fn test_invalid_burst() {
        let processes = vec![ProcessSpec::new("A", 0.0, 0.0), ProcessSpec::new("B", 0.0, f64::NAN)];
        let errors = validate_processes(&processes).unwrap_err();
        let bursts = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::InvalidBurst)
            .count();
        assert_eq!(bursts, 2);
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![ProcessSpec::new("", -1.0, 0.0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_runnable_filter() {
        let processes = vec![
            ProcessSpec::new("P1", 0.0, 5.0),
            ProcessSpec::new("P2", 1.0, 0.0),
            ProcessSpec::new("P3", 2.0, -1.0),
        ];
        let runnable = runnable_processes(&processes).unwrap();
        assert_eq!(runnable.len(), 1);
        assert_eq!(runnable[0].id, "P1");
    }

    #[test]
    fn test_runnable_none_left() {
        let processes = vec![ProcessSpec::new("P1", 0.0, 0.0)];
        assert_eq!(runnable_processes(&processes), Err(SimulationError::NoRunnableProcess));
        assert_eq!(runnable_processes(&[]), Err(SimulationError::EmptyProcessSet));
    }
}

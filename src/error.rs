//! Error types for simulation runs.

use thiserror::Error;

/// Reasons a simulation refuses to run.
///
/// Schedulers assume validated input and fail fast instead of producing
/// a meaningless timeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// No processes were supplied.
    #[error("process set is empty")]
    EmptyProcessSet,
    /// Every supplied process has a non-positive burst.
    #[error("no process with burst time > 0")]
    NoRunnableProcess,
    /// A process violates the scheduler preconditions.
    #[error("process '{id}' is invalid: {reason}")]
    InvalidProcess {
        /// Offending process ID.
        id: String,
        /// What is wrong with it.
        reason: String,
    },
    /// A policy name matched neither `fcfs` nor `sjf`.
    #[error("unknown scheduling policy '{0}' (expected 'fcfs' or 'sjf')")]
    UnknownPolicy(String),
    /// The workload document could not be parsed.
    #[error("invalid workload: {0}")]
    Workload(String),
}

impl From<serde_json::Error> for SimulationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Workload(err.to_string())
    }
}

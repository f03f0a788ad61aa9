//! Process (input) model.
//!
//! A process is a single CPU burst that becomes eligible to run at its
//! arrival time. Processes are caller-owned; schedulers only ever read
//! a snapshot of them.

use serde::{Deserialize, Serialize};

/// Burst substituted for non-finite or non-positive bursts by [`ProcessSpec::sanitized`].
pub const MIN_BURST: f64 = 0.1;

/// A process to be scheduled.
///
/// # Time Representation
/// `arrival` and `burst` are in logical time units on a deterministic axis
/// starting at t=0. There is no wall clock involved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Process identifier. Expected non-empty and unique within a run.
    pub id: String,
    /// Time at which the process becomes eligible to run.
    pub arrival: f64,
    /// Total CPU time the process requires.
    pub burst: f64,
}

impl ProcessSpec {
    /// Creates a new process.
    pub fn new(id: impl Into<String>, arrival: f64, burst: f64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
        }
    }

    /// Default row appended after `existing`: `P{n+1}`, arriving at 0 with burst 1.
    pub fn next_in(existing: &[ProcessSpec]) -> Self {
        Self::new(format!("P{}", existing.len() + 1), 0.0, 1.0)
    }

    /// Returns a copy coerced into the range the schedulers accept.
    ///
    /// - empty id → `P{index+1}`
    /// - non-finite arrival → 0, negative arrival (including `-0.0`) → 0
    /// - non-finite or non-positive burst → [`MIN_BURST`]
    pub fn sanitized(&self, index: usize) -> Self {
        let id = if self.id.trim().is_empty() {
            format!("P{}", index + 1)
        } else {
            self.id.clone()
        };
        let arrival = if self.arrival.is_finite() {
            // `+ 0.0` turns a `-0.0` arrival into `0.0`.
            self.arrival.max(0.0) + 0.0
        } else {
            0.0
        };
        let burst = if self.burst.is_finite() && self.burst > 0.0 {
            self.burst
        } else {
            MIN_BURST
        };
        Self { id, arrival, burst }
    }

    /// Whether this process can be handed to a scheduler as-is.
    #[inline]
    pub fn is_runnable(&self) -> bool {
        self.arrival.is_finite()
            && self.arrival >= 0.0
            && self.burst.is_finite()
            && self.burst > 0.0
    }
}

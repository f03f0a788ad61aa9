//! CPU schedulers and schedule metrics.
//!
//! Provides the two non-preemptive policies, a policy selector, and
//! metrics shared by both.
//!
//! # Algorithms
//!
//! - `FcfsScheduler`: run processes in arrival order, back to back.
//! - `SjfScheduler`: at each decision point run the ready process with the
//!   shortest burst; log every decision and idle gap.
//!
//! Both are pure functions of their input slice. Identical input always
//! reproduces identical segments, results and log text.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Smith (1956), SPT optimality for mean flow time

mod fcfs;
mod metrics;
mod policy;
mod sjf;

pub use fcfs::FcfsScheduler;
pub use metrics::{average_turnaround, average_waiting, ScheduleStats};
pub use policy::Policy;
pub use sjf::SjfScheduler;

use std::fmt::Debug;

use crate::error::SimulationError;
use crate::models::{ProcessSpec, SimulationOutcome};

/// A scheduling policy that simulates a process set to completion.
pub trait CpuScheduler: Send + Sync + Debug {
    /// Policy name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Simulates `processes` and returns the timeline and metrics.
    ///
    /// The input slice is never modified.
    ///
    /// # Errors
    /// Fails fast when the set is empty or any process has a negative or
    /// non-finite arrival, or a non-positive or non-finite burst.
    fn simulate(&self, processes: &[ProcessSpec]) -> Result<SimulationOutcome, SimulationError>;
}

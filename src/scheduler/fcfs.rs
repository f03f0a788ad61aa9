//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival (ties keep input order).
//! 2. Keep a logical clock starting at 0.
//! 3. For each process: if the clock is behind its arrival, the CPU idles
//!    up to the arrival; run the process for its full burst.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the pass.

use tracing::debug;

use super::{metrics, CpuScheduler};
use crate::dispatching::{self, rules::ArrivalOrder};
use crate::error::SimulationError;
use crate::models::{ExecutionSegment, ProcessResult, ProcessSpec, SimulationOutcome};
use crate::validation::check_preconditions;

/// Non-preemptive FCFS scheduler.
///
/// Results are returned in arrival-sorted order. No decision log is kept.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::ProcessSpec;
/// use cpu_schedule::scheduler::{CpuScheduler, FcfsScheduler};
///
/// let procs = vec![
///     ProcessSpec::new("P1", 0.0, 5.0),
///     ProcessSpec::new("P2", 2.0, 3.0),
///     ProcessSpec::new("P3", 4.0, 1.0),
/// ];
/// let outcome = FcfsScheduler.simulate(&procs).unwrap();
/// assert_eq!(outcome.execution_order(), vec!["P1", "P2", "P3"]);
/// assert!((outcome.average_waiting - 7.0 / 3.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl CpuScheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn simulate(&self, processes: &[ProcessSpec]) -> Result<SimulationOutcome, SimulationError> {
        check_preconditions(processes)?;

        let order = dispatching::sort_indices(&ArrivalOrder, processes);
        let mut segments = Vec::with_capacity(processes.len());
        let mut results = Vec::with_capacity(processes.len());
        let mut time = 0.0_f64;

        for idx in order {
            let process = &processes[idx];
            if time < process.arrival {
                time = process.arrival;
            }

            let segment = ExecutionSegment::run(process, time);
            results.push(ProcessResult::from_segment(process, &segment));
            time = segment.finish;
            segments.push(segment);
        }

        let average_waiting = metrics::average_waiting(&results);
        debug!(
            policy = self.name(),
            processes = processes.len(),
            average_waiting,
            "simulation finished"
        );

        Ok(SimulationOutcome {
            segments,
            results,
            average_waiting,
            decision_log: None,
        })
    }
}

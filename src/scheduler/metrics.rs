//! Schedule quality metrics.
//!
//! Shared by every scheduler: per-process results are derived from the
//! segments a run produced, and these helpers aggregate them.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average Waiting | mean(start - arrival) |
//! | Average Turnaround | mean(finish - arrival) |
//! | Makespan | Latest finish time |
//! | Idle Time | Makespan minus total busy time |
//! | Utilization | Busy time / makespan |
//! | Throughput | Processes completed per time unit |

use serde::{Deserialize, Serialize};

use crate::models::{ProcessResult, SimulationOutcome};

/// Mean waiting time. `0.0` for an empty result set.
pub fn average_waiting(results: &[ProcessResult]) -> f64 {
    mean(results.iter().map(|r| r.waiting), results.len())
}

/// Mean turnaround time. `0.0` for an empty result set.
pub fn average_turnaround(results: &[ProcessResult]) -> f64 {
    mean(results.iter().map(|r| r.turnaround), results.len())
}

fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / count as f64
}

/// Schedule performance indicators for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStats {
    /// Number of processes in the run.
    pub process_count: usize,
    /// Mean waiting time.
    pub average_waiting: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Latest finish time.
    pub makespan: f64,
    /// Time in `[0, makespan)` with no process on the CPU.
    pub idle_time: f64,
    /// Busy fraction of `[0, makespan)` (0.0..1.0).
    pub utilization: f64,
    /// Processes completed per time unit.
    pub throughput: f64,
}

impl ScheduleStats {
    /// Computes indicators from a simulation outcome.
    pub fn calculate(outcome: &SimulationOutcome) -> Self {
        let makespan = outcome.makespan();
        let busy: f64 = outcome.segments.iter().map(|s| s.duration()).sum();
        let process_count = outcome.results.len();

        let (utilization, throughput) = if makespan > 0.0 {
            (busy / makespan, process_count as f64 / makespan)
        } else {
            (0.0, 0.0)
        };

        Self {
            process_count,
            average_waiting: average_waiting(&outcome.results),
            average_turnaround: average_turnaround(&outcome.results),
            makespan,
            idle_time: (makespan - busy).max(0.0),
            utilization,
            throughput,
        }
    }
}

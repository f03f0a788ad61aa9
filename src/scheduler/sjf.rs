//! Shortest-Job-First scheduler (non-preemptive, static burst).
//!
//! # Algorithm
//!
//! The loop is a two-state machine driven by the ready set (unfinished
//! processes with `arrival <= time`):
//!
//! - **Idle**: the ready set is empty. Log the gap and advance the clock
//!   to the earliest unfinished arrival.
//! - **Dispatch**: order the ready set with [`ShortestJob`], log the
//!   decision, run the first process to completion.
//!
//! The loop exits once every process has completed. Each dispatch
//! finishes one process and each idle step is always followed by a
//! dispatch, so it runs at most `2n` iterations.
//!
//! # Complexity
//! O(n² log n) for n processes.

use tracing::{debug, trace};

use super::{metrics, CpuScheduler};
use crate::dispatching::{rules::ShortestJob, DispatchingRule};
use crate::error::SimulationError;
use crate::models::{
    DecisionLogEntry, ExecutionSegment, ProcessResult, ProcessSpec, ReadyProcess,
    SimulationOutcome,
};
use crate::validation::check_preconditions;

/// Non-preemptive SJF scheduler.
///
/// Results are returned in input order. The decision log always has one
/// entry per dispatch plus one per idle gap.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::ProcessSpec;
/// use cpu_schedule::scheduler::{CpuScheduler, SjfScheduler};
///
/// let procs = vec![
///     ProcessSpec::new("P1", 0.0, 5.0),
///     ProcessSpec::new("P2", 2.0, 3.0),
///     ProcessSpec::new("P3", 4.0, 1.0),
/// ];
/// let outcome = SjfScheduler.simulate(&procs).unwrap();
/// assert_eq!(outcome.execution_order(), vec!["P1", "P3", "P2"]);
/// assert_eq!(outcome.log_lines().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SjfScheduler;

/// What the scheduler does next at the current clock.
enum Step {
    /// Ready indices, ordered by the dispatching rule. Never empty.
    Dispatch(Vec<usize>),
    /// Nothing is ready; advance the clock.
    Idle { until: f64 },
}

struct Run<'a> {
    processes: &'a [ProcessSpec],
    finished: Vec<bool>,
    time: f64,
}

impl<'a> Run<'a> {
    fn new(processes: &'a [ProcessSpec]) -> Self {
        Self {
            processes,
            finished: vec![false; processes.len()],
            time: 0.0,
        }
    }

    fn unfinished(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.processes.len()).filter(|&i| !self.finished[i])
    }

    fn next_step(&self) -> Step {
        let mut ready: Vec<usize> = self
            .unfinished()
            .filter(|&i| self.processes[i].arrival <= self.time)
            .collect();

        if ready.is_empty() {
            let until = self
                .unfinished()
                .map(|i| self.processes[i].arrival)
                .fold(f64::INFINITY, f64::min);
            return Step::Idle { until };
        }

        ready.sort_by(|&a, &b| ShortestJob.compare(&self.processes[a], &self.processes[b]));
        Step::Dispatch(ready)
    }
}

impl CpuScheduler for SjfScheduler {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn simulate(&self, processes: &[ProcessSpec]) -> Result<SimulationOutcome, SimulationError> {
        check_preconditions(processes)?;

        let total = processes.len();
        let mut run = Run::new(processes);
        let mut completed = 0;
        let mut segments = Vec::with_capacity(total);
        let mut log = Vec::with_capacity(total);
        // Keyed by input position so duplicate IDs stay unambiguous.
        let mut spans: Vec<Option<(f64, f64)>> = vec![None; total];

        while completed < total {
            match run.next_step() {
                Step::Idle { until } => {
                    trace!(from = run.time, to = until, "cpu idle");
                    log.push(DecisionLogEntry::Idle {
                        from: run.time,
                        to: until,
                    });
                    run.time = until;
                }
                Step::Dispatch(ready) => {
                    let chosen = ready[0];
                    let process = &processes[chosen];
                    trace!(
                        time = run.time,
                        rule = ShortestJob.name(),
                        ready = ready.len(),
                        selected = %process.id,
                        "dispatch"
                    );

                    log.push(DecisionLogEntry::Dispatch {
                        time: run.time,
                        ready: ready
                            .iter()
                            .map(|&i| ReadyProcess {
                                id: processes[i].id.clone(),
                                burst: processes[i].burst,
                            })
                            .collect(),
                        selected: process.id.clone(),
                        burst: process.burst,
                    });

                    let segment = ExecutionSegment::run(process, run.time);
                    spans[chosen] = Some((segment.start, segment.finish));
                    run.finished[chosen] = true;
                    run.time = segment.finish;
                    completed += 1;
                    segments.push(segment);
                }
            }
        }

        let results: Vec<ProcessResult> = processes
            .iter()
            .zip(&spans)
            .filter_map(|(p, &span)| {
                span.map(|(start, finish)| ProcessResult::new(p, start, finish))
            })
            .collect();

        let average_waiting = metrics::average_waiting(&results);
        debug!(
            policy = self.name(),
            processes = total,
            decisions = log.len(),
            average_waiting,
            "simulation finished"
        );

        Ok(SimulationOutcome {
            segments,
            results,
            average_waiting,
            decision_log: Some(log),
        })
    }
}

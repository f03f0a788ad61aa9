//! Simulation output model.
//!
//! A simulation produces a timeline of execution segments, per-process
//! metrics and (for SJF) a decision log. All values are snapshots built
//! fresh per run.

use serde::{Deserialize, Serialize};

use super::{DecisionLogEntry, ProcessSpec};

/// One contiguous interval during which a single process holds the CPU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionSegment {
    /// Running process ID.
    pub process_id: String,
    /// Start time (≥ the process's arrival).
    pub start: f64,
    /// Finish time (`start + burst`).
    pub finish: f64,
    /// Echo of the process burst, for proportional rendering.
    pub burst: f64,
}

/// Per-process derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process ID.
    pub id: String,
    /// Arrival time.
    pub arrival: f64,
    /// Burst.
    pub burst: f64,
    /// Time the process first got the CPU.
    pub start: f64,
    /// Time the process completed.
    pub finish: f64,
    /// `start - arrival`.
    pub waiting: f64,
    /// `finish - arrival`.
    pub turnaround: f64,
}

/// Aggregate result of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Segments in execution order.
    pub segments: Vec<ExecutionSegment>,
    /// One result per process, in the scheduler's output order.
    pub results: Vec<ProcessResult>,
    /// Mean of all `waiting` values.
    pub average_waiting: f64,
    /// Decision audit trail. `None` for policies that make no decisions (FCFS).
    pub decision_log: Option<Vec<DecisionLogEntry>>,
}

impl ExecutionSegment {
    /// Creates a segment `[start, start + process.burst)` for `process`.
    pub fn run(process: &ProcessSpec, start: f64) -> Self {
        Self {
            process_id: process.id.clone(),
            start,
            finish: start + process.burst,
            burst: process.burst,
        }
    }

    /// Segment length.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.finish - self.start
    }
}

impl ProcessResult {
    /// Derives metrics for a process that ran over `[start, finish)`.
    pub fn new(process: &ProcessSpec, start: f64, finish: f64) -> Self {
        Self {
            id: process.id.clone(),
            arrival: process.arrival,
            burst: process.burst,
            start,
            finish,
            waiting: start - process.arrival,
            turnaround: finish - process.arrival,
        }
    }

    /// Derives metrics from the segment the process ran in.
    pub fn from_segment(process: &ProcessSpec, segment: &ExecutionSegment) -> Self {
        Self::new(process, segment.start, segment.finish)
    }
}

impl SimulationOutcome {
    /// Rendered decision log lines. Empty when the policy keeps no log.
    pub fn log_lines(&self) -> Vec<String> {
        self.decision_log
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Finds the result for a process ID (first match).
    pub fn result_for(&self, id: &str) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Finds the segment for a process ID (first match).
    pub fn segment_for(&self, id: &str) -> Option<&ExecutionSegment> {
        self.segments.iter().find(|s| s.process_id == id)
    }

    /// Latest finish across all segments; 0 when nothing ran.
    pub fn makespan(&self) -> f64 {
        self.segments.iter().map(|s| s.finish).fold(0.0, f64::max)
    }

    /// Process IDs in execution order.
    pub fn execution_order(&self) -> Vec<&str> {
        self.segments.iter().map(|s| s.process_id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_outcome() -> SimulationOutcome {
        let p1 = ProcessSpec::new("P1", 0.0, 5.0);
        let p2 = ProcessSpec::new("P2", 2.0, 3.0);
        let s1 = ExecutionSegment::run(&p1, 0.0);
        let s2 = ExecutionSegment::run(&p2, 5.0);
        SimulationOutcome {
            results: vec![
                ProcessResult::from_segment(&p1, &s1),
                ProcessResult::from_segment(&p2, &s2),
            ],
            segments: vec![s1, s2],
            average_waiting: 1.5,
            decision_log: None,
        }
    }

    #[test]
    fn test_segment_run() {
        let p = ProcessSpec::new("P1", 1.0, 2.5);
        let s = ExecutionSegment::run(&p, 4.0);
        assert_eq!(s.process_id, "P1");
        assert_eq!(s.start, 4.0);
        assert_eq!(s.finish, 6.5);
        assert_eq!(s.burst, 2.5);
        assert!((s.duration() - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_result_metrics() {
        let p = ProcessSpec::new("P2", 2.0, 3.0);
        let r = ProcessResult::new(&p, 5.0, 8.0);
        assert_eq!(r.waiting, 3.0);
        assert_eq!(r.turnaround, 6.0);
        assert!((r.turnaround - (r.waiting + r.burst)).abs() < 1e-10);
    }

    #[test]
    fn test_outcome_queries() {
        let o = sample_outcome();
        assert_eq!(o.makespan(), 8.0);
        assert_eq!(o.execution_order(), vec!["P1", "P2"]);
        assert_eq!(o.result_for("P2").unwrap().waiting, 3.0);
        assert_eq!(o.segment_for("P1").unwrap().finish, 5.0);
        assert!(o.result_for("P9").is_none());
    }

    #[test]
    fn test_log_lines_without_log() {
        assert!(sample_outcome().log_lines().is_empty());
    }

    #[test]
    fn test_log_lines_with_log() {
        let mut o = sample_outcome();
        o.decision_log = Some(vec![DecisionLogEntry::Idle { from: 0.0, to: 1.0 }]);
        assert_eq!(o.log_lines(), vec!["CPU idle from 0 to 1 (no process ready)"]);
    }

    #[test]
    fn test_empty_makespan() {
        let o = SimulationOutcome {
            segments: vec![],
            results: vec![],
            average_waiting: 0.0,
            decision_log: None,
        };
        assert_eq!(o.makespan(), 0.0);
    }

    #[test]
    fn test_outcome_serializes() {
        let json = serde_json::to_value(sample_outcome()).unwrap();
        assert_eq!(json["segments"][1]["process_id"], "P2");
        assert!(json["decision_log"].is_null());
    }
}

//! Workload documents and generators.
//!
//! A workload is the caller-owned process table plus the chosen policy.
//! It is the boundary between whatever collects processes (a form, a file,
//! a generator) and the schedulers.
//!
//! # Format
//!
//! ```json
//! {
//!   "policy": "sjf",
//!   "processes": [
//!     { "id": "P1", "arrival": 0, "burst": 5 },
//!     { "id": "P2", "arrival": 2, "burst": 3 }
//!   ]
//! }
//! ```
//!
//! `policy` defaults to `fcfs` when omitted.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SimulationError;
use crate::models::{ProcessSpec, SimulationOutcome, MIN_BURST};
use crate::scheduler::Policy;
use crate::validation::runnable_processes;

/// A process table and the policy to simulate it under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workload {
    /// Scheduling policy.
    #[serde(default)]
    pub policy: Policy,
    /// Process table, in row order.
    pub processes: Vec<ProcessSpec>,
}

/// Parameters for [`Workload::random`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of processes.
    pub count: usize,
    /// Largest arrival time drawn.
    pub max_arrival: f64,
    /// Largest burst drawn.
    pub max_burst: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10.0,
            max_burst: 10.0,
        }
    }
}

impl Workload {
    /// Creates a workload.
    pub fn new(policy: Policy, processes: Vec<ProcessSpec>) -> Self {
        Self { policy, processes }
    }

    /// Parses a workload from JSON.
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the workload to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SimulationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Switches the policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Appends a default row (`P{n+1}`, arrival 0, burst 1).
    pub fn add_process(&mut self) -> &ProcessSpec {
        let next = ProcessSpec::next_in(&self.processes);
        self.processes.push(next);
        &self.processes[self.processes.len() - 1]
    }

    /// Removes the last row. The table never drops below one row.
    ///
    /// Returns the removed process, or `None` if only one row is left.
    pub fn remove_process(&mut self) -> Option<ProcessSpec> {
        if self.processes.len() > 1 {
            self.processes.pop()
        } else {
            None
        }
    }

    /// Process table with every row coerced into schedulable range.
    pub fn sanitized_processes(&self) -> Vec<ProcessSpec> {
        self.processes
            .iter()
            .enumerate()
            .map(|(i, p)| p.sanitized(i))
            .collect()
    }

    /// Sanitizes, filters and simulates the process table.
    pub fn run(&self) -> Result<SimulationOutcome, SimulationError> {
        let processes = runnable_processes(&self.sanitized_processes())?;
        debug!(policy = %self.policy, processes = processes.len(), "running workload");
        self.policy.simulate(&processes)
    }

    /// Generates a random workload.
    ///
    /// Arrivals and bursts are rounded to one decimal place; bursts are at
    /// least [`MIN_BURST`]. Non-finite limits fall back to the
    /// [`GeneratorConfig::default`] limits.
    pub fn random<R: Rng>(policy: Policy, config: &GeneratorConfig, rng: &mut R) -> Self {
        let defaults = GeneratorConfig::default();
        let max_arrival = clamp_limit(config.max_arrival, defaults.max_arrival, 0.0);
        let max_burst = clamp_limit(config.max_burst, defaults.max_burst, MIN_BURST);

        let processes = (0..config.count)
            .map(|i| {
                let arrival = round_tenth(rng.random_range(0.0..=max_arrival));
                let burst = round_tenth(rng.random_range(MIN_BURST..=max_burst)).max(MIN_BURST);
                ProcessSpec::new(format!("P{}", i + 1), arrival, burst)
            })
            .collect();
        Self { policy, processes }
    }
}

impl Default for Workload {
    fn default() -> Self {
        Self {
            policy: Policy::Fcfs,
            processes: vec![
                ProcessSpec::new("P1", 0.0, 5.0),
                ProcessSpec::new("P2", 2.0, 3.0),
                ProcessSpec::new("P3", 4.0, 1.0),
            ],
        }
    }
}

/// Largest generator limit; keeps `round_tenth` from overflowing.
const MAX_LIMIT: f64 = 1e12;

fn clamp_limit(value: f64, fallback: f64, floor: f64) -> f64 {
    if value.is_finite() {
        value.clamp(floor, MAX_LIMIT)
    } else {
        fallback
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_workload_runs() {
        let outcome = Workload::default().run().unwrap();
        assert_eq!(outcome.execution_order(), vec!["P1", "P2", "P3"]);
        assert!((outcome.average_waiting - 7.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "policy": "sjf",
            "processes": [
                { "id": "A", "arrival": 5, "burst": 2 },
                { "id": "B", "arrival": 8, "burst": 1 }
            ]
        }"#;
        let workload = Workload::from_json(json).unwrap();
        assert_eq!(workload.policy, Policy::Sjf);
        assert_eq!(workload.processes.len(), 2);

        let outcome = workload.run().unwrap();
        assert_eq!(outcome.log_lines()[0], "CPU idle from 0 to 5 (no process ready)");
    }

    #[test]
    fn test_policy_defaults_to_fcfs() {
        let workload = Workload::from_json(r#"{ "processes": [] }"#).unwrap();
        assert_eq!(workload.policy, Policy::Fcfs);
    }

    #[test]
    fn test_malformed_json() {
        let err = Workload::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SimulationError::Workload(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let workload = Workload::default().with_policy(Policy::Sjf);
        let back = Workload::from_json(&workload.to_json().unwrap()).unwrap();
        assert_eq!(back, workload);
    }

    #[test]
    fn test_run_empty_table() {
        let workload = Workload::new(Policy::Sjf, vec![]);
        assert_eq!(workload.run(), Err(SimulationError::EmptyProcessSet));
    }

    #[test]
    fn test_run_sanitizes_rows() {
        let workload = Workload::new(
            Policy::Fcfs,
            vec![
                ProcessSpec::new("", -2.0, 0.0),
                ProcessSpec::new("B", f64::NAN, 2.0),
            ],
        );
        let outcome = workload.run().unwrap();
        // Row 1 becomes P1(0, 0.1); B gets arrival 0
        assert_eq!(outcome.execution_order(), vec!["P1", "B"]);
        assert_eq!(outcome.results[0].burst, MIN_BURST);
        assert_eq!(outcome.results[1].start, MIN_BURST);
    }

    #[test]
    fn test_add_and_remove_rows() {
        let mut workload = Workload::default();
        assert_eq!(workload.add_process().id, "P4");
        assert_eq!(workload.processes.len(), 4);

        let mut single = Workload::new(Policy::Fcfs, vec![ProcessSpec::new("P1", 0.0, 1.0)]);
        assert!(single.remove_process().is_none());
        assert_eq!(single.processes.len(), 1);

        assert_eq!(workload.remove_process().unwrap().id, "P4");
    }

    #[test]
    fn test_random_with_infinite_limits() {
        let config = GeneratorConfig {
            count: 4,
            max_arrival: f64::INFINITY,
            max_burst: f64::NAN,
        };
        let workload = Workload::random(Policy::Fcfs, &config, &mut StdRng::seed_from_u64(3));
        let defaults = GeneratorConfig::default();
        assert_eq!(workload.processes.len(), 4);
        assert!(workload.processes.iter().all(|p| {
            p.is_runnable() && p.arrival <= defaults.max_arrival && p.burst <= defaults.max_burst
        }));
    }

    #[test]
    fn test_random_with_negative_limits() {
        let config = GeneratorConfig {
            count: 3,
            max_arrival: -5.0,
            max_burst: -1.0,
        };
        let workload = Workload::random(Policy::Sjf, &config, &mut StdRng::seed_from_u64(9));
        assert!(workload
            .processes
            .iter()
            .all(|p| p.arrival == 0.0 && p.burst == MIN_BURST));
    }

    #[test]
    fn test_json_negative_zero_arrival_keeps_row_order() {
        let json = r#"{
            "policy": "fcfs",
            "processes": [
                { "id": "A", "arrival": 0.0, "burst": 1 },
                { "id": "B", "arrival": -0.0, "burst": 1 }
            ]
        }"#;
        let outcome = Workload::from_json(json).unwrap().run().unwrap();
        assert_eq!(outcome.execution_order(), vec!["A", "B"]);
    }

    #[test]
    fn test_random_is_seeded() {
        let config = GeneratorConfig::default();
        let a = Workload::random(Policy::Sjf, &config, &mut StdRng::seed_from_u64(7));
        let b = Workload::random(Policy::Sjf, &config, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.processes.len(), config.count);
        assert!(a.processes.iter().all(|p| p.is_runnable()));
        assert!(a
            .processes
            .iter()
            .all(|p| p.arrival <= config.max_arrival && p.burst <= config.max_burst));
    }
}

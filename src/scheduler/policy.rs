//! Policy selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{CpuScheduler, FcfsScheduler, SjfScheduler};
use crate::error::SimulationError;
use crate::models::{ProcessSpec, SimulationOutcome};

/// Scheduling policy chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// First-Come-First-Served.
    #[default]
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
}

impl Policy {
    /// All policies, in display order.
    pub const ALL: [Policy; 2] = [Policy::Fcfs, Policy::Sjf];

    /// The scheduler implementing this policy.
    pub fn scheduler(self) -> &'static dyn CpuScheduler {
        match self {
            Policy::Fcfs => &FcfsScheduler,
            Policy::Sjf => &SjfScheduler,
        }
    }

    /// Simulates `processes` under this policy.
    pub fn simulate(self, processes: &[ProcessSpec]) -> Result<SimulationOutcome, SimulationError> {
        self.scheduler().simulate(processes)
    }

    /// Short lowercase key (`"fcfs"` / `"sjf"`).
    pub fn key(self) -> &'static str {
        match self {
            Policy::Fcfs => "fcfs",
            Policy::Sjf => "sjf",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheduler().name())
    }
}

impl FromStr for Policy {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Policy::Fcfs),
            "sjf" => Ok(Policy::Sjf),
            other => Err(SimulationError::UnknownPolicy(other.to_string())),
        }
    }
}

//! CPU scheduling simulator.
//!
//! Simulates a user-supplied process set under non-preemptive scheduling
//! policies and reports the execution timeline, per-process metrics and,
//! for SJF, an audit trail of every scheduling decision.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessSpec`, `ExecutionSegment`,
//!   `ProcessResult`, `SimulationOutcome`, `DecisionLogEntry`
//! - **`dispatching`**: Total orders used to pick the next process
//! - **`scheduler`**: `FcfsScheduler`, `SjfScheduler`, `Policy`, metrics
//! - **`validation`**: Boundary checks and runnable-process filtering
//! - **`workload`**: JSON workload documents and random generators
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::ProcessSpec;
//! use cpu_schedule::scheduler::{Policy, ScheduleStats};
//!
//! let procs = vec![
//!     ProcessSpec::new("A", 5.0, 2.0),
//!     ProcessSpec::new("B", 8.0, 1.0),
//! ];
//! let outcome = Policy::Sjf.simulate(&procs).unwrap();
//! assert_eq!(outcome.log_lines()[0], "CPU idle from 0 to 5 (no process ready)");
//!
//! let stats = ScheduleStats::calculate(&outcome);
//! assert_eq!(stats.makespan, 9.0);
//! ```
//!
//! # Time
//!
//! All times are logical units on a deterministic axis starting at t=0.
//! No wall clock is read anywhere.

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SimulationError;

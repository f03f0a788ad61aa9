//! Dispatching rules for selecting the next process.
//!
//! A rule is a total, deterministic order over processes. Schedulers never
//! compare processes inline; they sort with a rule so that tie-breaking
//! lives in one place and can be tested on its own.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{self, rules};
//! use cpu_schedule::models::ProcessSpec;
//!
//! let procs = vec![
//!     ProcessSpec::new("P2", 2.0, 3.0),
//!     ProcessSpec::new("P3", 4.0, 1.0),
//! ];
//! let order = dispatching::sort_indices(&rules::ShortestJob, &procs);
//! assert_eq!(order, vec![1, 0]);
//! ```

pub mod rules;

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::models::ProcessSpec;

/// A dispatching rule ordering processes by priority.
///
/// # Ordering Convention
/// `Ordering::Less` means `a` is dispatched before `b`.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "FCFS", "SJF").
    fn name(&self) -> &'static str;

    /// Compares two processes.
    fn compare(&self, a: &ProcessSpec, b: &ProcessSpec) -> Ordering;
}

/// Returns indices into `processes` sorted by `rule`.
///
/// The sort is stable: processes the rule considers equal keep their
/// input order.
pub fn sort_indices<R>(rule: &R, processes: &[ProcessSpec]) -> Vec<usize>
where
    R: DispatchingRule + ?Sized,
{
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_by(|&a, &b| rule.compare(&processes[a], &processes[b]));
    indices
}

/// Compares two keys that the schedulers guarantee are finite.
///
/// `-0.0` and `0.0` compare equal, unlike `f64::total_cmp`.
pub(crate) fn compare_key(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

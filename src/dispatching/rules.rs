//! Built-in dispatching rules.
//!
//! - **ArrivalOrder**: first come, first served
//! - **ShortestJob**: shortest burst, then earliest arrival, then ID
//!
//! Keys are compared numerically, so `-0.0` and `0.0` are the same time.
//! Schedulers reject NaN before any rule runs.

use std::cmp::Ordering;

use super::{compare_key, DispatchingRule};
use crate::models::ProcessSpec;

/// First-Come-First-Served.
///
/// Orders by arrival only. Equal arrivals compare equal, so a stable sort
/// keeps their input order.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalOrder;

impl DispatchingRule for ArrivalOrder {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn compare(&self, a: &ProcessSpec, b: &ProcessSpec) -> Ordering {
        compare_key(a.arrival, b.arrival)
    }
}

/// Shortest Job First (static burst).
///
/// Key chain: burst ascending → arrival ascending → ID lexicographic.
/// Only processes with identical IDs and keys compare equal.
#[derive(Debug, Clone, Copy)]
pub struct ShortestJob;

impl DispatchingRule for ShortestJob {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn compare(&self, a: &ProcessSpec, b: &ProcessSpec) -> Ordering {
        compare_key(a.burst, b.burst)
            .then_with(|| compare_key(a.arrival, b.arrival))
            .then_with(|| a.id.cmp(&b.id))
    }
}

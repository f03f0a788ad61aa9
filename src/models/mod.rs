//! CPU scheduling domain models.
//!
//! Provides the input and output types of a simulation run. Every value is
//! a plain snapshot: schedulers take `&[ProcessSpec]` and hand back a fresh
//! `SimulationOutcome` that the presentation layer can render however it likes.
//!
//! # Consumers
//!
//! | Type | Rendered as |
//! |------|-------------|
//! | ExecutionSegment | Gantt chart block |
//! | ProcessResult | Statistics table row |
//! | DecisionLogEntry | Log line |

mod decision;
mod process;
mod schedule;

pub use decision::{DecisionLogEntry, ReadyProcess};
pub use process::{ProcessSpec, MIN_BURST};
pub use schedule::{ExecutionSegment, ProcessResult, SimulationOutcome};

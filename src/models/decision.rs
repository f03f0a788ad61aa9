//! Scheduling decision log.
//!
//! Each entry records one scheduling decision or one idle gap, in the
//! order they happened. Entries keep their structure so consumers can
//! inspect them; `Display` renders the human-readable line.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A ready process as seen at a dispatch decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadyProcess {
    /// Process ID.
    pub id: String,
    /// Process burst.
    pub burst: f64,
}

/// One entry of the decision audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecisionLogEntry {
    /// No process was ready; the CPU idled over `[from, to)`.
    Idle {
        /// Clock when the gap was detected.
        from: f64,
        /// Next arrival the clock advanced to.
        to: f64,
    },
    /// A process was selected from the ready set.
    Dispatch {
        /// Clock at the decision.
        time: f64,
        /// Ready set in selection order (selected first).
        ready: Vec<ReadyProcess>,
        /// Selected process ID.
        selected: String,
        /// Selected process burst.
        burst: f64,
    },
}

impl DecisionLogEntry {
    /// Whether this entry records an idle gap.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle { .. })
    }
}

impl fmt::Display for DecisionLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle { from, to } => {
                write!(f, "CPU idle from {from} to {to} (no process ready)")
            }
            Self::Dispatch {
                time,
                ready,
                selected,
                burst,
            } => {
                write!(f, "time {} -> ready: [ ", fixed_two(*time))?;
                for (i, p) in ready.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}(burst={})", p.id, p.burst)?;
                }
                write!(f, " ] -> selected {selected} (shortest burst {burst})")
            }
        }
    }
}

/// Formats `value` with two decimals, rounding exact ties away from zero.
///
/// `{:.2}` rounds exact ties to even (`0.125` → `0.12`); log lines round
/// them up (`0.125` → `0.13`).
fn fixed_two(value: f64) -> String {
    // Every finite f64 has at most 1074 fractional decimal digits.
    let exact = format!("{:.1074}", value.abs());
    let (whole, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let is_tie = frac.len() > 2
        && frac.as_bytes()[2] == b'5'
        && frac.as_bytes()[3..].iter().all(|&d| d == b'0');
    if !is_tie {
        return format!("{value:.2}");
    }

    let mut digits: Vec<u8> = whole.bytes().chain(frac[..2].bytes()).collect();
    let mut carry = true;
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            carry = false;
            break;
        }
    }
    if carry {
        digits.insert(0, b'1');
    }

    let split = digits.len() - 2;
    let sign = if value < 0.0 { "-" } else { "" };
    format!(
        "{sign}{}.{}",
        String::from_utf8_lossy(&digits[..split]),
        String::from_utf8_lossy(&digits[split..])
    )
}

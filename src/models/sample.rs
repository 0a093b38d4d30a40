//! Probe sample and per-cycle outcome data models

use serde::{Deserialize, Serialize};

/// One observed probe duration, or the unavailable sentinel.
///
/// Samples are produced by the connect probe, appended to the run's
/// ordered sequence in probe order (cycle-major, then operation, then
/// port), and never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Sample {
    /// Connect/close completed; duration in fractional milliseconds
    Observed(f64),
    /// Probe timed out or the destination was unreachable/refused
    Unavailable,
}

impl Sample {
    /// Observed duration in milliseconds, if the probe completed
    pub fn value_ms(&self) -> Option<f64> {
        match self {
            Sample::Observed(ms) => Some(*ms),
            Sample::Unavailable => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Sample::Unavailable)
    }
}

/// Result of one reporting cycle, handed to the reporting collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CycleOutcome {
    /// All probes in the cycle completed; normalized time in ms
    /// (`raw sum / ports / ops-per-cycle limit`)
    Active { time_ms: f64 },
    /// At least one probe in the cycle hit the unavailable sentinel
    Absent,
}

impl CycleOutcome {
    pub fn is_absent(&self) -> bool {
        matches!(self, CycleOutcome::Absent)
    }
}

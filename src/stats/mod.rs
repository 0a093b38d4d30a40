//! Statistics over the collected probe sample sequence
//!
//! The first sample of the full run sequence is always excluded from
//! the summary computation: the first connection pays one-time setup
//! cost (resolver caches, route lookup) that would skew the results.
//! The exclusion is applied here, once, by index, rather than scattered
//! through the probe loop.

use crate::models::Sample;
use serde::{Deserialize, Serialize};

/// Summary statistics over a run's sample sequence, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub min_ms: f64,
    pub avg_ms: f64,
    pub max_ms: f64,
    pub std_dev_ms: f64,
    /// Number of observed samples that entered the computation
    pub sample_count: usize,
}

/// Round to 3 decimal digits for display and stddev reporting
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Per-cycle normalized time: `raw_sum / port_count / ops_limit`.
pub fn cycle_time(raw_sum_ms: f64, port_count: usize, ops_limit: u32) -> f64 {
    raw_sum_ms / port_count as f64 / ops_limit as f64
}

/// Compute summary statistics over the full ordered sample sequence.
///
/// The element at index 0 is excluded unconditionally, and unavailable
/// sentinels among the remainder are filtered out of the sums and
/// extrema. The divisor for both the mean and the variance is the total
/// sequence length minus one — a deliberate compatibility quirk of the
/// reference behavior, kept even though it is not the textbook Bessel
/// correction.
///
/// Returns `None` when statistics are undefined: fewer than two samples
/// in the sequence, or no observed sample survives the exclusion.
pub fn summarize(samples: &[Sample]) -> Option<SummaryStatistics> {
    if samples.len() < 2 {
        return None;
    }

    let observed: Vec<f64> = samples[1..]
        .iter()
        .filter_map(|sample| sample.value_ms())
        .collect();

    if observed.is_empty() {
        return None;
    }

    let divisor = (samples.len() - 1) as f64;

    let sum: f64 = observed.iter().sum();
    let avg = sum / divisor;

    let min = observed.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = observed.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let squared_diff: f64 = observed.iter().map(|&x| (x - avg) * (x - avg)).sum();
    let variance = squared_diff / divisor;
    let std_dev = round3(variance.sqrt());

    Some(SummaryStatistics {
        min_ms: min,
        avg_ms: avg,
        max_ms: max,
        std_dev_ms: std_dev,
        sample_count: observed.len(),
    })
}

//! Scoring strategies — reconciled utilization to raw preference score.
//!
//! The power-saving strategy consolidates load onto already-busy nodes:
//! per-unit power cost rises sharply through the transitional band between
//! the low and high thresholds, so hot nodes rank first, idle nodes
//! second, and the band in between is actively penalized.

use tracing::debug;

use crate::config::{MIN_SCORE, ScoringConfig, TelemetrySource};

/// Scoring strategy, fixed at construction from the telemetry source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringStrategy {
    /// Three-zone threshold policy over reconciled CPU utilization.
    Threshold,
    /// Power-delta policy over direct power telemetry. Reserved: the
    /// algorithm is not defined yet, so this arm scores [`MIN_SCORE`].
    PowerDelta,
}

impl ScoringStrategy {
    /// Select the strategy matching a telemetry source.
    pub fn for_source(source: TelemetrySource) -> Self {
        match source {
            TelemetrySource::LoadWatcher => Self::Threshold,
            TelemetrySource::PowerMeter => Self::PowerDelta,
        }
    }

    /// Map a reconciled utilization percentage to a raw score.
    ///
    /// The raw score may exceed [`crate::config::MAX_SCORE`]; the
    /// normalization pass clamps it after all nodes are scored.
    pub fn score(&self, util_percent: f64, config: &ScoringConfig) -> i64 {
        match self {
            Self::Threshold => threshold_score(util_percent, config),
            Self::PowerDelta => {
                debug!("power-delta strategy not implemented, scoring minimum");
                MIN_SCORE
            }
        }
    }
}

/// Three-zone threshold policy.
///
/// With `low = low_cpu_threshold` and `high = high_cpu_threshold`:
/// - `util >= high`: score `round(util)` — busy nodes rank first;
/// - `util <= low`: score `round(util + (high - low))` — idle nodes rank
///   above the band but below busy nodes;
/// - otherwise: score `round(util - low)` — the transitional band scores
///   lowest.
///
/// Both boundaries resolve away from the middle branch.
fn threshold_score(util_percent: f64, config: &ScoringConfig) -> i64 {
    let low = config.low_cpu_threshold as f64;
    let high = config.high_cpu_threshold as f64;

    if util_percent >= high {
        util_percent.round() as i64
    } else if util_percent <= low {
        (util_percent + (high - low)).round() as i64
    } else {
        (util_percent - low).round() as i64
    }
}

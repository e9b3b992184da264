//! Scoring configuration.
//!
//! One immutable [`ScoringConfig`] is constructed per scheduling session
//! and passed by reference into every component. Out-of-range thresholds
//! are repaired at construction time, never at scoring time.

use serde::{Deserialize, Serialize};

/// Lowest score a node can receive.
pub const MIN_SCORE: i64 = 0;
/// Highest score a node can receive.
pub const MAX_SCORE: i64 = 100;

/// Which telemetry backend feeds the scorer, selecting the scoring
/// strategy at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TelemetrySource {
    /// Windowed utilization snapshots from a load-watching collaborator.
    #[default]
    LoadWatcher,
    /// Power telemetry (e.g. Kepler). The matching scoring strategy is a
    /// reserved extension point; see [`crate::policy::ScoringStrategy`].
    PowerMeter,
}

/// Thresholds and prediction knobs for the scoring core.
///
/// Invariant after construction: `MIN_SCORE <= low <= high <= MAX_SCORE`.
/// Deserialization goes through the same repair as [`ScoringConfig::new`],
/// so a decoded config can never violate the invariant either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawScoringConfig")]
pub struct ScoringConfig {
    /// Below or at this utilization percentage a node is considered idle.
    pub low_cpu_threshold: i64,
    /// At or above this utilization percentage a node is considered busy.
    pub high_cpu_threshold: i64,
    /// Scaling factor applied to declared CPU requests when predicting
    /// consumption (requests undershoot real usage).
    pub requests_multiplier: f64,
    /// Predicted millicores for containers declaring neither limit nor
    /// request.
    pub default_requests_millis: i64,
    /// Telemetry backend, fixing the strategy for the session.
    pub telemetry_source: TelemetrySource,
}

/// Wire shape of [`ScoringConfig`] before threshold repair.
#[derive(Deserialize)]
struct RawScoringConfig {
    low_cpu_threshold: i64,
    high_cpu_threshold: i64,
    requests_multiplier: f64,
    default_requests_millis: i64,
    #[serde(default)]
    telemetry_source: TelemetrySource,
}

impl From<RawScoringConfig> for ScoringConfig {
    fn from(raw: RawScoringConfig) -> Self {
        Self::new(
            raw.low_cpu_threshold,
            raw.high_cpu_threshold,
            raw.requests_multiplier,
            raw.default_requests_millis,
        )
        .with_telemetry_source(raw.telemetry_source)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::new(10, 40, 1.5, 1000)
    }
}

impl ScoringConfig {
    /// Build a config, repairing out-of-range thresholds.
    ///
    /// Both thresholds are clamped into `[MIN_SCORE, MAX_SCORE]`, then the
    /// low threshold is forced at or below the high one.
    pub fn new(
        low_cpu_threshold: i64,
        high_cpu_threshold: i64,
        requests_multiplier: f64,
        default_requests_millis: i64,
    ) -> Self {
        let high = high_cpu_threshold.clamp(MIN_SCORE, MAX_SCORE);
        let low = low_cpu_threshold.clamp(MIN_SCORE, MAX_SCORE).min(high);
        Self {
            low_cpu_threshold: low,
            high_cpu_threshold: high,
            requests_multiplier,
            default_requests_millis,
            telemetry_source: TelemetrySource::default(),
        }
    }

    /// Same config with a different telemetry source.
    pub fn with_telemetry_source(mut self, source: TelemetrySource) -> Self {
        self.telemetry_source = source;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds_are_valid() {
        let config = ScoringConfig::default();
        assert!(MIN_SCORE <= config.low_cpu_threshold);
        assert!(config.low_cpu_threshold <= config.high_cpu_threshold);
        assert!(config.high_cpu_threshold <= MAX_SCORE);
    }

    #[test]
    fn high_threshold_clamped_to_max_score() {
        let config = ScoringConfig::new(10, 250, 1.5, 1000);
        assert_eq!(config.high_cpu_threshold, MAX_SCORE);
    }

    #[test]
    fn negative_low_threshold_clamped_to_min_score() {
        let config = ScoringConfig::new(-5, 40, 1.5, 1000);
        assert_eq!(config.low_cpu_threshold, MIN_SCORE);
    }

    #[test]
    fn inverted_thresholds_are_repaired() {
        let config = ScoringConfig::new(80, 30, 1.5, 1000);
        assert_eq!(config.high_cpu_threshold, 30);
        assert_eq!(config.low_cpu_threshold, 30);
    }

    #[test]
    fn telemetry_source_defaults_in_json() {
        let json = r#"{
            "low_cpu_threshold": 10,
            "high_cpu_threshold": 40,
            "requests_multiplier": 1.5,
            "default_requests_millis": 1000
        }"#;
        let config: ScoringConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.telemetry_source, TelemetrySource::LoadWatcher);
    }

    #[test]
    fn deserialized_thresholds_are_repaired() {
        let json = r#"{
            "low_cpu_threshold": 200,
            "high_cpu_threshold": 40,
            "requests_multiplier": 1.5,
            "default_requests_millis": 1000
        }"#;
        let config: ScoringConfig = serde_json::from_str(json).unwrap();
        // Same repair as ScoringConfig::new: clamp into range, low <= high.
        assert_eq!(config.high_cpu_threshold, 40);
        assert_eq!(config.low_cpu_threshold, 40);

        let json = r#"{
            "low_cpu_threshold": -10,
            "high_cpu_threshold": 400,
            "requests_multiplier": 1.5,
            "default_requests_millis": 1000
        }"#;
        let config: ScoringConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.low_cpu_threshold, MIN_SCORE);
        assert_eq!(config.high_cpu_threshold, MAX_SCORE);
    }

    #[test]
    fn with_telemetry_source_switches_backend() {
        let config = ScoringConfig::default().with_telemetry_source(TelemetrySource::PowerMeter);
        assert_eq!(config.telemetry_source, TelemetrySource::PowerMeter);
    }
}

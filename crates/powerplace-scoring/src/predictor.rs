//! Per-container CPU prediction from declared resources.

use powerplace_state::ContainerSpec;

use crate::config::ScoringConfig;

/// Predict a container's CPU consumption in millicores.
///
/// Strict precedence:
/// 1. a declared limit is taken verbatim (limits approximate consumption
///    under load),
/// 2. a declared request is scaled by `requests_multiplier`,
/// 3. otherwise the configured default applies.
pub fn predict_utilization(container: &ContainerSpec, config: &ScoringConfig) -> i64 {
    if let Some(limit) = container.cpu_limit_millis {
        limit
    } else if let Some(request) = container.cpu_request_millis {
        (request as f64 * config.requests_multiplier).round() as i64
    } else {
        config.default_requests_millis
    }
}

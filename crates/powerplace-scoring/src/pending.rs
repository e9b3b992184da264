//! Missing-utilization estimate from recently assigned workloads.
//!
//! Telemetry trails reality: a workload bound moments ago consumes CPU
//! that the node's snapshot cannot show yet. This module sums predicted
//! consumption over every pending assignment whose effect may be absent
//! from the telemetry window.

use powerplace_state::{AssignmentRegistry, MetricsWindow};
use tracing::debug;

use crate::config::ScoringConfig;
use crate::predictor::predict_utilization;

/// Time in seconds between metrics-agent ingestions.
const METRICS_REPORTING_INTERVAL_SECS: i64 = 60;

/// Estimate CPU load (millicores) on `node` not yet visible in telemetry.
///
/// A pending record counts if it was assigned after the telemetry window
/// closed, or within one reporting interval before the window end. The
/// second condition does not guarantee the record's load is absent from
/// the window; double-counting load that telemetry has caught up with is
/// accepted as the safe direction (overestimating beats overloading).
///
/// Runs one pass over the node's records under the registry read lock.
pub fn missing_utilization_millis(
    registry: &AssignmentRegistry,
    node: &str,
    window: &MetricsWindow,
    config: &ScoringConfig,
) -> i64 {
    let missing = registry.with_pending(node, |records| {
        let mut total: i64 = 0;
        for record in records {
            if !counts_against_window(record.assigned_at, window) {
                continue;
            }
            for container in &record.workload.containers {
                total += predict_utilization(container, config);
            }
            total += record.workload.overhead_cpu_millis;
            debug!(
                node,
                workload = %record.workload.name,
                missing_cpu_millis = total,
                "missing utilization for pending workload"
            );
        }
        total
    });
    debug!(node, missing_cpu_millis = missing, "missing utilization for node");
    missing
}

/// Whether an assignment at `assigned_at` may be invisible in `window`.
fn counts_against_window(assigned_at: i64, window: &MetricsWindow) -> bool {
    assigned_at > window.end
        || (assigned_at <= window.end
            && window.end - assigned_at < METRICS_REPORTING_INTERVAL_SECS)
}

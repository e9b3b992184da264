//! Telemetry reconciliation — fold missing load into reported utilization.

use powerplace_state::{MetricOperator, MetricResource, NodeTelemetry};

/// Reconcile a node's telemetry with its missing-utilization correction.
///
/// Scans the snapshot for a CPU sample aggregated as Average or Latest,
/// converts it to millicores against the node's capacity, adds the
/// missing load, and converts back to a percentage. Returns `None` when
/// the snapshot carries no usable CPU sample.
///
/// The result is deliberately unclamped: values above 100 signal heavy
/// predicted load and feed the high-utilization scoring branch.
pub fn reconcile_cpu_utilization(
    telemetry: &NodeTelemetry,
    missing_millis: i64,
    capacity_millis: i64,
) -> Option<f64> {
    let mut percent = cpu_utilization_percent(telemetry)?;

    if capacity_millis != 0 {
        let util_millis = (percent / 100.0) * capacity_millis as f64;
        percent = 100.0 * (util_millis + missing_millis as f64) / capacity_millis as f64;
    }
    // Zero capacity: degenerate node, leave the reported percentage as-is.
    Some(percent)
}

/// Latest usable CPU percentage in the snapshot, if any.
fn cpu_utilization_percent(telemetry: &NodeTelemetry) -> Option<f64> {
    let mut found = None;
    for sample in &telemetry.samples {
        if sample.resource == MetricResource::Cpu
            && matches!(
                sample.operator,
                MetricOperator::Average | MetricOperator::Latest
            )
        {
            found = Some(sample.value);
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use powerplace_state::{MetricSample, MetricsWindow};

    fn make_telemetry(samples: Vec<MetricSample>) -> NodeTelemetry {
        NodeTelemetry {
            samples,
            window: MetricsWindow::new(1000, 2000),
        }
    }

    fn cpu_sample(operator: MetricOperator, value: f64) -> MetricSample {
        MetricSample {
            resource: MetricResource::Cpu,
            operator,
            value,
        }
    }

    #[test]
    fn adds_missing_load_as_percentage() {
        // 50% of 4000m = 2000m; +1000m missing = 3000m = 75%.
        let telemetry = make_telemetry(vec![cpu_sample(MetricOperator::Average, 50.0)]);
        let percent = reconcile_cpu_utilization(&telemetry, 1000, 4000).unwrap();
        assert_eq!(percent, 75.0);
    }

    #[test]
    fn can_exceed_one_hundred_percent() {
        let telemetry = make_telemetry(vec![cpu_sample(MetricOperator::Latest, 90.0)]);
        let percent = reconcile_cpu_utilization(&telemetry, 1000, 2000).unwrap();
        assert_eq!(percent, 140.0);
    }

    #[test]
    fn zero_capacity_leaves_percentage_unmodified() {
        let telemetry = make_telemetry(vec![cpu_sample(MetricOperator::Average, 35.0)]);
        let percent = reconcile_cpu_utilization(&telemetry, 1000, 0).unwrap();
        assert_eq!(percent, 35.0);
    }

    #[test]
    fn no_cpu_sample_yields_none() {
        let telemetry = make_telemetry(vec![MetricSample {
            resource: MetricResource::Memory,
            operator: MetricOperator::Average,
            value: 60.0,
        }]);
        assert!(reconcile_cpu_utilization(&telemetry, 0, 4000).is_none());
    }

    #[test]
    fn stddev_cpu_sample_is_not_usable() {
        let telemetry = make_telemetry(vec![cpu_sample(MetricOperator::Stddev, 12.0)]);
        assert!(reconcile_cpu_utilization(&telemetry, 0, 4000).is_none());
    }

    #[test]
    fn later_usable_sample_wins() {
        let telemetry = make_telemetry(vec![
            cpu_sample(MetricOperator::Average, 40.0),
            cpu_sample(MetricOperator::Latest, 55.0),
        ]);
        let percent = reconcile_cpu_utilization(&telemetry, 0, 4000).unwrap();
        assert_eq!(percent, 55.0);
    }

    #[test]
    fn empty_snapshot_yields_none() {
        let telemetry = make_telemetry(Vec::new());
        assert!(reconcile_cpu_utilization(&telemetry, 500, 4000).is_none());
    }
}

//! Domain types for the powerplace scoring core.
//!
//! These types describe the three inputs a scoring call reads: the node's
//! utilization telemetry (produced by an external metrics collaborator),
//! the pending workload's declared resources, and the cluster-inventory
//! view of the node. All types are serializable to/from JSON.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a node in the cluster.
pub type NodeId = String;

// ── Telemetry ─────────────────────────────────────────────────────

/// Resource dimension a metric sample describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricResource {
    Cpu,
    Memory,
    Power,
}

/// Aggregation operator applied over the telemetry window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricOperator {
    Average,
    Latest,
    Stddev,
}

/// A single aggregated metric sample for one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    pub resource: MetricResource,
    pub operator: MetricOperator,
    /// Utilization as a percentage of node capacity.
    pub value: f64,
}

/// Time range over which the samples were aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsWindow {
    /// Unix timestamp (seconds) of the window start.
    pub start: i64,
    /// Unix timestamp (seconds) of the window end.
    pub end: i64,
}

/// One node's telemetry snapshot: samples plus their window.
///
/// Produced externally, read-only to the scoring core; one snapshot per
/// scoring call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeTelemetry {
    pub samples: Vec<MetricSample>,
    pub window: MetricsWindow,
}

// ── Workload ──────────────────────────────────────────────────────

/// Declared CPU resources for a single container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub name: String,
    /// Declared CPU limit in millicores, if any.
    pub cpu_limit_millis: Option<i64>,
    /// Declared CPU request in millicores, if any.
    pub cpu_request_millis: Option<i64>,
}

/// A pending workload (pod): its containers plus aggregate overhead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    pub name: String,
    pub containers: Vec<ContainerSpec>,
    /// Aggregate runtime overhead in millicores.
    pub overhead_cpu_millis: i64,
}

// ── Node ──────────────────────────────────────────────────────────

/// Cluster-inventory view of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    /// Total CPU capacity of the node in millicores.
    pub cpu_capacity_millis: i64,
    /// Arbitrary labels, carried for the host scheduler's affinity
    /// extensions. The scoring core never reads them.
    pub labels: HashMap<String, String>,
}

// ── Pending assignment ────────────────────────────────────────────

/// A workload recently bound to a node, not yet visible in telemetry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAssignment {
    pub workload: WorkloadSpec,
    /// Unix timestamp (seconds) when the bind happened.
    pub assigned_at: i64,
}

impl ContainerSpec {
    /// Container with neither limit nor request declared.
    pub fn unconstrained(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cpu_limit_millis: None,
            cpu_request_millis: None,
        }
    }
}

impl MetricsWindow {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

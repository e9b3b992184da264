//! Scoring entry point exposed to the host scheduler.
//!
//! The host calls [`NodeScorer::score_node`] once per candidate node,
//! concurrently across worker threads, then [`NodeScorer::normalize_scores`]
//! once over the collected results. Telemetry gaps degrade to the minimum
//! score so observability holes never block scheduling; only an
//! unresolvable node aborts a call.

use std::sync::Arc;

use powerplace_state::{AssignmentRegistry, NodeRecord, NodeTelemetry, WorkloadSpec};
use tracing::{debug, warn};

use crate::config::{MAX_SCORE, MIN_SCORE, ScoringConfig};
use crate::error::{ScoreError, ScoreResult};
use crate::pending::missing_utilization_millis;
use crate::policy::ScoringStrategy;
use crate::reconcile::reconcile_cpu_utilization;

/// Source of per-node telemetry snapshots.
///
/// `None` means "no data for this node right now" and is a degraded
/// condition, not an error.
pub trait TelemetryProvider: Send + Sync {
    fn node_metrics(&self, node: &str) -> Option<NodeTelemetry>;
}

/// Source of cluster-inventory node records.
pub trait NodeInventory: Send + Sync {
    fn node(&self, node: &str) -> Option<NodeRecord>;
}

/// One node's score row for a scheduling cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeScore {
    pub node_id: String,
    pub score: i64,
}

/// Per-node preference scorer for power-aware placement.
pub struct NodeScorer {
    config: ScoringConfig,
    strategy: ScoringStrategy,
    telemetry: Arc<dyn TelemetryProvider>,
    inventory: Arc<dyn NodeInventory>,
    registry: Arc<AssignmentRegistry>,
}

impl NodeScorer {
    /// Build a scorer for one scheduling session.
    ///
    /// The strategy is fixed here from the config's telemetry source and
    /// never switched per call.
    pub fn new(
        config: ScoringConfig,
        telemetry: Arc<dyn TelemetryProvider>,
        inventory: Arc<dyn NodeInventory>,
        registry: Arc<AssignmentRegistry>,
    ) -> Self {
        let strategy = ScoringStrategy::for_source(config.telemetry_source);
        debug!(
            low = config.low_cpu_threshold,
            high = config.high_cpu_threshold,
            ?strategy,
            "creating node scorer"
        );
        Self {
            config,
            strategy,
            telemetry,
            inventory,
            registry,
        }
    }

    /// Score one candidate node for a pending workload.
    ///
    /// Recomputes reconciled utilization from scratch on every call; no
    /// utilization state is cached across calls. The registry read lock
    /// is held only for the single pending-records pass.
    pub fn score_node(&self, workload: &WorkloadSpec, node: &str) -> ScoreResult<i64> {
        let record = self
            .inventory
            .node(node)
            .ok_or_else(|| ScoreError::NodeNotFound(node.to_string()))?;

        let Some(telemetry) = self.telemetry.node_metrics(node) else {
            warn!(node, workload = %workload.name, "no telemetry for node, scoring minimum");
            return Ok(MIN_SCORE);
        };

        let missing_millis = missing_utilization_millis(
            &self.registry,
            node,
            &telemetry.window,
            &self.config,
        );

        let Some(util_percent) =
            reconcile_cpu_utilization(&telemetry, missing_millis, record.cpu_capacity_millis)
        else {
            warn!(node, "no CPU sample in node telemetry, scoring minimum");
            return Ok(MIN_SCORE);
        };

        let score = self.strategy.score(util_percent, &self.config);
        debug!(
            node,
            workload = %workload.name,
            util_percent,
            missing_cpu_millis = missing_millis,
            score,
            "scored node"
        );
        Ok(score)
    }

    /// Clamp every collected score into `[MIN_SCORE, MAX_SCORE]`.
    ///
    /// Element-wise and idempotent; runs once per scheduling cycle after
    /// all nodes are scored.
    pub fn normalize_scores(&self, scores: &mut [NodeScore]) {
        for node_score in scores {
            node_score.score = node_score.score.clamp(MIN_SCORE, MAX_SCORE);
        }
    }
}

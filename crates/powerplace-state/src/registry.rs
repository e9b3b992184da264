//! Pending-assignment registry — shared record of recent binds per node.
//!
//! The external bind-event subscriber records every workload assignment
//! here; concurrent scoring calls read a node's records under a shared
//! lock to estimate load that telemetry has not caught up with yet.
//!
//! The scoring core only ever reads. Eviction of records whose load has
//! long since appeared in telemetry is the subscriber's job, via
//! [`AssignmentRegistry::prune_before`].

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use crate::types::{NodeId, PendingAssignment, WorkloadSpec};

/// Concurrency-safe registry of pending assignments keyed by node.
///
/// Many readers (one per in-flight scoring call) and occasional writers
/// (one per bind event). The read lock is held only inside
/// [`with_pending`](Self::with_pending); no lock crosses a scoring call.
#[derive(Debug, Default)]
pub struct AssignmentRegistry {
    inner: RwLock<HashMap<NodeId, Vec<PendingAssignment>>>,
}

impl AssignmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a workload bound to `node` at `assigned_at` (unix seconds).
    pub fn record(&self, node: &str, workload: WorkloadSpec, assigned_at: i64) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        debug!(node, workload = %workload.name, assigned_at, "recorded pending assignment");
        inner
            .entry(node.to_string())
            .or_default()
            .push(PendingAssignment {
                workload,
                assigned_at,
            });
    }

    /// Run `f` over the node's pending records under the read lock.
    ///
    /// The lock is released as soon as `f` returns; callers must not stash
    /// borrows of the slice. Nodes with no records see an empty slice.
    pub fn with_pending<R>(&self, node: &str, f: impl FnOnce(&[PendingAssignment]) -> R) -> R {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        match inner.get(node) {
            Some(records) => f(records),
            None => f(&[]),
        }
    }

    /// Number of pending records for a node.
    pub fn pending_count(&self, node: &str) -> usize {
        self.with_pending(node, |records| records.len())
    }

    /// Drop every record assigned strictly before `cutoff` (unix seconds).
    ///
    /// Called by the bind-event subscriber on its cleanup cadence, never by
    /// the scoring core. Returns the number of records removed.
    pub fn prune_before(&self, cutoff: i64) -> usize {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let mut removed = 0;
        inner.retain(|_, records| {
            let before = records.len();
            records.retain(|r| r.assigned_at >= cutoff);
            removed += before - records.len();
            !records.is_empty()
        });
        if removed > 0 {
            debug!(removed, cutoff, "pruned stale pending assignments");
        }
        removed
    }
}

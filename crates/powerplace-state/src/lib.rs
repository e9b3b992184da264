//! powerplace-state — domain types and shared state for powerplace.
//!
//! Holds the telemetry, workload, and node-inventory types consumed by the
//! scoring core, plus the [`AssignmentRegistry`]: the concurrently-read
//! record of workloads that were recently bound to a node but whose load
//! is not yet guaranteed visible in that node's utilization telemetry.
//!
//! # Architecture
//!
//! ```text
//! AssignmentRegistry (RwLock<HashMap<NodeId, Vec<PendingAssignment>>>)
//!   ├── record()        — writer path, called by the bind-event subscriber
//!   ├── with_pending()  — reader path, one pass under the read lock
//!   └── prune_before()  — lifecycle, owned by the subscriber
//! ```
//!
//! The registry is `Send + Sync` and safe to share across the host
//! scheduler's worker threads.

pub mod registry;
pub mod types;

pub use registry::AssignmentRegistry;
pub use types::*;

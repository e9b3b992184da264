//! powerplace-scoring — power/utilization-aware node scoring.
//!
//! Given a pending workload and a candidate node, produces a bounded
//! preference score so that the host scheduler can rank placement targets
//! by power/CPU pressure. The core reconciles windowed utilization
//! telemetry with workloads already assigned but not yet visible in that
//! telemetry, then maps the reconciled utilization through a three-zone
//! threshold policy.
//!
//! # Components
//!
//! - **`predictor`** — per-container CPU prediction from declared resources
//! - **`pending`** — missing-utilization estimate from recent assignments
//! - **`reconcile`** — telemetry + missing-load reconciliation
//! - **`policy`** — three-zone threshold scoring strategy
//! - **`scorer`** — [`NodeScorer`] entry point and score normalization
//!
//! Scoring calls for distinct nodes run concurrently; the only shared
//! mutable state is the pending-assignment registry, read under a shared
//! lock for a single pass per call.

pub mod config;
pub mod error;
pub mod pending;
pub mod policy;
pub mod predictor;
pub mod reconcile;
pub mod scorer;

pub use config::{MAX_SCORE, MIN_SCORE, ScoringConfig, TelemetrySource};
pub use error::{ScoreError, ScoreResult};
pub use policy::ScoringStrategy;
pub use scorer::{NodeInventory, NodeScore, NodeScorer, TelemetryProvider};

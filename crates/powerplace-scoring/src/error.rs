//! Scoring error types.
//!
//! Only node-resolution failures cross the scoring-call boundary as
//! errors. Telemetry gaps degrade to the minimum score instead, so that
//! observability holes never block scheduling progress.

use thiserror::Error;

/// Errors that can occur during a scoring call.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("node not found in cluster inventory: {0}")]
    NodeNotFound(String),
}

pub type ScoreResult<T> = Result<T, ScoreError>;

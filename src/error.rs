//! Error types
//!
//! Two families: setup-time configuration failures, and invariant violations
//! that indicate a simulation bug.

use std::path::PathBuf;

use thiserror::Error;

use crate::sim::GamePhase;

/// Failure to load or validate a [`crate::Tuning`]
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid tuning json")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl TuningError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// A broken simulation invariant. Never expected in correct code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("player present while in {phase:?}")]
    PlayerOutsidePlaying { phase: GamePhase },
    #[error("no player while playing")]
    MissingPlayer,
    #[error("score {score} exceeds {spawned} scoring zones spawned")]
    ScoreExceedsZones { score: u32, spawned: u32 },
    #[error("score {score} disagrees with {latched} latched zones")]
    ScoreLatchMismatch { score: u32, latched: u32 },
    #[error("{count} obstacle pairs still active after game over")]
    EntitiesAfterGameOver { count: usize },
    #[error("obstacle pair ids out of order at pair {pair_id}")]
    PairOrder { pair_id: u32 },
    #[error("pair {pair_id} has mismatched members")]
    MismatchedPair { pair_id: u32 },
}

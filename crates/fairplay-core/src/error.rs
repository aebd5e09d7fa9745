//! Error type shared by every stage of a game.

use crate::protocol::SessionPhase;
use thiserror::Error;

/// Result alias for fairplay operations
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors from key generation, rules, and session sequencing.
///
/// All of them end the current session. A published commitment is never
/// re-issued under a fresh key.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid move count {0}: need an odd number of at least 3 moves")]
    InvalidMoveCount(usize),

    #[error("Duplicate move: {0}")]
    DuplicateMove(String),

    #[error("Secure entropy unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Move id {id} out of range 1..={count}")]
    OutOfRangeMoveId { id: usize, count: usize },

    #[error("Move not in this move set: {0}")]
    UnknownMove(String),

    #[error("Invalid secret key: {0}")]
    InvalidKey(String),

    #[error("Invalid commitment: {0}")]
    InvalidCommitment(String),

    #[error("Session step requires phase {expected}, but session is {actual}")]
    PhaseViolation {
        expected: SessionPhase,
        actual: SessionPhase,
    },

    #[error("Input error: {0}")]
    Input(#[from] std::io::Error),
}

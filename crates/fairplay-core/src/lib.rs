//! Fairplay Core Library
//!
//! This crate provides the commit-reveal primitives, the circular game rules,
//! and the session state machine for a provably-fair rock-paper-scissors game
//! over any odd number of moves.

pub mod crypto;
mod error;
pub mod games;
pub mod protocol;

pub use crypto::{Commitment, SecretKey};
pub use error::{GameError, Result};
pub use games::{resolve, CircularRules, Move, MoveSelector, MoveSet, Outcome};
pub use protocol::{
    CommitAnnouncement, GameId, GameSession, HumanMoveProvider, PlayerChoice, Reveal,
    SessionPhase,
};

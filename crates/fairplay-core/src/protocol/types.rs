//! Protocol types.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique game identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    /// Create a new random game ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GameId({})", self.0)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Game outcome, from the human player's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Draw,
    PlayerWins,
    PlayerLoses,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Draw => "Draw",
            Outcome::PlayerWins => "Win",
            Outcome::PlayerLoses => "Lose",
        }
    }

    /// The same game seen from the other side
    pub fn reversed(&self) -> Outcome {
        match self {
            Outcome::Draw => Outcome::Draw,
            Outcome::PlayerWins => Outcome::PlayerLoses,
            Outcome::PlayerLoses => Outcome::PlayerWins,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Session lifecycle, strictly linear.
///
/// `Aborted` is terminal and entered on any error; a session that failed is
/// never resumed with a fresh key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Created,
    KeyGenerated,
    MoveSelected,
    Committed,
    AwaitingHumanMove,
    Resolved,
    Revealed,
    Aborted,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionPhase::Created => "Created",
            SessionPhase::KeyGenerated => "KeyGenerated",
            SessionPhase::MoveSelected => "MoveSelected",
            SessionPhase::Committed => "Committed",
            SessionPhase::AwaitingHumanMove => "AwaitingHumanMove",
            SessionPhase::Resolved => "Resolved",
            SessionPhase::Revealed => "Revealed",
            SessionPhase::Aborted => "Aborted",
        };
        f.write_str(name)
    }
}

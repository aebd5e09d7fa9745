//! Values handed to the display layer.

use crate::crypto::{Commitment, SecretKey};
use crate::games::Move;
use crate::protocol::{GameId, Outcome};
use serde::{Deserialize, Serialize};

/// Published before the human is asked for a move
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitAnnouncement {
    pub game_id: GameId,
    pub commitment: Commitment,
}

/// Disclosed after the outcome is known
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Reveal {
    pub game_id: GameId,
    pub player_move: Move,
    pub machine_move: Move,
    pub outcome: Outcome,
    pub key: SecretKey,
    pub commitment: Commitment,
}

impl Reveal {
    /// Recompute HMAC(key, machine move) and compare with the published value
    pub fn verify(&self) -> bool {
        self.commitment.verify(self.machine_move.name(), &self.key)
    }
}

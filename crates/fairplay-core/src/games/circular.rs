//! Circular winner resolution for any odd number of moves.
//!
//! Moves sit on a cycle in move-set order. With `half = (n - 1) / 2`, the
//! player wins when their move is 1..=half steps ahead of the computer's,
//! and loses when it is further ahead (i.e. 1..=half steps behind). For
//! three moves this is classic rock-paper-scissors with ids
//! Rock=1, Paper=2, Scissors=3.

use super::moves::{check_move_count, Move, MoveSet};
use crate::error::{GameError, Result};
use crate::protocol::Outcome;

/// Decide the outcome for the player.
///
/// Both ids are 1-based and must lie in `1..=n`; `n` must be odd and at
/// least 3. Violations are reported, never clamped.
pub fn resolve(player_id: usize, computer_id: usize, n: usize) -> Result<Outcome> {
    check_move_count(n)?;
    for id in [player_id, computer_id] {
        if !(1..=n).contains(&id) {
            return Err(GameError::OutOfRangeMoveId { id, count: n });
        }
    }

    Ok(arc_outcome(player_id, computer_id, n))
}

/// Outcome from the forward distance of the player's move over the
/// computer's. Ids must already be in `1..=n`.
fn arc_outcome(player_id: usize, computer_id: usize, n: usize) -> Outcome {
    // Both branches stay below n, so this cannot overflow even at usize::MAX.
    let step = if player_id >= computer_id {
        player_id - computer_id
    } else {
        player_id + (n - computer_id)
    };
    let half = n / 2;

    if step == 0 {
        Outcome::Draw
    } else if step <= half {
        Outcome::PlayerWins
    } else {
        Outcome::PlayerLoses
    }
}

/// Rules bound to a concrete move set
#[derive(Clone, Debug)]
pub struct CircularRules {
    moves: MoveSet,
}

impl CircularRules {
    pub fn new(moves: MoveSet) -> Self {
        Self { moves }
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// A move belongs to this set when both its id and its name match
    fn check_member(&self, m: &Move) -> Result<()> {
        if self.moves.get(m.id())? != *m {
            return Err(GameError::UnknownMove(m.name().to_string()));
        }
        Ok(())
    }

    /// Judge two moves of this set from the player's side
    pub fn judge(&self, player: &Move, computer: &Move) -> Result<Outcome> {
        self.check_member(player)?;
        self.check_member(computer)?;
        resolve(player.id(), computer.id(), self.moves.len())
    }

    /// Moves the given move beats, in cycle order
    pub fn beaten_by(&self, m: &Move) -> Result<Vec<Move>> {
        self.check_member(m)?;
        let n = self.moves.len();
        Ok(self
            .moves
            .iter()
            .filter(|other| arc_outcome(m.id(), other.id(), n) == Outcome::PlayerWins)
            .collect())
    }

    /// N x N grid: `table[p][c]` is the outcome when the player picks move
    /// `p + 1` and the computer picks move `c + 1`.
    pub fn outcome_table(&self) -> Vec<Vec<Outcome>> {
        let n = self.moves.len();
        (1..=n)
            .map(|p| (1..=n).map(|c| arc_outcome(p, c, n)).collect())
            .collect()
    }
}

//! One commit-reveal game.
//!
//! key -> machine move -> commitment -> publish -> human move -> resolve -> reveal
//!
//! The secret key and the machine's move stay inside the session until
//! `reveal`. The input provider only ever sees the `CommitAnnouncement`.

use super::messages::{CommitAnnouncement, Reveal};
use super::types::{GameId, Outcome, SessionPhase};
use crate::crypto::{Commitment, SecretKey};
use crate::error::{GameError, Result};
use crate::games::{CircularRules, Move, MoveSelector, MoveSet};
use rand::{CryptoRng, Rng, RngCore};
use std::mem;
use tracing::{debug, info};

/// What the human did at the prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerChoice {
    /// 1-based move id
    Move(usize),
    Quit,
}

/// Supplies the human's move once the commitment has been published
pub trait HumanMoveProvider {
    fn choose_move(
        &mut self,
        announcement: &CommitAnnouncement,
        moves: &MoveSet,
    ) -> Result<PlayerChoice>;
}

enum State {
    Created,
    KeyGenerated {
        key: SecretKey,
    },
    MoveSelected {
        key: SecretKey,
        machine: Move,
    },
    Committed {
        key: SecretKey,
        machine: Move,
        commitment: Commitment,
    },
    AwaitingHumanMove {
        key: SecretKey,
        machine: Move,
        commitment: Commitment,
    },
    Resolved {
        key: SecretKey,
        machine: Move,
        commitment: Commitment,
        player: Move,
        outcome: Outcome,
    },
    Revealed {
        commitment: Commitment,
        outcome: Outcome,
    },
    Aborted,
}

impl State {
    fn phase(&self) -> SessionPhase {
        match self {
            State::Created => SessionPhase::Created,
            State::KeyGenerated { .. } => SessionPhase::KeyGenerated,
            State::MoveSelected { .. } => SessionPhase::MoveSelected,
            State::Committed { .. } => SessionPhase::Committed,
            State::AwaitingHumanMove { .. } => SessionPhase::AwaitingHumanMove,
            State::Resolved { .. } => SessionPhase::Resolved,
            State::Revealed { .. } => SessionPhase::Revealed,
            State::Aborted => SessionPhase::Aborted,
        }
    }
}

/// A single game between the human and the machine
pub struct GameSession {
    game_id: GameId,
    rules: CircularRules,
    state: State,
}

impl GameSession {
    pub fn new(moves: MoveSet) -> Self {
        let game_id = GameId::new();
        debug!(%game_id, moves = moves.len(), "session created");
        Self {
            game_id,
            rules: CircularRules::new(moves),
            state: State::Created,
        }
    }

    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    pub fn moves(&self) -> &MoveSet {
        self.rules.moves()
    }

    /// Published commitment, once computed
    pub fn commitment(&self) -> Option<&Commitment> {
        match &self.state {
            State::Committed { commitment, .. }
            | State::AwaitingHumanMove { commitment, .. }
            | State::Resolved { commitment, .. }
            | State::Revealed { commitment, .. } => Some(commitment),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match &self.state {
            State::Resolved { outcome, .. } | State::Revealed { outcome, .. } => Some(*outcome),
            _ => None,
        }
    }

    /// Take the current state for a transition. The session stays `Aborted`
    /// unless the caller installs the next state, so any early return ends it.
    fn take(&mut self) -> State {
        mem::replace(&mut self.state, State::Aborted)
    }

    fn violation(&self, expected: SessionPhase, found: &State) -> GameError {
        debug!(game_id = %self.game_id, %expected, actual = %found.phase(), "session step out of order");
        GameError::PhaseViolation {
            expected,
            actual: found.phase(),
        }
    }

    /// Created -> KeyGenerated, using the OS CSPRNG
    pub fn generate_key(&mut self) -> Result<()> {
        self.generate_key_with(&mut rand::rngs::OsRng)
    }

    /// Created -> KeyGenerated, using the given CSPRNG
    pub fn generate_key_with<R: RngCore + CryptoRng>(&mut self, rng: &mut R) -> Result<()> {
        match self.take() {
            State::Created => {
                let key = SecretKey::generate_with(rng)?;
                self.state = State::KeyGenerated { key };
                debug!(game_id = %self.game_id, "key generated");
                Ok(())
            }
            other => Err(self.violation(SessionPhase::Created, &other)),
        }
    }

    /// KeyGenerated -> MoveSelected
    pub fn select_machine_move<R: Rng>(&mut self, selector: &mut MoveSelector<R>) -> Result<()> {
        match self.take() {
            State::KeyGenerated { key } => {
                let machine = selector.select(self.rules.moves());
                self.state = State::MoveSelected { key, machine };
                debug!(game_id = %self.game_id, "machine move selected");
                Ok(())
            }
            other => Err(self.violation(SessionPhase::KeyGenerated, &other)),
        }
    }

    /// MoveSelected -> Committed
    pub fn commit(&mut self) -> Result<Commitment> {
        match self.take() {
            State::MoveSelected { key, machine } => {
                let commitment = Commitment::new(machine.name(), &key);
                debug!(game_id = %self.game_id, %commitment, "commitment computed");
                self.state = State::Committed {
                    key,
                    machine,
                    commitment,
                };
                Ok(commitment)
            }
            other => Err(self.violation(SessionPhase::MoveSelected, &other)),
        }
    }

    /// Committed -> AwaitingHumanMove. The returned announcement is what the
    /// display layer prints before asking for the human's move.
    pub fn publish_commitment(&mut self) -> Result<CommitAnnouncement> {
        match self.take() {
            State::Committed {
                key,
                machine,
                commitment,
            } => {
                self.state = State::AwaitingHumanMove {
                    key,
                    machine,
                    commitment,
                };
                info!(game_id = %self.game_id, %commitment, "commitment published");
                Ok(CommitAnnouncement {
                    game_id: self.game_id,
                    commitment,
                })
            }
            other => Err(self.violation(SessionPhase::Committed, &other)),
        }
    }

    /// AwaitingHumanMove -> Resolved
    pub fn submit_human_move(&mut self, player_id: usize) -> Result<Outcome> {
        match self.take() {
            State::AwaitingHumanMove {
                key,
                machine,
                commitment,
            } => {
                let player = self.rules.moves().get(player_id)?;
                let outcome = self.rules.judge(&player, &machine)?;
                debug!(game_id = %self.game_id, player = player.id(), %outcome, "game resolved");
                self.state = State::Resolved {
                    key,
                    machine,
                    commitment,
                    player,
                    outcome,
                };
                Ok(outcome)
            }
            other => Err(self.violation(SessionPhase::AwaitingHumanMove, &other)),
        }
    }

    /// Resolved -> Revealed. Hands out the key and the machine's move so the
    /// commitment can be checked.
    pub fn reveal(&mut self) -> Result<Reveal> {
        match self.take() {
            State::Resolved {
                key,
                machine,
                commitment,
                player,
                outcome,
            } => {
                self.state = State::Revealed {
                    commitment,
                    outcome,
                };
                info!(game_id = %self.game_id, %outcome, "key revealed");
                Ok(Reveal {
                    game_id: self.game_id,
                    player_move: player,
                    machine_move: machine,
                    outcome,
                    key,
                    commitment,
                })
            }
            other => Err(self.violation(SessionPhase::Resolved, &other)),
        }
    }

    /// Run a whole game against `provider`.
    ///
    /// Returns `None` when the human quits at the prompt; the key is then
    /// never revealed.
    pub fn play<R, P>(
        moves: MoveSet,
        selector: &mut MoveSelector<R>,
        provider: &mut P,
    ) -> Result<Option<Reveal>>
    where
        R: Rng,
        P: HumanMoveProvider + ?Sized,
    {
        let mut session = GameSession::new(moves);
        session.generate_key()?;
        session.select_machine_move(selector)?;
        session.commit()?;
        let announcement = session.publish_commitment()?;

        match provider.choose_move(&announcement, session.moves())? {
            PlayerChoice::Quit => {
                info!(game_id = %session.game_id, "player quit before moving");
                Ok(None)
            }
            PlayerChoice::Move(id) => {
                session.submit_human_move(id)?;
                session.reveal().map(Some)
            }
        }
    }
}

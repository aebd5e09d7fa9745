//! Protocol types, messages, and the game session.

mod messages;
mod session;
mod types;

pub use messages::{CommitAnnouncement, Reveal};
pub use session::{GameSession, HumanMoveProvider, PlayerChoice};
pub use types::{GameId, Outcome, SessionPhase};

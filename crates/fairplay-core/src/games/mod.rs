//! Game definitions and logic.

mod circular;
mod moves;
mod selector;

pub use crate::protocol::Outcome;
pub use circular::{resolve, CircularRules};
pub use moves::{Move, MoveSet, MIN_MOVES};
pub use selector::MoveSelector;

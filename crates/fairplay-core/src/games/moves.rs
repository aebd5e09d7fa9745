//! Move sets and moves.

use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Smallest playable move set
pub const MIN_MOVES: usize = 3;

/// Check that `count` moves can be split into two equal arcs
pub(crate) fn check_move_count(count: usize) -> Result<()> {
    if count < MIN_MOVES || count % 2 == 0 {
        return Err(GameError::InvalidMoveCount(count));
    }
    Ok(())
}

/// A move: 1-based position in the move set plus its name
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    id: usize,
    name: String,
}

impl Move {
    /// 1-based position in the move set
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Ordered, unique, odd-sized list of move names.
///
/// The order is the cycle: each move beats the `half()` moves that precede it
/// (wrapping around) and loses to the `half()` moves after it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    /// Validate and build a move set
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        check_move_count(names.len())?;

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(GameError::DuplicateMove(name.clone()));
            }
        }

        Ok(Self { names })
    }

    /// Number of moves (N)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false: a validated set holds at least three moves
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Arc length, (N - 1) / 2
    pub fn half(&self) -> usize {
        self.names.len() / 2
    }

    /// Look up a move by its 1-based id
    pub fn get(&self, id: usize) -> Result<Move> {
        match id.checked_sub(1).and_then(|i| self.names.get(i)) {
            Some(name) => Ok(Move {
                id,
                name: name.clone(),
            }),
            None => Err(GameError::OutOfRangeMoveId {
                id,
                count: self.len(),
            }),
        }
    }

    /// Move at a 0-based index; panics when out of bounds, like slice indexing
    pub(crate) fn at(&self, index: usize) -> Move {
        Move {
            id: index + 1,
            name: self.names[index].clone(),
        }
    }

    /// Look up a move by name
    pub fn find(&self, name: &str) -> Option<Move> {
        self.names.iter().position(|n| n == name).map(|i| Move {
            id: i + 1,
            name: name.to_string(),
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// All moves in cycle order
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.names.iter().enumerate().map(|(i, name)| Move {
            id: i + 1,
            name: name.clone(),
        })
    }
}

impl TryFrom<Vec<String>> for MoveSet {
    type Error = GameError;

    fn try_from(names: Vec<String>) -> Result<Self> {
        Self::new(names)
    }
}

impl From<MoveSet> for Vec<String> {
    fn from(set: MoveSet) -> Self {
        set.names
    }
}

//! First-class move actions.
//!
//! Moves are domain events, not side effects. They represent the player's
//! intent and can be validated independently of execution.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.player, self.position)
    }
}

/// Error that can occur when applying a move.
///
/// A rejected move leaves the board untouched; the caller is expected to
/// pick another move or re-prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The position lies outside the board.
    #[display("position {} is out of bounds", _0)]
    OutOfBounds(Position),

    /// The square at the position is already occupied.
    #[display("square at {} is already occupied", _0)]
    Occupied(Position),
}

impl std::error::Error for MoveError {}

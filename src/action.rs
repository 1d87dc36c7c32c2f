//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They carry the player,
//! the position, and their place in the game history, so a game can be
//! reconstructed from its moves alone.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
///
/// Moves are recorded in order; `sequence` is the 1-based index of the
/// move within the game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
    /// 1-based index of this move within the history.
    pub sequence: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position, sequence: usize) -> Self {
        Self {
            player,
            position,
            sequence,
        }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the 1-based sequence number of this move.
    pub fn sequence(&self) -> usize {
        self.sequence
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {:?} -> {}", self.sequence, self.player, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Error that can occur when undoing a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum UndoError {
    /// There are no moves to undo.
    #[display("No moves to undo")]
    EmptyHistory,
}

impl std::error::Error for UndoError {}

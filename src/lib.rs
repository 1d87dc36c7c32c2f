//! Pure tic-tac-toe game logic.
//!
//! This crate owns the authoritative state for a tic-tac-toe match and
//! exposes the only entry points that mutate it. There is no UI, no I/O,
//! and no concurrency: every operation runs to completion before returning.
//!
//! # Architecture
//!
//! - **Types**: board, players, and game status ([`Board`], [`Player`],
//!   [`GameStatus`])
//! - **Rules**: pure win/draw evaluation, separated from board storage
//!   ([`check_winner`], [`is_full`])
//! - **Game**: the aggregate root with move, undo, and reset operations
//!   ([`Game`])
//! - **Contracts**: precondition/postcondition validation for moves
//!   ([`MoveContract`])
//! - **Invariants**: first-class, independently testable game guarantees
//!   ([`GameInvariants`])
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, Player, Position};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Game::new();
//! game.make_move(Position::Center)?;
//! game.make_move(Position::TopLeft)?;
//! assert_eq!(game.current_player(), Player::X);
//!
//! let undone = game.undo_move()?;
//! assert_eq!(undone.position, Position::TopLeft);
//! assert_eq!(game.history().len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod invariants;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveError, UndoError};
pub use contracts::{Contract, GameNotOver, LegalMove, MoveContract, SquareIsEmpty};
pub use game::{Game, GameStats};
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
pub use position::Position;
pub use rules::{LINES, Line, Win, check_winner, is_full};
pub use types::{Board, GameStatus, Player, Square};

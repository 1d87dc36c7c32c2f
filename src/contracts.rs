//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::MoveError;
use crate::game::Game;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::position::Position;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: The game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves once the game has a winner or is drawn.
    #[instrument(skip(game))]
    pub fn check(game: &Game, _pos: Position) -> Result<(), MoveError> {
        if game.status().is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    #[instrument(skip(game))]
    pub fn check(game: &Game, pos: Position) -> Result<(), MoveError> {
        if !game.board().is_empty(pos) {
            Err(MoveError::SquareOccupied(pos))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: A move is legal if the game is live and the
/// square is empty. Game-over is checked first.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(game: &Game, pos: Position) -> Result<(), MoveError> {
        GameNotOver::check(game, pos)?;
        SquareIsEmpty::check(game, pos)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Game must be in progress
/// - Square must be empty
///
/// Postconditions:
/// - Board remains monotonic
/// - Players still alternate
/// - History remains consistent with board
pub struct MoveContract;

impl Contract<Game, Position> for MoveContract {
    fn pre(game: &Game, pos: &Position) -> Result<(), MoveError> {
        LegalMove::check(game, *pos)
    }

    fn post(_before: &Game, after: &Game) -> Result<(), MoveError> {
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "move postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

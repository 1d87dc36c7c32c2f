//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// An ordered triple of positions forming a row, column, or diagonal.
pub type Line = [Position; 3];

/// The 8 winning lines, scanned in a fixed order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A detected win: the winning player and the line that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    /// The winning player.
    pub player: Player,
    /// The completed line.
    pub line: Line,
}

/// Checks if there is a winner on the board.
///
/// Returns the first completed line in scan order. A legal game can
/// complete at most one line on the move that ends it, so the order
/// never changes who wins.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Win> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(Win { player, line }),
                Square::Empty => None,
            };
        }
    }

    None
}

//! History consistency invariant: history matches the board and numbers
//! its moves consecutively.

use super::Invariant;
use crate::game::Game;

/// Invariant: History length equals number of occupied squares, and
/// sequence numbers run 1, 2, 3, ... without gaps.
///
/// Every move in history corresponds to exactly one occupied square.
/// No moves are missing, no squares are filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        if game.history().len() != game.board().occupied_count() {
            return false;
        }

        game.history()
            .iter()
            .enumerate()
            .all(|(i, mov)| mov.sequence == i + 1)
    }

    fn description() -> &'static str {
        "History matches occupied squares and is numbered consecutively from 1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Player, Square};

    #[test]
    fn test_empty_game_holds() {
        let game = Game::new();
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_single_move_holds() {
        let mut game = Game::new();
        game.make_move(Position::Center).unwrap();

        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].sequence, 1);
    }

    #[test]
    fn test_multiple_moves_hold() {
        let game = Game::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ])
        .unwrap();

        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn test_sequences_renumber_after_undo() {
        let mut game = Game::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
        ])
        .unwrap();

        game.undo_move().unwrap();
        game.make_move(Position::BottomRight).unwrap();

        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history()[2].sequence, 3);
    }

    #[test]
    fn test_corrupted_board_violates() {
        let mut game = Game::new();
        game.make_move(Position::Center).unwrap();

        // Extra occupied square without a history entry
        game.board
            .set(Position::TopLeft, Square::Occupied(Player::O));

        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_corrupted_sequence_violates() {
        let mut game = Game::new();
        game.make_move(Position::Center).unwrap();

        game.history[0].sequence = 7;

        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}

//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::game::Game;
use crate::types::Player;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... pattern, with X first, and the
/// current player must match the parity of the history length. The parity
/// rule holds in terminal states too, since the turn marker advances even
/// on a game-ending move.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        // First move must be X
        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        // Check alternation
        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        // Current player must match history parity
        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        game.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

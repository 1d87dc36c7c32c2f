//! The tic-tac-toe game aggregate.
//!
//! [`Game`] owns the authoritative state for one match and is its only
//! writer. Presentation code reads snapshots through the getters and
//! submits moves through [`Game::make_move`].

use crate::action::{Move, MoveError, UndoError};
use crate::contracts::{Contract, MoveContract};
use crate::position::Position;
use crate::rules;
use crate::rules::Line;
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Complete state of one tic-tac-toe match.
///
/// Created fresh (empty board, X to move) by [`Game::new`] and mutated
/// only through [`Game::make_move`], [`Game::undo_move`], and
/// [`Game::reset`]. The board is always exactly reconstructible by
/// replaying the move history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) winning_line: Option<Line>,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a new game: empty board, X to move, no winner.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn is next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the line that produced the win, if any.
    ///
    /// `Some` exactly when the status is `Won`; a draw has no line.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Makes a move at the given position for the current player.
    ///
    /// On success the mark is placed, the move is appended to the history
    /// with the next 1-based sequence number, the status is re-evaluated,
    /// and the turn passes to the opponent. The turn marker advances even
    /// when the move ends the game; the terminal status gates further play.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] or [`MoveError::SquareOccupied`]
    /// with the state left untouched.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn make_move(&mut self, pos: Position) -> Result<(), MoveError> {
        MoveContract::pre(self, &pos)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));
        let sequence = self.history.len() + 1;
        self.history.push(Move::new(player, pos, sequence));
        self.update_status();
        self.current_player = player.opponent();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(())
    }

    /// Undoes the most recent move and returns it.
    ///
    /// The board is rebuilt by replaying the remaining history onto an
    /// empty board rather than inverting the move in place, and the
    /// player, status, and winning line are recomputed from the rebuilt
    /// board. Undoing a game-ending move returns the game to play.
    ///
    /// # Errors
    ///
    /// Returns [`UndoError::EmptyHistory`] if there is nothing to undo.
    #[instrument(skip(self))]
    pub fn undo_move(&mut self) -> Result<Move, UndoError> {
        let undone = self.history.pop().ok_or(UndoError::EmptyHistory)?;

        let mut board = Board::new();
        for mov in &self.history {
            board.set(mov.position, Square::Occupied(mov.player));
        }
        self.board = board;
        self.current_player = if self.history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        self.update_status();

        Ok(undone)
    }

    /// Resets the game to its initial state. Always succeeds.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Derived statistics for the current game. No side effects.
    #[instrument(skip(self))]
    pub fn stats(&self) -> GameStats {
        let x_moves = self
            .history
            .iter()
            .filter(|mov| mov.player == Player::X)
            .count();
        GameStats {
            total_moves: self.history.len(),
            x_moves,
            o_moves: self.history.len() - x_moves,
            outcome: self.status,
        }
    }

    /// Positions still open for play. Empty once the game is over.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status.is_over() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }

    /// Replays a move sequence from a fresh game.
    ///
    /// Stops at the first rejected move.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &pos in positions {
            game.make_move(pos)?;
        }
        Ok(game)
    }

    /// Recomputes status and winning line from the board.
    fn update_status(&mut self) {
        if let Some(win) = rules::check_winner(&self.board) {
            self.status = GameStatus::Won(win.player);
            self.winning_line = Some(win.line);
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            self.winning_line = None;
        } else {
            self.status = GameStatus::InProgress;
            self.winning_line = None;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Derived statistics for a game, computed from the history and status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    /// Total number of moves played.
    pub total_moves: usize,
    /// Number of moves played by X.
    pub x_moves: usize,
    /// Number of moves played by O.
    pub o_moves: usize,
    /// Current outcome: in progress, won, or drawn.
    pub outcome: GameStatus,
}

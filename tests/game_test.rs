//! Tests for the game engine lifecycle, move handling, and statistics.

use tictactoe_engine::{Game, GameStatus, MoveError, Player, Position, Square};

/// X takes the top row while O answers in the middle row.
fn top_row_win() -> Game {
    Game::replay(&[
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ])
    .expect("scripted win should replay")
}

/// Standard known-draw sequence: X O X / X O O / O X X.
fn full_board_draw() -> Game {
    Game::replay(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::Center,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ])
    .expect("scripted draw should replay")
}

#[test]
fn test_new_game_initial_state() {
    let game = Game::new();

    assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.winning_line(), None);
    assert!(game.history().is_empty());
    assert!(!game.is_over());
}

#[test]
fn test_players_alternate() {
    let mut game = Game::new();
    assert_eq!(game.current_player(), Player::X);

    game.make_move(Position::Center).unwrap();
    assert_eq!(game.current_player(), Player::O);

    game.make_move(Position::TopLeft).unwrap();
    assert_eq!(game.current_player(), Player::X);
}

#[test]
fn test_moves_record_player_and_sequence() {
    let mut game = Game::new();
    game.make_move(Position::Center).unwrap();
    game.make_move(Position::TopLeft).unwrap();

    let history = game.history();
    assert_eq!(history[0].player, Player::X);
    assert_eq!(history[0].position, Position::Center);
    assert_eq!(history[0].sequence, 1);
    assert_eq!(history[1].player, Player::O);
    assert_eq!(history[1].sequence, 2);
}

#[test]
fn test_occupied_square_rejected_and_state_unchanged() {
    let mut game = Game::new();
    game.make_move(Position::Center).unwrap();

    let before = game.clone();
    let result = game.make_move(Position::Center);

    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(game, before);
}

#[test]
fn test_move_after_game_over_rejected_and_state_unchanged() {
    let mut game = top_row_win();
    assert!(game.is_over());

    let before = game.clone();
    let result = game.make_move(Position::BottomRight);

    assert_eq!(result, Err(MoveError::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_win_top_row() {
    let game = top_row_win();

    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.status().winner(), Some(Player::X));
    assert_eq!(
        game.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
    assert!(game.is_over());
}

#[test]
fn test_win_diagonal_for_o() {
    let game = Game::replay(&[
        Position::TopCenter,
        Position::TopLeft,
        Position::MiddleRight,
        Position::Center,
        Position::BottomCenter,
        Position::BottomRight,
    ])
    .unwrap();

    assert_eq!(game.status(), GameStatus::Won(Player::O));
    assert_eq!(
        game.winning_line(),
        Some([Position::TopLeft, Position::Center, Position::BottomRight])
    );
}

#[test]
fn test_draw_full_board() {
    let game = full_board_draw();

    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.status().is_draw());
    assert_eq!(game.winning_line(), None);
    assert!(game.is_over());
    assert_eq!(game.history().len(), 9);
}

#[test]
fn test_turn_marker_advances_on_winning_move() {
    let game = top_row_win();

    // X made the winning fifth move; the marker still passed to O,
    // keeping the parity rule: odd history length, O to move.
    assert_eq!(game.current_player(), Player::O);
    assert_eq!(game.history().len() % 2, 1);
}

#[test]
fn test_reset_clears_everything() {
    let mut game = top_row_win();
    game.reset();

    assert_eq!(game, Game::new());
}

#[test]
fn test_reset_mid_game() {
    let mut game = Game::new();
    game.make_move(Position::Center).unwrap();
    game.make_move(Position::TopLeft).unwrap();
    game.reset();

    assert_eq!(game, Game::new());
}

#[test]
fn test_stats_fresh_game() {
    let stats = Game::new().stats();

    assert_eq!(stats.total_moves, 0);
    assert_eq!(stats.x_moves, 0);
    assert_eq!(stats.o_moves, 0);
    assert_eq!(stats.outcome, GameStatus::InProgress);
}

#[test]
fn test_stats_after_win() {
    let stats = top_row_win().stats();

    assert_eq!(stats.total_moves, 5);
    assert_eq!(stats.x_moves, 3);
    assert_eq!(stats.o_moves, 2);
    assert_eq!(stats.outcome, GameStatus::Won(Player::X));
}

#[test]
fn test_stats_after_draw() {
    let stats = full_board_draw().stats();

    assert_eq!(stats.total_moves, 9);
    assert_eq!(stats.x_moves, 5);
    assert_eq!(stats.o_moves, 4);
    assert_eq!(stats.outcome, GameStatus::Draw);
}

#[test]
fn test_replay_stops_at_rejected_move() {
    let result = Game::replay(&[Position::Center, Position::Center]);
    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
}

#[test]
fn test_valid_moves_shrink_and_empty_when_over() {
    let mut game = Game::new();
    assert_eq!(game.valid_moves().len(), 9);

    game.make_move(Position::Center).unwrap();
    let valid = game.valid_moves();
    assert_eq!(valid.len(), 8);
    assert!(!valid.contains(&Position::Center));

    let game = top_row_win();
    assert!(game.valid_moves().is_empty());
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let game = top_row_win();

    let json = serde_json::to_string(&game).expect("game should serialize");
    let restored: Game = serde_json::from_str(&json).expect("game should deserialize");

    assert_eq!(restored, game);
}

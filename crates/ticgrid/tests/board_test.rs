//! Tests for board construction and the move API.

use ticgrid::{Board, BoardConfig, ConfigError, Move, MoveError, Player, Position, Square};

#[test]
fn test_config_rejects_zero_size() {
    assert_eq!(
        BoardConfig::new(0, "X", "O"),
        Err(ConfigError::SizeTooSmall(0))
    );
}

#[test]
fn test_config_rejects_empty_symbol() {
    assert_eq!(BoardConfig::new(3, "", "O"), Err(ConfigError::EmptySymbol));
    assert_eq!(BoardConfig::new(3, "X", ""), Err(ConfigError::EmptySymbol));
}

#[test]
fn test_config_rejects_duplicate_symbols() {
    assert_eq!(
        BoardConfig::new(3, "X", "X"),
        Err(ConfigError::DuplicateSymbol("X".to_string()))
    );
}

#[test]
fn test_config_rejects_empty_marker_as_symbol() {
    assert_eq!(
        BoardConfig::new(3, ".", "O"),
        Err(ConfigError::ReservedSymbol(".".to_string()))
    );
    assert_eq!(
        BoardConfig::new(3, "X", "."),
        Err(ConfigError::ReservedSymbol(".".to_string()))
    );
}

#[test]
fn test_config_accepts_one_by_one_board() {
    let config = BoardConfig::new(1, "X", "O").unwrap();
    assert_eq!(config.size(), 1);
}

#[test]
fn test_new_board_all_empty() {
    let board = Board::new(BoardConfig::standard());
    assert_eq!(board.squares().len(), 9);
    assert!(board.squares().iter().all(|s| *s == Square::Empty));
}

#[test]
fn test_out_of_range_position_is_illegal() {
    for size in 1..6 {
        let config = BoardConfig::new(size, "X", "O").unwrap();
        let board = Board::new(config);
        // Row N is one past the last valid index for any N.
        let action = Move::new(Player::A, Position::new(size, 0));
        assert!(!board.is_legal(action));
    }
}

#[test]
fn test_out_of_range_move_rejected() {
    let mut board = Board::new(BoardConfig::standard());
    let action = Move::new(Player::A, Position::new(3, 0));
    assert_eq!(
        board.apply_move(action),
        Err(MoveError::OutOfBounds(Position::new(3, 0)))
    );
}

#[test]
fn test_occupied_square_rejected_and_board_unchanged() {
    let mut board = Board::new(BoardConfig::standard());
    let action = Move::new(Player::A, Position::new(1, 1));
    board.apply_move(action).unwrap();

    let before = board.clone();
    let replay = Move::new(Player::B, Position::new(1, 1));
    assert_eq!(
        board.apply_move(replay),
        Err(MoveError::Occupied(Position::new(1, 1)))
    );
    assert_eq!(board, before);
    assert_eq!(
        board.get(Position::new(1, 1)),
        Some(Square::Occupied(Player::A))
    );
}

#[test]
fn test_occupied_rejection_is_repeatable() {
    let mut board = Board::new(BoardConfig::standard());
    let action = Move::new(Player::A, Position::new(0, 0));
    board.apply_move(action).unwrap();

    // Re-applying the same position keeps failing without altering the square.
    for _ in 0..3 {
        assert!(board.apply_move(action).is_err());
        assert_eq!(
            board.get(Position::new(0, 0)),
            Some(Square::Occupied(Player::A))
        );
    }
}

#[test]
fn test_legal_moves_row_major_on_empty_board() {
    let board = Board::new(BoardConfig::standard());
    let moves = board.legal_moves();
    assert_eq!(moves.len(), 9);
    assert_eq!(moves[0], Position::new(0, 0));
    assert_eq!(moves[1], Position::new(0, 1));
    assert_eq!(moves[3], Position::new(1, 0));
    assert_eq!(moves[8], Position::new(2, 2));
}

#[test]
fn test_legal_moves_filters_occupied() {
    let mut board = Board::new(BoardConfig::standard());
    board
        .apply_move(Move::new(Player::A, Position::new(0, 0)))
        .unwrap();
    board
        .apply_move(Move::new(Player::B, Position::new(1, 1)))
        .unwrap();

    let moves = board.legal_moves();
    assert_eq!(moves.len(), 7);
    assert!(!moves.contains(&Position::new(0, 0)));
    assert!(!moves.contains(&Position::new(1, 1)));
    assert!(moves.contains(&Position::new(2, 2)));
}

#[test]
fn test_snapshot_maps_squares_to_symbols() {
    let config = BoardConfig::new(3, "X", "O").unwrap();
    let mut board = Board::new(config);
    board
        .apply_move(Move::new(Player::A, Position::new(0, 0)))
        .unwrap();
    board
        .apply_move(Move::new(Player::B, Position::new(2, 1)))
        .unwrap();

    let snapshot = board.snapshot();
    assert_eq!(snapshot[0][0], "X");
    assert_eq!(snapshot[2][1], "O");
    assert_eq!(snapshot[1][1], ".");
}

#[test]
fn test_board_serde_round_trip() {
    let mut board = Board::new(BoardConfig::standard());
    board
        .apply_move(Move::new(Player::A, Position::new(0, 2)))
        .unwrap();

    let json = serde_json::to_string(&board).unwrap();
    let restored: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(board, restored);
}

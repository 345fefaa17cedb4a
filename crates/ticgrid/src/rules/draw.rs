//! Draw detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::Square;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::action::Move;
    use crate::board::BoardConfig;
    use crate::position::Position;
    use crate::types::Player;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(BoardConfig::standard());
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(BoardConfig::standard());
        board
            .apply_move(Move::new(Player::A, Position::new(1, 1)))
            .unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(BoardConfig::standard());
        for row in 0..3 {
            for col in 0..3 {
                board
                    .apply_move(Move::new(Player::A, Position::new(row, col)))
                    .unwrap();
            }
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X - full grid with no three-in-a-row
        let grid = [
            (Player::A, 0, 0),
            (Player::B, 0, 1),
            (Player::A, 0, 2),
            (Player::A, 1, 0),
            (Player::B, 1, 1),
            (Player::B, 1, 2),
            (Player::B, 2, 0),
            (Player::A, 2, 1),
            (Player::A, 2, 2),
        ];
        let mut board = Board::new(BoardConfig::standard());
        for (player, row, col) in grid {
            board
                .apply_move(Move::new(player, Position::new(row, col)))
                .unwrap();
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new(BoardConfig::standard());
        for col in 0..3 {
            board
                .apply_move(Move::new(Player::A, Position::new(0, col)))
                .unwrap();
        }
        assert!(!is_draw(&board));
    }
}

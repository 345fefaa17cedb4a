//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::position::Position;
use crate::types::{Player, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Scans the N rows, N columns, and both diagonals, and returns the owner
/// of the first line found to be entirely one player's squares. Boards
/// where both players hold a complete line are unreachable under
/// alternating play; on such a board the first line met by the scan wins.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    let n = board.size();

    for row in 0..n {
        if let Some(player) = line_owner(board, (0..n).map(|col| Position::new(row, col))) {
            return Some(player);
        }
    }

    for col in 0..n {
        if let Some(player) = line_owner(board, (0..n).map(|row| Position::new(row, col))) {
            return Some(player);
        }
    }

    if let Some(player) = line_owner(board, (0..n).map(|i| Position::new(i, i))) {
        return Some(player);
    }

    line_owner(board, (0..n).map(|i| Position::new(i, n - 1 - i)))
}

/// Returns the player owning every square along the line, if any.
fn line_owner(board: &Board, line: impl Iterator<Item = Position>) -> Option<Player> {
    let mut owner = None;
    for pos in line {
        match board.get(pos)? {
            Square::Empty => return None,
            Square::Occupied(player) => match owner {
                None => owner = Some(player),
                Some(existing) if existing == player => {}
                Some(_) => return None,
            },
        }
    }
    owner
}

//! Board rendering with row and column index headers.

use ticgrid::Board;

/// Formats the board snapshot for the terminal.
///
/// Layout lives here, not in the engine: the snapshot is a plain grid of
/// display tokens and this function adds the index headers around it.
pub fn render(board: &Board) -> String {
    let snapshot = board.snapshot();
    let mut out = String::from("Current board:\n\n");

    let header = (0..board.size())
        .map(|col| col.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(&format!("  {header}\n"));

    for (row, tokens) in snapshot.iter().enumerate() {
        out.push_str(&format!("{row} {}\n", tokens.join(" ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticgrid::{Board, BoardConfig, Move, Player, Position};

    #[test]
    fn test_render_empty_board() {
        let board = Board::new(BoardConfig::standard());
        let text = render(&board);
        assert!(text.contains("  0 1 2"));
        assert!(text.contains("0 . . ."));
        assert!(text.contains("2 . . ."));
    }

    #[test]
    fn test_render_shows_marks() {
        let mut board = Board::new(BoardConfig::standard());
        board
            .apply_move(Move::new(Player::A, Position::new(1, 1)))
            .unwrap();
        let text = render(&board);
        assert!(text.contains("1 . X ."));
    }
}

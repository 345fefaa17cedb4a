//! Board storage, construction parameters, and the move API.

use crate::action::{Move, MoveError};
use crate::position::Position;
use crate::rules;
use crate::types::{Outcome, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Display token for an empty square.
pub const EMPTY_MARKER: &str = ".";

/// Validated construction parameters for a board.
///
/// A `BoardConfig` can only be obtained through [`BoardConfig::new`], so
/// holding one guarantees the size and symbols are usable and board
/// construction itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    size: usize,
    symbol_a: String,
    symbol_b: String,
}

/// Errors that can occur when validating construction parameters.
///
/// All variants are fatal to construction: the caller never obtains a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    /// Board size below the 1x1 minimum.
    #[display("board size must be at least 1, got {}", _0)]
    SizeTooSmall(usize),

    /// A player symbol was empty.
    #[display("player symbols must be non-empty")]
    EmptySymbol,

    /// Both players were given the same symbol.
    #[display("player symbols must be distinct, both were {:?}", _0)]
    DuplicateSymbol(String),

    /// A player symbol collides with the empty-square marker.
    #[display("player symbol {:?} collides with the empty marker", _0)]
    ReservedSymbol(String),
}

impl std::error::Error for ConfigError {}

impl BoardConfig {
    /// Validates board size and player display symbols.
    ///
    /// # Errors
    ///
    /// Fails if the size is zero, either symbol is empty or equal to
    /// [`EMPTY_MARKER`], or the two symbols are not distinct.
    pub fn new(
        size: usize,
        symbol_a: impl Into<String>,
        symbol_b: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let symbol_a = symbol_a.into();
        let symbol_b = symbol_b.into();

        if size < 1 {
            return Err(ConfigError::SizeTooSmall(size));
        }
        if symbol_a.is_empty() || symbol_b.is_empty() {
            return Err(ConfigError::EmptySymbol);
        }
        if symbol_a == EMPTY_MARKER {
            return Err(ConfigError::ReservedSymbol(symbol_a));
        }
        if symbol_b == EMPTY_MARKER {
            return Err(ConfigError::ReservedSymbol(symbol_b));
        }
        if symbol_a == symbol_b {
            return Err(ConfigError::DuplicateSymbol(symbol_a));
        }

        Ok(Self {
            size,
            symbol_a,
            symbol_b,
        })
    }

    /// Standard 3x3 game with X and O.
    pub fn standard() -> Self {
        Self {
            size: 3,
            symbol_a: "X".to_string(),
            symbol_b: "O".to_string(),
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the display symbol for a player.
    pub fn symbol(&self, player: Player) -> &str {
        match player {
            Player::A => &self.symbol_a,
            Player::B => &self.symbol_b,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// N-by-N tic-tac-toe board.
///
/// The board is the unit of game state: squares start empty and only ever
/// transition from empty to occupied through [`Board::apply_move`]. Turn
/// alternation is not enforced here; that is the game loop's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates a new board with all squares empty.
    #[instrument]
    pub fn new(config: BoardConfig) -> Self {
        let squares = vec![Square::Empty; config.size() * config.size()];
        Self { config, squares }
    }

    /// Returns the board size.
    pub fn size(&self) -> usize {
        self.config.size
    }

    /// Returns the construction parameters.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let n = self.config.size;
        (pos.row < n && pos.col < n).then(|| pos.row * n + pos.col)
    }

    /// Gets the square at the given position, or `None` out of range.
    pub fn get(&self, pos: Position) -> Option<Square> {
        self.index(pos).map(|i| self.squares[i])
    }

    /// Checks if a position is within range and its square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Checks whether a move could be applied to the current board.
    ///
    /// A pure predicate, not an error channel: any out-of-range position
    /// yields `false`. Used both for validating caller input and for
    /// enumerating legal moves.
    pub fn is_legal(&self, action: Move) -> bool {
        self.is_empty(action.position)
    }

    /// Applies a move, setting the square to the player's mark.
    ///
    /// This is the only mutator. Occupied squares never change again.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the position is out of range or occupied.
    /// The board is left unchanged on failure.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, action: Move) -> Result<(), MoveError> {
        let index = self
            .index(action.position)
            .ok_or(MoveError::OutOfBounds(action.position))?;
        if self.squares[index] != Square::Empty {
            return Err(MoveError::Occupied(action.position));
        }

        self.squares[index] = Square::Occupied(action.player);
        debug!(player = ?action.player, position = %action.position, "move applied");
        Ok(())
    }

    /// All empty positions, in row-major order.
    pub fn legal_moves(&self) -> Vec<Position> {
        let n = self.config.size;
        (0..n)
            .flat_map(|row| (0..n).map(move |col| Position::new(row, col)))
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Evaluates the terminal state from current square contents alone.
    ///
    /// A player wins iff some row, some column, the main diagonal, or the
    /// anti-diagonal is entirely theirs. A full board with no complete line
    /// is a draw; anything else is in progress.
    #[instrument(skip(self))]
    pub fn evaluate(&self) -> Outcome {
        if let Some(winner) = rules::check_winner(self) {
            return Outcome::Won(winner);
        }
        if rules::is_full(self) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Projects the board into a grid of display tokens.
    ///
    /// Side-effect free; layout (headers, separators) is a renderer concern.
    pub fn snapshot(&self) -> Vec<Vec<String>> {
        let n = self.config.size;
        (0..n)
            .map(|row| {
                (0..n)
                    .map(|col| match self.squares[row * n + col] {
                        Square::Empty => EMPTY_MARKER.to_string(),
                        Square::Occupied(player) => self.config.symbol(player).to_string(),
                    })
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::standard())
    }
}

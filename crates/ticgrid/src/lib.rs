//! N-by-N tic-tac-toe board engine with pluggable move sources.
//!
//! # Architecture
//!
//! - **Board**: owns square storage, validates and applies moves, and
//!   evaluates the terminal state from current contents alone.
//! - **Rules**: pure win/draw predicates over a board.
//! - **Players**: the [`MoveSource`] capability for automated move
//!   selection, with a uniformly random reference implementation.
//!
//! Turn alternation is the caller's job: the engine accepts any legal move
//! regardless of whose turn it is, so a game loop (or a test) decides the
//! order of play.
//!
//! # Example
//!
//! ```
//! use ticgrid::{Board, BoardConfig, Move, Outcome, Player, Position};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BoardConfig::new(3, "X", "O")?;
//! let mut board = Board::new(config);
//! board.apply_move(Move::new(Player::A, Position::new(1, 1)))?;
//! assert_eq!(board.evaluate(), Outcome::InProgress);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod position;
mod types;

// Public modules
pub mod players;
pub mod rules;

// Crate-level exports - moves and move errors
pub use action::{Move, MoveError};

// Crate-level exports - board and construction
pub use board::{Board, BoardConfig, ConfigError, EMPTY_MARKER};

// Crate-level exports - move sources
pub use players::{ChoiceError, MoveSource, RandomSource};

// Crate-level exports - coordinates and outcomes
pub use position::Position;
pub use types::{Outcome, Player, Square};

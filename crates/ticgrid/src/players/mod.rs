//! Move source capability and implementations.

mod random;

pub use random::RandomSource;

use crate::position::Position;

/// A capability that selects one move from the current legal set.
///
/// Implementations hold no game-theoretic state between calls: they see
/// only the legal moves they are handed, not the board or its history.
/// Injecting the capability lets the game loop swap the reference random
/// policy for deterministic doubles in tests.
pub trait MoveSource {
    /// Chooses one move from `legal_moves`.
    ///
    /// The returned position is always an element of `legal_moves`. Callers
    /// must check the board for a terminal state first; invoking a source
    /// with an empty slice is a caller bug, signalled as
    /// [`ChoiceError::NoLegalMoves`] rather than an undefined pick.
    fn choose_move(&mut self, legal_moves: &[Position]) -> Result<Position, ChoiceError>;

    /// Returns the source's display name.
    fn name(&self) -> &str;
}

/// Error raised when a move source is invoked without any legal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ChoiceError {
    /// The legal-move set was empty.
    #[display("no legal moves to choose from")]
    NoLegalMoves,
}

impl std::error::Error for ChoiceError {}

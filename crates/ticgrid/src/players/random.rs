//! Uniformly random move selection.

use super::{ChoiceError, MoveSource};
use crate::position::Position;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Automated player that picks uniformly at random over the legal moves.
///
/// Intentionally unintelligent: no lookahead, no state between calls.
/// Uses a seedable ChaCha RNG so games are reproducible when a seed is
/// supplied.
pub struct RandomSource {
    name: String,
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Creates a source seeded from the operating system.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates a source with a fixed seed for reproducible games.
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl MoveSource for RandomSource {
    fn choose_move(&mut self, legal_moves: &[Position]) -> Result<Position, ChoiceError> {
        let position = legal_moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(ChoiceError::NoLegalMoves)?;
        debug!(source = %self.name, position = %position, "random move chosen");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

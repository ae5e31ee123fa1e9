use itertools::Itertools;
use log::trace;
use rubik_core::{Layer, Move, MoveSequence};
use thiserror::Error;

use crate::ScrambleGenerator;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("At least one allowed move is required")]
    NoAllowedMoves,
    #[error(
        "Every allowed move turns the {0} layer, so scrambles longer than one move cannot be built"
    )]
    SingleLayer(Layer),
}

/// Draws moves uniformly from a set of allowed moves using an injected random
/// number generator.
#[derive(Debug, Clone)]
pub struct RandomScrambleGenerator {
    rng: fastrand::Rng,
    allowed_moves: Vec<Move>,
}

impl RandomScrambleGenerator {
    /// A generator over all 18 distinct moves.
    #[must_use]
    pub fn new(rng: fastrand::Rng) -> Self {
        Self {
            rng,
            allowed_moves: Move::all().collect(),
        }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(fastrand::Rng::with_seed(seed))
    }

    /// A generator over a custom set of moves. Duplicates are ignored.
    ///
    /// # Errors
    ///
    /// If `allowed_moves` is empty or only turns a single layer, in which case
    /// consecutive moves would always merge and scrambles of an exact length
    /// could never be produced.
    pub fn with_allowed_moves(
        rng: fastrand::Rng,
        allowed_moves: impl IntoIterator<Item = Move>,
    ) -> Result<Self, GeneratorError> {
        let allowed_moves = allowed_moves.into_iter().unique().collect_vec();
        let Some(first) = allowed_moves.first() else {
            return Err(GeneratorError::NoAllowedMoves);
        };
        if allowed_moves.iter().all(|move_| move_.layer() == first.layer()) {
            return Err(GeneratorError::SingleLayer(first.layer()));
        }
        Ok(Self { rng, allowed_moves })
    }

    #[must_use]
    pub fn allowed_moves(&self) -> &[Move] {
        &self.allowed_moves
    }

    /// A uniformly random allowed move.
    pub fn random_move(&mut self) -> Move {
        self.allowed_moves[self.rng.usize(..self.allowed_moves.len())]
    }
}

impl Default for RandomScrambleGenerator {
    fn default() -> Self {
        Self::new(fastrand::Rng::new())
    }
}

impl ScrambleGenerator for RandomScrambleGenerator {
    fn random_scramble(&mut self, length: usize) -> MoveSequence {
        let mut scramble = MoveSequence::new();
        // Simplifying can merge or cancel moves, so top up until it no longer
        // shrinks the scramble.
        while scramble.len() != length {
            let missing = length - scramble.len();
            scramble.extend((0..missing).map(|_| self.random_move()));
            scramble.simplify();
        }
        trace!("Generated scramble {scramble}");
        scramble
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rubik_core::Direction;

    #[test]
    fn test_rejects_empty_move_set() {
        assert_eq!(
            RandomScrambleGenerator::with_allowed_moves(fastrand::Rng::with_seed(0), []).unwrap_err(),
            GeneratorError::NoAllowedMoves
        );
    }

    #[test]
    fn test_rejects_single_layer_move_set() {
        let moves = [
            Move::new(Layer::R, Direction::Clockwise),
            Move::new(Layer::R, Direction::Double),
        ];
        assert_eq!(
            RandomScrambleGenerator::with_allowed_moves(fastrand::Rng::with_seed(0), moves)
                .unwrap_err(),
            GeneratorError::SingleLayer(Layer::R)
        );
    }

    #[test]
    fn test_custom_moves_are_deduplicated() {
        let r = Move::new(Layer::R, Direction::Clockwise);
        let u = Move::new(Layer::U, Direction::Clockwise);
        let generator =
            RandomScrambleGenerator::with_allowed_moves(fastrand::Rng::with_seed(0), [r, u, r, u])
                .unwrap();
        assert_eq!(generator.allowed_moves(), &[r, u]);
    }

    #[test]
    fn test_random_move_covers_every_move() {
        let mut generator = RandomScrambleGenerator::with_seed(5);
        let drawn: std::collections::HashSet<Move> =
            (0..2000).map(|_| generator.random_move()).collect();
        assert_eq!(drawn.len(), 18);
    }

    #[test]
    fn test_zero_length_scramble() {
        let mut generator = RandomScrambleGenerator::with_seed(1);
        assert!(generator.random_scramble(0).is_empty());
    }
}

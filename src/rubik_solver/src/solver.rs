use std::time::{Duration, Instant};

use log::{debug, info};
use rubik_core::{Cube, MoveSequence};
use thiserror::Error;

use crate::{
    CubeSolver, ScrambleGenerator, generator::RandomScrambleGenerator, start, success, working,
};

const PROGRESS_INTERVAL: u64 = 100_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("No solution found after {attempts} random scrambles")]
    AttemptsExhausted { attempts: u64 },
}

/// A solution together with how much work it took to find it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvingMeta {
    pub solution: MoveSequence,
    pub elapsed: Duration,
    pub analyzed_scrambles: u64,
    pub analyzed_moves: u64,
}

/// The simplest possible solver: apply random scrambles until one of them
/// happens to pass through the solved state. Usable for 2x2x2 cubes a few
/// moves away from solved, hopeless for anything else.
#[derive(Debug, Clone)]
pub struct RandomCubeSolver<G = RandomScrambleGenerator> {
    generator: G,
    max_scramble_length: usize,
    max_attempts: Option<u64>,
}

impl<G: ScrambleGenerator> RandomCubeSolver<G> {
    pub const DEFAULT_MAX_SCRAMBLE_LENGTH: usize = 100;

    #[must_use]
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            max_scramble_length: Self::DEFAULT_MAX_SCRAMBLE_LENGTH,
            max_attempts: None,
        }
    }

    /// Length of every random scramble tried, at least one move.
    #[must_use]
    pub fn with_max_scramble_length(mut self, max_scramble_length: usize) -> Self {
        self.max_scramble_length = max_scramble_length.max(1);
        self
    }

    /// Give up after this many scrambles instead of searching forever.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    #[must_use]
    pub fn max_scramble_length(&self) -> usize {
        self.max_scramble_length
    }

    #[must_use]
    pub fn max_attempts(&self) -> Option<u64> {
        self.max_attempts
    }
}

impl Default for RandomCubeSolver<RandomScrambleGenerator> {
    fn default() -> Self {
        Self::new(RandomScrambleGenerator::default())
    }
}

impl<G: ScrambleGenerator> CubeSolver for RandomCubeSolver<G> {
    /// Searches on a copy of `cube`, which is left untouched. Each scramble
    /// is applied move by move and cut off at the first solved state; failed
    /// scrambles are undone before the next one is tried.
    fn solve(&mut self, cube: &Cube) -> Result<SolvingMeta, SolverError> {
        info!(
            start!("Searching for a random solution of a {0}x{0}x{0} cube"),
            cube.dimension()
        );
        let start = Instant::now();
        let mut working = cube.clone();
        let mut analyzed_scrambles = 0;
        let mut analyzed_moves = 0;

        let solution = if working.is_solved() {
            MoveSequence::new()
        } else {
            loop {
                if self
                    .max_attempts
                    .is_some_and(|max_attempts| analyzed_scrambles >= max_attempts)
                {
                    return Err(SolverError::AttemptsExhausted {
                        attempts: analyzed_scrambles,
                    });
                }

                let mut scramble = self.generator.random_scramble(self.max_scramble_length);
                analyzed_scrambles += 1;

                let mut applied = None;
                for (i, &move_) in scramble.iter().enumerate() {
                    working.apply(move_);
                    analyzed_moves += 1;
                    if working.is_solved() {
                        applied = Some(i + 1);
                        break;
                    }
                }

                if let Some(applied) = applied {
                    scramble.truncate(applied);
                    break scramble;
                }
                working.apply_sequence(&scramble.inverted());

                if analyzed_scrambles % PROGRESS_INTERVAL == 0 {
                    debug!(
                        working!("Analyzed {} scrambles and {} moves in {:.3}s"),
                        analyzed_scrambles,
                        analyzed_moves,
                        start.elapsed().as_secs_f64()
                    );
                }
            }
        };

        let elapsed = start.elapsed();
        info!(
            success!("Found the {}-move solution {:?} in {:.3}s after {} scrambles"),
            solution.len(),
            solution.to_string(),
            elapsed.as_secs_f64(),
            analyzed_scrambles
        );
        Ok(SolvingMeta {
            solution,
            elapsed,
            analyzed_scrambles,
            analyzed_moves,
        })
    }
}

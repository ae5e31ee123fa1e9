//! Random scramble generation and a brute-force random solver built on
//! `rubik_core`.

pub mod generator;
pub mod solver;

use rubik_core::{Cube, MoveSequence};

pub use generator::{GeneratorError, RandomScrambleGenerator};
pub use solver::{RandomCubeSolver, SolverError, SolvingMeta};

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}

/// Something that produces scrambles of an exact length.
pub trait ScrambleGenerator {
    /// A scramble of exactly `length` moves in which no two neighboring
    /// moves can be merged by [`MoveSequence::simplify`].
    fn random_scramble(&mut self, length: usize) -> MoveSequence;
}

/// Something that finds a sequence of moves solving a cube.
pub trait CubeSolver {
    /// Find a solution for the state `cube` is in when this is called.
    ///
    /// # Errors
    ///
    /// If the solver gives up before finding a solution.
    fn solve(&mut self, cube: &Cube) -> Result<SolvingMeta, SolverError>;
}

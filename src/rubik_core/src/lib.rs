//! A model of the 2x2x2 and 3x3x3 cubes and of the algebra of their face
//! turns in WCA notation.
//!
//! - [`Cube`] owns six [`Face`]s and turns them in place.
//! - [`Move`] is a single canonical turn, parsed leniently and rendered
//!   strictly, that can be connected with another turn of the same layer.
//! - [`MoveSequence`] is an ordered list of moves that can be reversed and
//!   simplified.
//!
//! ```
//! use rubik_core::{Cube, MoveSequence};
//!
//! let mut cube = Cube::new(3).unwrap();
//! let mut scramble = MoveSequence::parse("R U R' U'");
//! cube.apply_sequence(&scramble);
//! assert!(!cube.is_solved());
//!
//! scramble.reverse();
//! cube.apply_sequence(&scramble);
//! assert!(cube.is_solved());
//! ```

pub mod cube;
pub mod face;
pub mod moves;
pub mod sequence;
pub mod sticker;

pub use cube::{Cube, CubeError};
pub use face::{Adjacency, Edge, Face, Slot};
pub use moves::{ConnectError, Direction, Layer, Move, ParseMoveError};
pub use sequence::MoveSequence;
pub use sticker::Color;

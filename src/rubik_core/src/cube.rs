use std::fmt::Display;

use log::trace;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::{
    face::{self, Adjacency, Edge, Face},
    moves::{Layer, Move},
    sequence::MoveSequence,
    sticker::Color,
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeError {
    #[error("Unsupported cube dimension {0}, only 2x2x2 and 3x3x3 cubes are supported")]
    UnsupportedDimension(usize),
}

/// Neighbors of every face in above, below, right, left order, paired with the
/// edge of the neighbor that touches the face. The table cannot be derived
/// from a formula; it encodes how the six grids are laid out on the cube.
const WIRING: [(Layer, [(Layer, Edge); 4]); Layer::COUNT] = [
    (
        Layer::U,
        [
            (Layer::B, Edge::Bottom),
            (Layer::F, Edge::Top),
            (Layer::R, Edge::Left),
            (Layer::L, Edge::Right),
        ],
    ),
    (
        Layer::D,
        [
            (Layer::F, Edge::Bottom),
            (Layer::B, Edge::Top),
            (Layer::R, Edge::Right),
            (Layer::L, Edge::Left),
        ],
    ),
    (
        Layer::R,
        [
            (Layer::B, Edge::Right),
            (Layer::F, Edge::Right),
            (Layer::D, Edge::Right),
            (Layer::U, Edge::Right),
        ],
    ),
    (
        Layer::L,
        [
            (Layer::B, Edge::Left),
            (Layer::F, Edge::Left),
            (Layer::U, Edge::Left),
            (Layer::D, Edge::Left),
        ],
    ),
    (
        Layer::F,
        [
            (Layer::U, Edge::Bottom),
            (Layer::D, Edge::Top),
            (Layer::R, Edge::Bottom),
            (Layer::L, Edge::Bottom),
        ],
    ),
    (
        Layer::B,
        [
            (Layer::D, Edge::Bottom),
            (Layer::U, Edge::Top),
            (Layer::R, Edge::Top),
            (Layer::L, Edge::Top),
        ],
    ),
];

/// Color of every face when the cube is solved.
fn solved_color(layer: Layer) -> Color {
    match layer {
        Layer::U => Color::White,
        Layer::D => Color::Yellow,
        Layer::R => Color::Red,
        Layer::L => Color::Orange,
        Layer::F => Color::Green,
        Layer::B => Color::Blue,
    }
}

/// A 2x2x2 or 3x3x3 cube made of six faces wired together once at
/// construction.
///
/// Turning a cube mutates it in place. Clone the cube to try out moves
/// without losing the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    dimension: usize,
    // indexed by `Layer::index`
    faces: [Face; Layer::COUNT],
}

impl Cube {
    /// Create a solved cube.
    ///
    /// # Errors
    ///
    /// If `dimension` is not 2 or 3.
    pub fn new(dimension: usize) -> Result<Self, CubeError> {
        let face = |layer: Layer| {
            let (wired_layer, neighbors) = WIRING[layer.index()];
            debug_assert_eq!(wired_layer, layer);
            let adjacency =
                neighbors.map(|(neighbor, edge)| Adjacency { neighbor, edge });
            Face::new(layer, dimension, solved_color(layer), adjacency)
        };

        Ok(Self {
            dimension,
            faces: [
                face(Layer::U)?,
                face(Layer::D)?,
                face(Layer::R)?,
                face(Layer::L)?,
                face(Layer::F)?,
                face(Layer::B)?,
            ],
        })
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[must_use]
    pub fn face(&self, layer: Layer) -> &Face {
        &self.faces[layer.index()]
    }

    /// All faces in U, D, R, L, F, B order.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Turn the layer named by `move_`.
    pub fn apply(&mut self, move_: Move) {
        trace!("Applying {move_}");
        face::rotate(&mut self.faces, move_.layer(), move_.direction());
    }

    /// Apply every move of `sequence` in order.
    pub fn apply_sequence(&mut self, sequence: &MoveSequence) {
        for &move_ in sequence.iter() {
            self.apply(move_);
        }
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(Face::all_fields_equal)
    }
}

impl Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cube {}x{}x{}",
            self.dimension, self.dimension, self.dimension
        )?;
        for layer in Layer::iter() {
            write!(f, "\n{}", self.face(layer))?;
        }
        Ok(())
    }
}

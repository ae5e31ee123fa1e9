//! The rotation engine.
//!
//! A face is an N×N grid of stickers. Turning a face permutes its own grid and
//! cycles the four stripes of stickers it shares with its neighbors. Faces
//! never own their neighbors: the six faces live in the cube's arena and
//! adjacency records refer to them by [`Layer`].

use std::fmt::Display;

use itertools::Itertools;

use crate::{
    cube::CubeError,
    moves::{Direction, Layer},
    sticker::Color,
};

pub const MIN_DIMENSION: usize = 2;
pub const MAX_DIMENSION: usize = 3;

/// A row or column on the boundary of a face's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// The four neighbor slots of a face, as seen when looking at the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Above,
    Below,
    RightOf,
    LeftOf,
}

impl Slot {
    const ALL: [Slot; 4] = [Slot::Above, Slot::Below, Slot::RightOf, Slot::LeftOf];

    fn index(self) -> usize {
        match self {
            Slot::Above => 0,
            Slot::Below => 1,
            Slot::RightOf => 2,
            Slot::LeftOf => 3,
        }
    }
}

/// Which face sits in a neighbor slot, and which edge of that face touches
/// this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacency {
    pub neighbor: Layer,
    pub edge: Edge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    layer: Layer,
    dimension: usize,
    // row-major
    stickers: Box<[Color]>,
    // indexed by `Slot::index`
    adjacency: [Adjacency; 4],
}

impl Face {
    /// Create a face of a single color.
    ///
    /// # Errors
    ///
    /// If `dimension` is not 2 or 3.
    pub fn new(
        layer: Layer,
        dimension: usize,
        color: Color,
        adjacency: [Adjacency; 4],
    ) -> Result<Self, CubeError> {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
            return Err(CubeError::UnsupportedDimension(dimension));
        }
        Ok(Self {
            layer,
            dimension,
            stickers: vec![color; dimension * dimension].into_boxed_slice(),
            adjacency,
        })
    }

    #[must_use]
    pub fn layer(&self) -> Layer {
        self.layer
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// # Panics
    ///
    /// If `row` or `col` is out of bounds.
    #[must_use]
    pub fn sticker(&self, row: usize, col: usize) -> Color {
        assert!(row < self.dimension && col < self.dimension);
        self.stickers[row * self.dimension + col]
    }

    /// The stickers in row-major order.
    #[must_use]
    pub fn stickers(&self) -> &[Color] {
        &self.stickers
    }

    #[must_use]
    pub fn adjacency(&self, slot: Slot) -> Adjacency {
        self.adjacency[slot.index()]
    }

    #[must_use]
    pub fn all_fields_equal(&self) -> bool {
        self.stickers.iter().all_equal()
    }

    /// Grid position of the `i`th sticker along `edge`. Every edge is walked
    /// in the same rotational sense, clockwise around the face, so a stripe
    /// read from one edge can be written to another unchanged.
    fn edge_position(&self, edge: Edge, i: usize) -> usize {
        let n = self.dimension;
        let (row, col) = match edge {
            Edge::Top => (0, i),
            Edge::Right => (i, n - 1),
            Edge::Bottom => (n - 1, n - 1 - i),
            Edge::Left => (n - 1 - i, 0),
        };
        row * n + col
    }

    pub(crate) fn read_edge(&self, edge: Edge) -> Vec<Color> {
        (0..self.dimension)
            .map(|i| self.stickers[self.edge_position(edge, i)])
            .collect()
    }

    pub(crate) fn write_edge(&mut self, edge: Edge, stripe: &[Color]) {
        debug_assert_eq!(stripe.len(), self.dimension);
        for (i, &color) in stripe.iter().enumerate() {
            let position = self.edge_position(edge, i);
            self.stickers[position] = color;
        }
    }

    fn transpose(&mut self) {
        let n = self.dimension;
        for row in 0..n {
            for col in row + 1..n {
                self.stickers.swap(row * n + col, col * n + row);
            }
        }
    }

    fn reverse_columns(&mut self) {
        for row in self.stickers.chunks_exact_mut(self.dimension) {
            row.reverse();
        }
    }

    fn reverse_rows(&mut self) {
        // Reversing the whole grid reverses both orders, so undo the columns.
        self.stickers.reverse();
        self.reverse_columns();
    }

    /// Permute this face's own grid. Neighbor stripes are left alone; see
    /// [`rotate`] for the full turn.
    pub(crate) fn rotate_grid(&mut self, direction: Direction) {
        match direction {
            Direction::Clockwise => {
                self.transpose();
                self.reverse_columns();
            }
            Direction::CounterClockwise => {
                self.transpose();
                self.reverse_rows();
            }
            // Point reflection through the center.
            Direction::Double => self.stickers.reverse(),
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}x{}", self.layer, self.dimension, self.dimension)?;
        for row in self.stickers.chunks_exact(self.dimension) {
            write!(f, "\n{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}

/// Turn the face of `layer` in `faces`, which must be indexed by
/// `Layer::index`.
pub(crate) fn rotate(faces: &mut [Face; Layer::COUNT], layer: Layer, direction: Direction) {
    let face = &mut faces[layer.index()];
    face.rotate_grid(direction);
    let adjacency = face.adjacency;

    let [above, below, right, left] = Slot::ALL.map(|slot| {
        let Adjacency { neighbor, edge } = adjacency[slot.index()];
        faces[neighbor.index()].read_edge(edge)
    });

    // New contents of the above, below, right and left stripes.
    let stripes = match direction {
        Direction::Clockwise => [left, right, above, below],
        Direction::CounterClockwise => [right, left, below, above],
        Direction::Double => [below, above, left, right],
    };

    for (slot, stripe) in Slot::ALL.into_iter().zip(stripes) {
        let Adjacency { neighbor, edge } = adjacency[slot.index()];
        faces[neighbor.index()].write_edge(edge, &stripe);
    }
}

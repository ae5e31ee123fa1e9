//! Face turns in WCA notation.
//!
//! A [`Move`] names the layer being turned and how far it is turned. Parsing
//! is lenient (the first notation token anywhere in the input wins) while
//! rendering is canonical, so `"R2'"`, `" R2 "` and `"R2"` all render as
//! `R2`.

use std::{fmt::Display, str::FromStr};

use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

/// The six outer layers of the cube. Doubles as the identifier of the face
/// that a layer turn rotates.
///
/// - U: top face
/// - D: bottom face
/// - R: right face
/// - L: left face
/// - F: front face
/// - B: back face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum Layer {
    U,
    D,
    R,
    L,
    F,
    B,
}

impl Layer {
    pub const COUNT: usize = 6;

    /// Parse a single uppercase notation letter.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'U' => Some(Layer::U),
            'D' => Some(Layer::D),
            'R' => Some(Layer::R),
            'L' => Some(Layer::L),
            'F' => Some(Layer::F),
            'B' => Some(Layer::B),
            _ => None,
        }
    }

    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Layer::U => 'U',
            Layer::D => 'D',
            Layer::R => 'R',
            Layer::L => 'L',
            Layer::F => 'F',
            Layer::B => 'B',
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Layer::U => "up",
            Layer::D => "down",
            Layer::R => "right",
            Layer::L => "left",
            Layer::F => "front",
            Layer::B => "back",
        }
    }

    /// Position of the layer's face in the cube's face arena.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// How far a layer is turned. `CounterClockwise` is rendered as a prime and
/// `Double` is a half turn, which has no distinguishable direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
    Double,
}

impl Direction {
    /// Number of clockwise quarter turns this direction amounts to.
    #[must_use]
    pub fn quarter_turns(self) -> u8 {
        match self {
            Direction::Clockwise => 1,
            Direction::Double => 2,
            Direction::CounterClockwise => 3,
        }
    }

    /// The direction that amounts to `quarter_turns` clockwise quarter turns,
    /// or `None` for a full rotation.
    #[must_use]
    pub fn from_quarter_turns(quarter_turns: u8) -> Option<Self> {
        match quarter_turns % 4 {
            1 => Some(Direction::Clockwise),
            2 => Some(Direction::Double),
            3 => Some(Direction::CounterClockwise),
            _ => None,
        }
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
            Direction::Double => Direction::Double,
        }
    }

    fn table_index(self) -> usize {
        match self {
            Direction::Clockwise => 0,
            Direction::CounterClockwise => 1,
            Direction::Double => 2,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Clockwise => write!(f, ""),
            Direction::CounterClockwise => write!(f, "'"),
            Direction::Double => write!(f, "2"),
        }
    }
}

/// Net direction of two consecutive turns of the same layer, indexed by
/// `[first][second]` in `Clockwise`, `CounterClockwise`, `Double` order.
/// `None` marks a full rotation.
const COMPOSITION: [[Option<Direction>; 3]; 3] = [
    [
        Some(Direction::Double),
        None,
        Some(Direction::CounterClockwise),
    ],
    [
        None,
        Some(Direction::Double),
        Some(Direction::Clockwise),
    ],
    [
        Some(Direction::CounterClockwise),
        Some(Direction::Clockwise),
        None,
    ],
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("No supported move found in {0:?}")]
    UnsupportedMove(String),
}

/// Reasons two moves cannot be connected into a single move. Both are
/// expected outcomes of the move algebra rather than faults.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectError {
    #[error("Cannot connect {} and {} layer moves", .first.name(), .second.name())]
    DifferentLayers { first: Layer, second: Layer },
    #[error("The {} moves cancel out to a full rotation", .0.name())]
    FullAngle(Layer),
}

/// A single turn of one outer layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    layer: Layer,
    direction: Direction,
}

impl Move {
    #[must_use]
    pub fn new(layer: Layer, direction: Direction) -> Self {
        Self { layer, direction }
    }

    /// Build a move from a clockwise flag and a doubled flag. The clockwise
    /// flag is ignored for doubled moves.
    #[must_use]
    pub fn from_flags(layer: Layer, clockwise: bool, doubled: bool) -> Self {
        let direction = if doubled {
            Direction::Double
        } else if clockwise {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        };
        Self { layer, direction }
    }

    /// Every distinct move, layer by layer.
    pub fn all() -> impl Iterator<Item = Move> {
        Layer::iter()
            .flat_map(|layer| Direction::iter().map(move |direction| Move::new(layer, direction)))
    }

    #[must_use]
    pub fn layer(&self) -> Layer {
        self.layer
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Doubled moves report clockwise, as that is how they are parsed.
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.direction != Direction::CounterClockwise
    }

    #[must_use]
    pub fn is_doubled(&self) -> bool {
        self.direction == Direction::Double
    }

    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            layer: self.layer,
            direction: self.direction.inverse(),
        }
    }

    /// Combine this move followed by `next` into the single equivalent move.
    ///
    /// # Errors
    ///
    /// `DifferentLayers` if the moves turn different layers, and `FullAngle`
    /// if they cancel each other out.
    pub fn connect(&self, next: &Move) -> Result<Move, ConnectError> {
        if self.layer != next.layer {
            return Err(ConnectError::DifferentLayers {
                first: self.layer,
                second: next.layer,
            });
        }
        COMPOSITION[self.direction.table_index()][next.direction.table_index()]
            .map(|direction| Move::new(self.layer, direction))
            .ok_or(ConnectError::FullAngle(self.layer))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.layer, self.direction)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parse the first move token found anywhere in `s`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match next_token(s, false) {
            Some((token, _)) => token
                .to_move()
                .ok_or_else(|| ParseMoveError::UnsupportedMove(s.to_owned())),
            None => Err(ParseMoveError::UnsupportedMove(s.to_owned())),
        }
    }
}

/// One match of `[RLUDFB]2?'?`, possibly with a lowercase letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token {
    pub letter: char,
    pub direction: Direction,
}

impl Token {
    /// Lowercase letters (wide moves) have no corresponding move.
    pub(crate) fn to_move(self) -> Option<Move> {
        Layer::from_letter(self.letter).map(|layer| Move::new(layer, self.direction))
    }
}

/// Find the leftmost notation token in `input`, returning it together with
/// the input that follows it. A `2` always wins over a trailing apostrophe.
pub(crate) fn next_token(input: &str, ignore_case: bool) -> Option<(Token, &str)> {
    let start = input.find(|c: char| {
        let c = if ignore_case {
            c.to_ascii_uppercase()
        } else {
            c
        };
        Layer::from_letter(c).is_some()
    })?;
    let letter = input[start..].chars().next()?;
    let mut rest = &input[start + letter.len_utf8()..];

    let mut direction = Direction::Clockwise;
    if let Some(stripped) = rest.strip_prefix('2') {
        rest = stripped;
        direction = Direction::Double;
    }
    if let Some(stripped) = rest.strip_prefix('\'') {
        rest = stripped;
        if direction != Direction::Double {
            direction = Direction::CounterClockwise;
        }
    }

    Some((Token { letter, direction }, rest))
}

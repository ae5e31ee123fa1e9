use std::{convert::Infallible, fmt::Display, ops::Deref, str::FromStr};

use itertools::Itertools;
use log::debug;

use crate::moves::{ConnectError, Move, next_token};

/// An ordered list of moves, used for scrambles and solutions alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MoveSequence(Vec<Move>);

impl MoveSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every move token in `s`, skipping anything else. Letters are
    /// matched case-insensitively so that a lowercase token like `d2` is
    /// consumed whole, but lowercase tokens denote wide moves and are dropped.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let mut moves = vec![];
        let mut rest = s;
        while let Some((token, remaining)) = next_token(rest, true) {
            if let Some(move_) = token.to_move() {
                moves.push(move_);
            }
            rest = remaining;
        }
        Self(moves)
    }

    pub fn push(&mut self, move_: Move) {
        self.0.push(move_);
    }

    /// Remove the last move.
    pub fn pop(&mut self) -> Option<Move> {
        self.0.pop()
    }

    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    /// Reverse the order of the moves and invert each of them, so that the
    /// sequence undoes what it did before.
    pub fn reverse(&mut self) {
        self.0.reverse();
        for move_ in &mut self.0 {
            *move_ = move_.inverse();
        }
    }

    /// A reversed copy; see [`MoveSequence::reverse`].
    #[must_use]
    pub fn inverted(&self) -> Self {
        self.0.iter().rev().map(Move::inverse).collect()
    }

    /// Greedily merge neighboring moves of the same layer, left to right.
    /// Moves that cancel out are removed and the move before them gets a
    /// chance to merge with whatever follows. Moves separated by a move of a
    /// different layer are never merged.
    pub fn simplify(&mut self) {
        let before = self.0.len();
        let moves = &mut self.0;

        let mut i = 0;
        while i + 1 < moves.len() {
            match moves[i].connect(&moves[i + 1]) {
                Ok(connected) => {
                    moves[i] = connected;
                    moves.remove(i + 1);
                }
                Err(ConnectError::DifferentLayers { .. }) => i += 1,
                Err(ConnectError::FullAngle(_)) => {
                    moves.drain(i..=i + 1);
                    i = i.saturating_sub(1);
                }
            }
        }

        if moves.len() != before {
            debug!("Simplified {before} moves to {}", moves.len());
        }
    }
}

impl Deref for MoveSequence {
    type Target = [Move];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Move> for MoveSequence {
    fn extend<T: IntoIterator<Item = Move>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for MoveSequence {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for MoveSequence {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

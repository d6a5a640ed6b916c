use std::fmt;
use std::fmt::{Display, Formatter};

use crate::collections::square::{Coord, VectorId};
use crate::collections::Square;

/// A side of the grid from which a row or column is viewed
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    North,
    East,
    South,
    West,
}

impl Side {
    /// All sides in clockwise order, which is also the order of clues in a `PuzzleSpec`
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    pub fn label(self) -> &'static str {
        match self {
            Side::North => "NORTH",
            Side::East => "EAST",
            Side::South => "SOUTH",
            Side::West => "WEST",
        }
    }

    pub fn from_label(label: &str) -> Option<Side> {
        Side::ALL
            .iter()
            .copied()
            .find(|side| side.label().eq_ignore_ascii_case(label))
    }

    /// Position of this side in clockwise order, starting at North
    pub fn ordinal(self) -> usize {
        match self {
            Side::North => 0,
            Side::East => 1,
            Side::South => 2,
            Side::West => 3,
        }
    }

    /// The row or column that the clue at `index` on this side looks along.
    /// North and South clues are indexed by column, East and West clues by row.
    pub fn vector(self, index: usize) -> VectorId {
        match self {
            Side::North | Side::South => VectorId::col(index),
            Side::East | Side::West => VectorId::row(index),
        }
    }

    /// The index of the clue on this side that sees `coord`
    pub fn clue_index(self, coord: Coord) -> usize {
        match self {
            Side::North | Side::South => coord.col(),
            Side::East | Side::West => coord.row(),
        }
    }

    /// Distance of `coord` from this side, 0 for cells on the border
    pub fn depth(self, coord: Coord, width: usize) -> usize {
        match self {
            Side::North => coord.row(),
            Side::South => width - 1 - coord.row(),
            Side::West => coord.col(),
            Side::East => width - 1 - coord.col(),
        }
    }

    /// South and East look at their lines from the far end
    pub fn is_reversed(self) -> bool {
        matches!(self, Side::South | Side::East)
    }

    /// The values of a row or column in the order seen from this side
    pub fn view<T: Copy>(self, square: &Square<T>, index: usize) -> Vec<T> {
        let mut line: Vec<T> = square.vector(self.vector(index)).copied().collect();
        if self.is_reversed() {
            line.reverse();
        }
        line
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

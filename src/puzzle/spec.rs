use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;

use crate::puzzle::error::{InvalidSpec, ParseSpecError};
use crate::puzzle::parse::parse_spec;
use crate::puzzle::visibility::visible_count;
use crate::puzzle::{is_latin_square, Side, Solution, Value};

/// The clues of a skyline puzzle: one visible-peak count per row or column on each side.
///
/// Clues are stored flat, side by side in clockwise order (North, East, South, West),
/// so clue `i` belongs to side `i / width` at position `i % width`. North and South
/// clues are listed by column from left to right, East and West clues by row from top
/// to bottom. A clue of 0 is blank.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleSpec {
    width: usize,
    clues: Vec<Value>,
}

impl PuzzleSpec {
    pub fn new(
        north: Vec<Value>,
        east: Vec<Value>,
        south: Vec<Value>,
        west: Vec<Value>,
    ) -> Result<Self, InvalidSpec> {
        let width = north.len();
        let sides = [north, east, south, west];
        if let Some(i) = sides.iter().position(|side| side.len() != width) {
            return Err(InvalidSpec::new(format!(
                "{} has {} clues, expected {}",
                Side::ALL[i],
                sides[i].len(),
                width
            )));
        }
        let clues = sides.iter().flatten().copied().collect();
        Self::from_clues(width, clues)
    }

    /// Creates a spec from the flat clockwise list of clues
    pub fn from_clues(width: usize, clues: Vec<Value>) -> Result<Self, InvalidSpec> {
        let spec = Self { width, clues };
        spec.validate()?;
        Ok(spec)
    }

    /// Creates a spec from clues already known to be valid for `width`
    pub(crate) fn from_clues_unchecked(width: usize, clues: Vec<Value>) -> Self {
        debug_assert_eq!(width * 4, clues.len());
        Self { width, clues }
    }

    /// A spec with every clue blank
    pub fn blank(width: usize) -> Self {
        Self {
            width,
            clues: vec![0; width * 4],
        }
    }

    /// Counts the visible peaks of every row and column of a solution, from every side
    pub fn from_solution(solution: &Solution) -> Self {
        let width = solution.width();
        let clues = Side::ALL
            .iter()
            .flat_map(|&side| (0..width).map(move |i| visible_count(&side.view(solution, i))))
            .collect();
        Self { width, clues }
    }

    pub fn validate(&self) -> Result<(), InvalidSpec> {
        if self.width == 0 {
            return Err(InvalidSpec::new("width must be at least 1"));
        }
        if self.clues.len() != self.width * 4 {
            return Err(InvalidSpec::new(format!(
                "expected {} clues, found {}",
                self.width * 4,
                self.clues.len()
            )));
        }
        if let Some(i) = self.clues.iter().position(|&clue| clue > self.width) {
            return Err(InvalidSpec::new(format!(
                "clue {} at {} {} is greater than the width {}",
                self.clues[i],
                Side::ALL[i / self.width],
                i % self.width,
                self.width
            )));
        }
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// All clues in clockwise side order
    pub fn clues(&self) -> &[Value] {
        &self.clues
    }

    pub fn side(&self, side: Side) -> &[Value] {
        let start = side.ordinal() * self.width;
        &self.clues[start..start + self.width]
    }

    pub fn clue(&self, side: Side, index: usize) -> Value {
        self.side(side)[index]
    }

    pub fn set_clue(&mut self, side: Side, index: usize, value: Value) {
        assert!(index < self.width);
        self.clues[side.ordinal() * self.width + index] = value;
    }

    /// Sets the clue at a position in the flat clockwise list
    pub fn set_clue_at(&mut self, index: usize, value: Value) {
        assert!(index < self.clues.len());
        self.clues[index] = value;
    }

    pub fn is_fully_specified(&self) -> bool {
        self.clues.iter().all(|&clue| clue != 0)
    }

    pub fn blank_count(&self) -> usize {
        self.clues.iter().filter(|&&clue| clue == 0).count()
    }

    /// Returns true if `solution` is a Latin square agreeing with every non-blank clue
    pub fn is_satisfied_by(&self, solution: &Solution) -> bool {
        if solution.width() != self.width || !is_latin_square(solution) {
            return false;
        }
        let derived = Self::from_solution(solution);
        self.clues
            .iter()
            .zip(&derived.clues)
            .all(|(&clue, &actual)| clue == 0 || clue == actual)
    }

    /// Solves the puzzle, see [`crate::puzzle::solve`]
    pub fn solve(&self) -> Result<Solution, crate::puzzle::SolveError> {
        crate::puzzle::solve(self)
    }
}

impl Display for PuzzleSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for &side in &Side::ALL {
            writeln!(f, "{}: {}", side, self.side(side).iter().join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSpec {
    type Err = ParseSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_spec(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution() -> Solution {
        Solution::from_rows(vec![
            vec![1, 2, 3, 4],
            vec![3, 4, 1, 2],
            vec![4, 3, 2, 1],
            vec![2, 1, 4, 3],
        ])
        .unwrap()
    }

    #[test]
    fn from_solution() {
        let spec = PuzzleSpec::from_solution(&solution());
        assert_eq!(&[3, 2, 2, 1], spec.side(Side::North));
        assert_eq!(&[1, 2, 4, 2], spec.side(Side::East));
        assert_eq!(&[2, 3, 1, 2], spec.side(Side::South));
        assert_eq!(&[4, 2, 1, 2], spec.side(Side::West));
        assert!(spec.is_fully_specified());
    }

    #[test]
    fn flat_index_follows_sides() {
        let spec = PuzzleSpec::from_solution(&solution());
        assert_eq!(spec.clue(Side::North, 0), spec.clues()[0]);
        assert_eq!(spec.clue(Side::East, 2), spec.clues()[6]);
        assert_eq!(spec.clue(Side::West, 3), spec.clues()[15]);
    }

    #[test]
    fn set_clue_at_follows_sides() {
        let mut spec = PuzzleSpec::from_solution(&solution());
        spec.set_clue_at(6, 0);
        assert_eq!(0, spec.clue(Side::East, 2));
        assert_eq!(1, spec.blank_count());
    }

    #[test]
    #[should_panic]
    fn set_clue_at_out_of_range() {
        let mut spec = PuzzleSpec::blank(2);
        spec.set_clue_at(8, 1);
    }

    #[test]
    fn satisfied_by_source_solution() {
        let mut spec = PuzzleSpec::from_solution(&solution());
        assert!(spec.is_satisfied_by(&solution()));
        spec.set_clue(Side::South, 1, 0);
        assert!(spec.is_satisfied_by(&solution()));
        spec.set_clue(Side::South, 1, 2);
        assert!(!spec.is_satisfied_by(&solution()));
    }

    #[test]
    fn mismatched_side_lengths() {
        let result = PuzzleSpec::new(vec![1, 2], vec![2, 1], vec![2], vec![1, 2]);
        assert!(result.is_err());
    }

    #[test]
    fn clue_too_large() {
        let result = PuzzleSpec::from_clues(2, vec![1, 2, 3, 1, 1, 2, 2, 1]);
        assert!(result.is_err());
    }

    #[test]
    fn zero_width() {
        assert!(PuzzleSpec::from_clues(0, vec![]).is_err());
    }

    #[test]
    fn display() {
        let spec = PuzzleSpec::new(vec![2, 1], vec![1, 2], vec![1, 2], vec![2, 1]).unwrap();
        assert_eq!(
            "NORTH: 2 1\nEAST: 1 2\nSOUTH: 1 2\nWEST: 2 1\n",
            spec.to_string()
        );
    }
}

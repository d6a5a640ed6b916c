//! Skyline puzzles

pub use self::error::{InvalidSpec, ParseSpecError, SolveError};
pub use self::generate::generate_solution;
pub use self::reduce::{reduce_clues, ClueReducer, ReduceStats};
pub use self::side::Side;
pub use self::spec::PuzzleSpec;
pub use self::symmetry::{canonical_form, symmetric_variants};

pub mod error;
mod generate;
mod parse;
mod reduce;
mod side;
pub mod solve;
mod spec;
mod symmetry;
pub mod visibility;

use rand::thread_rng;

use crate::collections::square::VectorId;
use crate::collections::Square;

/// A height in the grid, or a number of visible peaks. Zero marks an unknown.
pub type Value = usize;
/// A filled grid in which every row and column holds each of `1..=width` once
pub type Solution = Square<Value>;

/// Generates a random solution grid using the thread-local random number generator
pub fn generate(width: usize) -> Solution {
    generate_solution(width, &mut thread_rng())
}

/// Solves a puzzle, returning its only solution
pub fn solve(spec: &PuzzleSpec) -> Result<Solution, SolveError> {
    solve::PuzzleSolver::new(spec)
        .solve()
        .map(|data| data.solution)
}

/// Returns true if every row and column of the square holds each of `1..=width` exactly once
pub fn is_latin_square(square: &Square<Value>) -> bool {
    let width = square.width();
    (0..width).all(|i| {
        is_permutation(square.vector(VectorId::row(i)), width)
            && is_permutation(square.vector(VectorId::col(i)), width)
    })
}

fn is_permutation<'a>(values: impl Iterator<Item = &'a Value>, width: usize) -> bool {
    let mut seen = vec![false; width + 1];
    for &v in values {
        if v == 0 || v > width || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

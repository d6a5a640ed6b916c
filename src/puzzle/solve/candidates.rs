use crate::collections::square::Coord;
use crate::collections::Square;
use crate::puzzle::solve::ValueSet;
use crate::puzzle::{SolveError, Solution, Value};

/// The solver's working state: the candidate values of every cell, and the cells fixed so far
#[derive(Clone, Debug)]
pub(crate) struct CandidateGrid {
    candidates: Square<ValueSet>,
    solution: Solution,
    unsolved_count: usize,
}

impl CandidateGrid {
    pub fn new(width: usize) -> Self {
        Self {
            candidates: Square::with_width_and_value(width, ValueSet::with_all(width)),
            solution: Square::with_width_and_value(width, 0),
            unsolved_count: width.pow(2),
        }
    }

    pub fn width(&self) -> usize {
        self.solution.width()
    }

    pub fn candidates(&self, coord: Coord) -> ValueSet {
        self.candidates[coord]
    }

    /// The partially filled grid, with 0 in every unsolved cell
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn value(&self, coord: Coord) -> Option<Value> {
        match self.solution[coord] {
            0 => None,
            value => Some(value),
        }
    }

    pub fn is_cell_solved(&self, coord: Coord) -> bool {
        self.solution[coord] != 0
    }

    pub fn is_solved(&self) -> bool {
        self.unsolved_count == 0
    }

    pub fn into_solution(self) -> Solution {
        self.solution
    }

    /// Removes candidates for which `f` returns false. Returns true if any were removed.
    pub fn retain(
        &mut self,
        coord: Coord,
        f: impl FnMut(Value) -> bool,
    ) -> Result<bool, SolveError> {
        let domain = &mut self.candidates[coord];
        let changed = domain.retain(f);
        if domain.is_empty() {
            debug!("no candidates left at {:?}", coord);
            return Err(SolveError::NotUniquelySolvable);
        }
        Ok(changed)
    }

    /// Fixes the value of a cell. The value must still be one of its candidates.
    pub fn solve_cell(&mut self, coord: Coord, value: Value) -> Result<(), SolveError> {
        debug_assert!(!self.is_cell_solved(coord));
        let domain = &mut self.candidates[coord];
        if !domain.contains(value) {
            debug!("{} is not a candidate at {:?}", value, coord);
            return Err(SolveError::NotUniquelySolvable);
        }
        *domain = std::iter::once(value).collect();
        self.solution[coord] = value;
        self.unsolved_count -= 1;
        trace!("solved cell at {:?}, value={}", coord, value);
        Ok(())
    }
}

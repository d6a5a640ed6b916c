//! solve skyline puzzles
//!
//! The solver only ever removes candidates that provably cannot hold, so it never
//! guesses. It either fills the whole grid or reports that the clues do not pin
//! down a single solution.

pub(crate) use self::candidates::CandidateGrid;
pub(crate) use self::value_set::ValueSet;

use crate::puzzle::error::InvalidSpec;
use crate::puzzle::{PuzzleSpec, Solution, SolveError};

use self::propagate::propagate_pass;
use self::unary_constraints::apply_unary_constraints;

mod brute_force;
mod candidates;
mod propagate;
mod unary_constraints;
mod value_set;

pub struct SolvedData {
    pub solution: Solution,
    pub stats: SolveStats,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Passes over the grid, including brute force passes
    pub passes: u32,
    pub brute_force_passes: u32,
}

impl SolveStats {
    pub fn used_brute_force(&self) -> bool {
        self.brute_force_passes > 0
    }
}

pub struct PuzzleSolver<'a> {
    spec: &'a PuzzleSpec,
}

impl<'a> PuzzleSolver<'a> {
    pub fn new(spec: &'a PuzzleSpec) -> Self {
        Self { spec }
    }

    pub fn solve(&self) -> Result<SolvedData, SolveError> {
        self.spec.validate()?;
        if self.spec.width() > ValueSet::MAX_VALUE {
            return Err(InvalidSpec::new(format!(
                "width {} is larger than the supported {}",
                self.spec.width(),
                ValueSet::MAX_VALUE
            ))
            .into());
        }
        let mut grid = CandidateGrid::new(self.spec.width());
        apply_unary_constraints(self.spec, &mut grid)?;
        let mut stats = SolveStats::default();
        // set after a pass with no change, to escalate the next one to brute force
        let mut stalled = false;
        while !grid.is_solved() {
            stats.passes += 1;
            if stalled {
                debug!("Propagation stalled, brute forcing line completions");
                stats.brute_force_passes += 1;
            }
            let changed = propagate_pass(self.spec, &mut grid, stalled)?;
            if !changed && stalled {
                debug!(
                    "No progress after brute force, {} passes",
                    stats.passes
                );
                return Err(SolveError::NotUniquelySolvable);
            }
            stalled = !changed;
        }
        let solution = grid.into_solution();
        if !self.spec.is_satisfied_by(&solution) {
            debug!("Filled grid does not satisfy the clues:\n{}", solution);
            return Err(SolveError::NotUniquelySolvable);
        }
        debug!("Solved after {} passes", stats.passes);
        Ok(SolvedData { solution, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Side;

    fn solution(rows: Vec<Vec<usize>>) -> Solution {
        Solution::from_rows(rows).unwrap()
    }

    #[test]
    fn single_cell() {
        let spec = PuzzleSpec::new(vec![1], vec![1], vec![1], vec![1]).unwrap();
        let data = PuzzleSolver::new(&spec).solve().unwrap();
        assert_eq!(solution(vec![vec![1]]), data.solution);
        assert!(!data.stats.used_brute_force());
    }

    #[test]
    fn three_by_three_without_brute_force() {
        let expected = solution(vec![vec![1, 2, 3], vec![2, 3, 1], vec![3, 1, 2]]);
        let spec = PuzzleSpec::from_solution(&expected);
        let data = PuzzleSolver::new(&spec).solve().unwrap();
        assert_eq!(expected, data.solution);
        assert!(!data.stats.used_brute_force());
    }

    #[test]
    fn four_by_four_needs_brute_force() {
        let expected = solution(vec![
            vec![1, 2, 3, 4],
            vec![3, 4, 1, 2],
            vec![4, 3, 2, 1],
            vec![2, 1, 4, 3],
        ]);
        let spec = PuzzleSpec::from_solution(&expected);
        let data = PuzzleSolver::new(&spec).solve().unwrap();
        assert_eq!(expected, data.solution);
        assert!(data.stats.used_brute_force());
    }

    #[test]
    fn blank_spec_is_not_unique() {
        let spec = PuzzleSpec::blank(3);
        assert_eq!(
            Err(SolveError::NotUniquelySolvable),
            PuzzleSolver::new(&spec).solve().map(|data| data.solution)
        );
    }

    #[test]
    fn contradictory_clues() {
        let mut spec = PuzzleSpec::blank(2);
        spec.set_clue(Side::West, 0, 2);
        spec.set_clue(Side::East, 0, 2);
        assert_eq!(
            Err(SolveError::NotUniquelySolvable),
            PuzzleSolver::new(&spec).solve().map(|data| data.solution)
        );
    }

    #[test]
    fn invalid_spec() {
        let spec = PuzzleSpec::blank(0);
        assert!(matches!(
            PuzzleSolver::new(&spec).solve(),
            Err(SolveError::InvalidSpec(_))
        ));
    }
}

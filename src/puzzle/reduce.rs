use itertools::Itertools;

use crate::puzzle::error::InvalidSpec;
use crate::puzzle::solve::PuzzleSolver;
use crate::puzzle::PuzzleSpec;

/// Counts of clue subsets visited by a [`ClueReducer`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReduceStats {
    /// Subsets handed to the solver
    pub attempted: u64,
    /// Subsets skipped because they contain a subset already found unsolvable
    pub pruned: u64,
    pub solvable: u64,
}

/// Finds the puzzles obtained by blanking clues of a puzzle that can still be solved.
///
/// Subsets of clue positions are tried by increasing size. Blanking more clues never
/// makes a puzzle solvable again, so once a subset fails, no subset containing it is tried.
pub struct ClueReducer<F> {
    is_solvable: F,
    stats: ReduceStats,
}

impl ClueReducer<fn(&PuzzleSpec) -> bool> {
    pub fn new() -> Self {
        Self::with_solver(is_uniquely_solvable)
    }
}

impl Default for ClueReducer<fn(&PuzzleSpec) -> bool> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> ClueReducer<F>
where
    F: FnMut(&PuzzleSpec) -> bool,
{
    /// Creates a reducer deciding solvability with `is_solvable` instead of the solver
    pub fn with_solver(is_solvable: F) -> Self {
        Self {
            is_solvable,
            stats: ReduceStats::default(),
        }
    }

    pub fn stats(&self) -> ReduceStats {
        self.stats
    }

    /// Returns every solvable puzzle made by blanking some clues of `spec`, starting with
    /// `spec` itself when it is solvable. The reduced puzzles are only required to have a
    /// unique solution, not to share the solution of `spec`.
    pub fn reduce(&mut self, spec: &PuzzleSpec) -> Result<Vec<PuzzleSpec>, InvalidSpec> {
        spec.validate()?;
        if !spec.is_fully_specified() {
            return Err(InvalidSpec::new(
                "clue reduction needs a puzzle with every clue given",
            ));
        }
        let clue_count = spec.clues().len();
        if clue_count > 64 {
            return Err(InvalidSpec::new(format!(
                "clue reduction supports at most 64 clues, found {}",
                clue_count
            )));
        }
        let mut reduced = Vec::new();
        // bit masks of blanked positions that left the puzzle unsolvable
        let mut infeasible: Vec<u64> = Vec::new();
        for blank_count in 0..=clue_count {
            let before = reduced.len();
            for positions in subsets(clue_count, blank_count) {
                let mask = positions.iter().fold(0_u64, |mask, &i| mask | 1 << i);
                if infeasible.iter().any(|&known| known & mask == known) {
                    self.stats.pruned += 1;
                    continue;
                }
                let mut candidate = spec.clone();
                for &i in &positions {
                    candidate.set_clue_at(i, 0);
                }
                self.stats.attempted += 1;
                if (self.is_solvable)(&candidate) {
                    self.stats.solvable += 1;
                    reduced.push(candidate);
                } else {
                    infeasible.push(mask);
                }
            }
            debug!(
                "{} solvable puzzle(s) with {} blank clue(s)",
                reduced.len() - before,
                blank_count
            );
        }
        Ok(reduced)
    }
}

/// Reduces `spec` with the solver, see [`ClueReducer`]
pub fn reduce_clues(spec: &PuzzleSpec) -> Result<Vec<PuzzleSpec>, InvalidSpec> {
    ClueReducer::new().reduce(spec)
}

fn is_uniquely_solvable(spec: &PuzzleSpec) -> bool {
    PuzzleSolver::new(spec).solve().is_ok()
}

/// All `k`-element subsets of `0..n` in lexicographic order
fn subsets(n: usize, k: usize) -> Box<dyn Iterator<Item = Vec<usize>>> {
    if k == 0 {
        Box::new(std::iter::once(Vec::new()))
    } else {
        Box::new((0..n).combinations(k))
    }
}

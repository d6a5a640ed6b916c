use crate::collections::square::Coord;
use crate::puzzle::solve::CandidateGrid;
use crate::puzzle::visibility::possible_visible_counts;
use crate::puzzle::{PuzzleSpec, Side, SolveError, Solution, Value};

/// Removes each candidate of the cell that, once placed, leaves one of the four clues on the
/// cell's row and column unreachable by every completion of that line.
///
/// Only the fixed cells of the grid are taken into account, one line at a time, so the cost is
/// factorial in the number of unsolved cells of a single line.
pub(crate) fn prune_by_line_completions(
    spec: &PuzzleSpec,
    grid: &mut CandidateGrid,
    coord: Coord,
) -> Result<bool, SolveError> {
    let impossible: Vec<Value> = grid
        .candidates(coord)
        .iter()
        .filter(|&value| !is_placement_feasible(spec, grid.solution(), coord, value))
        .collect();
    if impossible.is_empty() {
        return Ok(false);
    }
    debug!(
        "values {:?} at {:?} cannot meet the clues of its row and column",
        impossible, coord
    );
    grid.retain(coord, |v| !impossible.contains(&v))
}

fn is_placement_feasible(
    spec: &PuzzleSpec,
    solution: &Solution,
    coord: Coord,
    value: Value,
) -> bool {
    Side::ALL.iter().all(|&side| {
        let clue = spec.clue(side, side.clue_index(coord));
        if clue == 0 {
            return true;
        }
        let mut line = side.view(solution, side.clue_index(coord));
        line[side.depth(coord, spec.width())] = value;
        possible_visible_counts(&line).contains(&clue)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_value_breaking_far_clue() {
        // bottom-up, column 3 reads [_, 1, _, 4] and must show 2 peaks,
        // so its bottom cell cannot be 2
        let mut spec = PuzzleSpec::blank(4);
        spec.set_clue(Side::South, 3, 2);
        let mut grid = CandidateGrid::new(4);
        grid.solve_cell(Coord::new(3, 0), 4).unwrap();
        grid.solve_cell(Coord::new(3, 2), 1).unwrap();
        grid.retain(Coord::new(3, 3), |v| v == 2 || v == 3).unwrap();
        assert!(prune_by_line_completions(&spec, &mut grid, Coord::new(3, 3)).unwrap());
        assert_eq!(Some(3), grid.candidates(Coord::new(3, 3)).single_value());
    }

    #[test]
    fn keeps_feasible_values() {
        let spec = PuzzleSpec::blank(3);
        let mut grid = CandidateGrid::new(3);
        assert!(!prune_by_line_completions(&spec, &mut grid, Coord::new(1, 1)).unwrap());
        assert_eq!(3, grid.candidates(Coord::new(1, 1)).len());
    }
}

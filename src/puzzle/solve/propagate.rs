use crate::collections::square::{Coord, VectorId};
use crate::puzzle::solve::brute_force::prune_by_line_completions;
use crate::puzzle::solve::CandidateGrid;
use crate::puzzle::{PuzzleSpec, Side, SolveError, Value};

/// Runs every rule once over each unsolved cell, row by row. Returns true if anything changed.
///
/// With `brute_force` set, a cell that no cheap rule could change has its candidates tested
/// against every completion of its lines, until the first change in the pass.
pub(crate) fn propagate_pass(
    spec: &PuzzleSpec,
    grid: &mut CandidateGrid,
    brute_force: bool,
) -> Result<bool, SolveError> {
    let width = spec.width();
    let mut changed = false;
    for row in 0..width {
        for col in 0..width {
            let coord = Coord::new(col, row);
            if grid.is_cell_solved(coord) {
                continue;
            }
            if eliminate_solved_values(grid, coord)? {
                changed = true;
            }
            if let Some(value) = hidden_single(grid, coord) {
                trace!("{} can only go at {:?} in its row or column", value, coord);
                grid.solve_cell(coord, value)?;
                changed = true;
            } else if let Some(value) = grid.candidates(coord).single_value() {
                grid.solve_cell(coord, value)?;
                changed = true;
            } else if sees_single_peak(spec, coord) {
                trace!("{:?} faces a clue of 1", coord);
                grid.solve_cell(coord, width)?;
                changed = true;
            } else if brute_force && !changed && prune_by_line_completions(spec, grid, coord)? {
                changed = true;
            }
        }
    }
    Ok(changed)
}

/// Removes the values already fixed in the cell's row and column
fn eliminate_solved_values(grid: &mut CandidateGrid, coord: Coord) -> Result<bool, SolveError> {
    let solved: Vec<Value> = coord
        .vectors()
        .iter()
        .flat_map(|&vector| line_coords(grid.width(), vector))
        .filter(|&other| other != coord)
        .filter_map(|other| grid.value(other))
        .collect();
    grid.retain(coord, |v| !solved.contains(&v))
}

/// A candidate of the cell that no other cell in its row, or in its column, can hold
fn hidden_single(grid: &CandidateGrid, coord: Coord) -> Option<Value> {
    let width = grid.width();
    grid.candidates(coord).iter().find(|&value| {
        coord.vectors().iter().any(|&vector| {
            line_coords(width, vector)
                .filter(|&other| grid.candidates(other).contains(value))
                .count()
                == 1
        })
    })
}

/// True if the cell is on a border whose clue says only one peak is visible
fn sees_single_peak(spec: &PuzzleSpec, coord: Coord) -> bool {
    let width = spec.width();
    Side::ALL.iter().any(|&side| {
        side.depth(coord, width) == 0 && spec.clue(side, side.clue_index(coord)) == 1
    })
}

fn line_coords(width: usize, vector: VectorId) -> impl Iterator<Item = Coord> {
    (0..width).map(move |i| vector.coord_at(i))
}

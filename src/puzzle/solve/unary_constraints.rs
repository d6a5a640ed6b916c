use crate::puzzle::solve::CandidateGrid;
use crate::puzzle::{PuzzleSpec, Side, SolveError, Value};

/// Removes the candidates that a single clue rules out by arithmetic alone.
///
/// For a clue `k` and a cell at depth `p` from that clue's side:
/// * a value `v` can be seen after at most `p` shorter values and followed by at most
///   `width - v` taller ones, so `v <= width - k + 1 + p`
/// * with `k = 1` only the tallest value may stand on the border, and it may not stand
///   anywhere else in the line, since anything in front of it would be a second peak
pub(crate) fn apply_unary_constraints(
    spec: &PuzzleSpec,
    grid: &mut CandidateGrid,
) -> Result<(), SolveError> {
    debug!("reducing cell domains by clue bounds");
    let width = spec.width();
    for coord in grid.solution().coords().collect::<Vec<_>>() {
        for &side in &Side::ALL {
            let clue = spec.clue(side, side.clue_index(coord));
            if clue == 0 {
                continue;
            }
            let depth = side.depth(coord, width);
            grid.retain(coord, |v| is_within_bounds(v, clue, depth, width))?;
        }
    }
    Ok(())
}

fn is_within_bounds(value: Value, clue: Value, depth: usize, width: usize) -> bool {
    if value > width - clue + 1 + depth {
        return false;
    }
    if clue == 1 {
        return (depth == 0) == (value == width);
    }
    true
}

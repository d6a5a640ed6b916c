use rand::seq::SliceRandom;
use rand::Rng;

use crate::collections::square::Coord;
use crate::collections::Square;
use crate::puzzle::{Solution, Value};

/// Generates a random Latin square of the given width.
///
/// The first row is a random permutation. Every following row is built by repeatedly
/// placing one of the values with the fewest free columns left, in one of those columns.
/// When some value has nowhere left to go the grid is thrown away and rebuilt, so this
/// only returns once it succeeds.
pub fn generate_solution<R: Rng + ?Sized>(width: usize, rng: &mut R) -> Solution {
    let mut attempt = 1;
    loop {
        if let Some(solution) = try_generate(width, rng) {
            debug!("Solution after {} attempt(s):\n{}", attempt, &solution);
            return solution;
        }
        trace!("dead end while filling a grid of width {}, restarting", width);
        attempt += 1;
    }
}

fn try_generate<R: Rng + ?Sized>(width: usize, rng: &mut R) -> Option<Solution> {
    let mut square: Square<Value> = Square::with_width_and_value(width, 0);
    // used_cols[value][col] is true once `value` has been placed in `col`
    let mut used_cols = vec![vec![false; width]; width + 1];

    let mut first_row: Vec<Value> = (1..=width).collect();
    first_row.shuffle(rng);
    for (col, &value) in first_row.iter().enumerate() {
        square[Coord::new(col, 0)] = value;
        used_cols[value][col] = true;
    }

    for row in 1..width {
        let mut to_place: Vec<Value> = (1..=width).collect();
        let mut filled = vec![false; width];
        while !to_place.is_empty() {
            let choices: Vec<(Value, Vec<usize>)> = to_place
                .iter()
                .map(|&value| {
                    let cols = (0..width)
                        .filter(|&col| !filled[col] && !used_cols[value][col])
                        .collect();
                    (value, cols)
                })
                .collect();
            let fewest = choices.iter().map(|(_, cols)| cols.len()).min()?;
            if fewest == 0 {
                return None;
            }
            let candidates: Vec<&(Value, Vec<usize>)> = choices
                .iter()
                .filter(|(_, cols)| cols.len() == fewest)
                .collect();
            let &&(value, ref cols) = candidates.choose(rng)?;
            let col = *cols.choose(rng)?;
            square[Coord::new(col, row)] = value;
            filled[col] = true;
            used_cols[value][col] = true;
            to_place.retain(|&v| v != value);
        }
    }
    Some(square)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::puzzle::is_latin_square;

    #[test]
    fn generates_latin_squares() {
        let mut rng = StdRng::seed_from_u64(1);
        for width in 1..=8 {
            for _ in 0..5 {
                let solution = generate_solution(width, &mut rng);
                assert_eq!(width, solution.width());
                assert!(is_latin_square(&solution), "\n{}", solution);
            }
        }
    }

    #[test]
    fn same_seed_same_solution() {
        let a = generate_solution(6, &mut StdRng::seed_from_u64(42));
        let b = generate_solution(6, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn single_cell() {
        let solution = generate_solution(1, &mut StdRng::seed_from_u64(0));
        assert_eq!(vec![1], solution.iter().copied().collect::<Vec<_>>());
    }
}

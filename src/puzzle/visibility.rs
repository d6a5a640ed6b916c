//! Counting the peaks visible along a line of heights

use std::collections::BTreeSet;

use itertools::Itertools;

use crate::puzzle::Value;

/// Counts the values that are taller than every value before them.
/// Zeros are unknown heights: they are never counted and never hide anything.
///
/// `[0, 3, 1, 0, 4]` has 2 visible peaks (3 and 4).
pub fn visible_count(line: &[Value]) -> usize {
    let mut max = 0;
    let mut count = 0;
    for &value in line {
        if value > max {
            max = value;
            count += 1;
        }
    }
    count
}

/// Returns every visible count that `line` can have once its zeros are filled.
///
/// The zeros are filled with the values of `1..=line.len()` missing from the line, in
/// every order. This is factorial in the number of zeros. A line that repeats a value
/// cannot be completed, so it yields an empty set.
pub fn possible_visible_counts(line: &[Value]) -> BTreeSet<usize> {
    let width = line.len();
    let mut present = vec![false; width + 1];
    for &value in line.iter().filter(|&&v| v != 0) {
        if value > width || present[value] {
            return BTreeSet::new();
        }
        present[value] = true;
    }
    let missing = (1..=width).filter(|&v| !present[v]).collect_vec();
    let blanks = line
        .iter()
        .positions(|&v| v == 0)
        .collect_vec();
    if blanks.is_empty() {
        return std::iter::once(visible_count(line)).collect();
    }
    let mut complete = line.to_vec();
    missing
        .iter()
        .copied()
        .permutations(missing.len())
        .map(|values| {
            for (&i, value) in blanks.iter().zip(values) {
                complete[i] = value;
            }
            visible_count(&complete)
        })
        .collect()
}

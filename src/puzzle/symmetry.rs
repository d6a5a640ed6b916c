use crate::puzzle::{PuzzleSpec, Side, Value};

/// Returns the 8 puzzles equivalent to `spec` under rotation and reflection of the grid:
/// `spec` rotated clockwise by 0, 90, 180 and 270 degrees, then its mirror image
/// (columns reversed) rotated the same way. Symmetric puzzles repeat entries.
pub fn symmetric_variants(spec: &PuzzleSpec) -> Vec<PuzzleSpec> {
    let width = spec.width();
    let mut variants = Vec::with_capacity(8);
    for base in &[spec.clone(), mirror(spec)] {
        let mut ring = boundary_ring(base);
        for _ in 0..4 {
            variants.push(from_boundary_ring(width, &ring));
            ring.rotate_right(width);
        }
    }
    variants
}

/// The smallest of the symmetric variants of `spec`. Two puzzles are equivalent exactly
/// when their canonical forms are equal.
pub fn canonical_form(spec: &PuzzleSpec) -> PuzzleSpec {
    symmetric_variants(spec)
        .into_iter()
        .min()
        .unwrap_or_else(|| spec.clone())
}

/// Reflects the grid across its vertical axis
fn mirror(spec: &PuzzleSpec) -> PuzzleSpec {
    let reversed = |side: Side| spec.side(side).iter().rev().copied().collect::<Vec<_>>();
    let clues = [
        reversed(Side::North),
        spec.side(Side::West).to_vec(),
        reversed(Side::South),
        spec.side(Side::East).to_vec(),
    ]
    .concat();
    PuzzleSpec::from_clues_unchecked(spec.width(), clues)
}

/// Clues in the order met walking clockwise around the grid from its top-left corner.
/// Rotating the grid a quarter turn clockwise shifts this ring by one side.
fn boundary_ring(spec: &PuzzleSpec) -> Vec<Value> {
    let mut ring = Vec::with_capacity(spec.clues().len());
    ring.extend_from_slice(spec.side(Side::North));
    ring.extend_from_slice(spec.side(Side::East));
    ring.extend(spec.side(Side::South).iter().rev());
    ring.extend(spec.side(Side::West).iter().rev());
    ring
}

fn from_boundary_ring(width: usize, ring: &[Value]) -> PuzzleSpec {
    let mut clues = ring.to_vec();
    clues[2 * width..3 * width].reverse();
    clues[3 * width..].reverse();
    PuzzleSpec::from_clues_unchecked(width, clues)
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use skyline::dataset::{self, DatasetBuilder};
use skyline::puzzle::solve::PuzzleSolver;
use skyline::puzzle::{
    canonical_form, generate_solution, is_latin_square, reduce_clues, symmetric_variants,
    PuzzleSpec, Solution, SolveError,
};

#[test]
fn test_puzzles() -> Result<()> {
    test_puzzle_dir(project_path("res/test/puzzles/brute-force"), true)?;
    test_puzzle_dir(project_path("res/test/puzzles/no-brute-force"), false)?;
    Ok(())
}

fn test_puzzle_dir(path: impl AsRef<Path>, require_brute_force: bool) -> Result<()> {
    let mut files: Vec<_> = fs::read_dir(path)?.collect::<Result<_, _>>()?;
    files.sort_unstable_by_key(|f| f.path());
    assert!(!files.is_empty());
    for file in files {
        println!("Solving {}", file.path().display());
        let spec: PuzzleSpec = fs::read_to_string(file.path())?.parse()?;
        let data = PuzzleSolver::new(&spec).solve()?;
        assert!(is_latin_square(&data.solution));
        assert!(spec.is_satisfied_by(&data.solution));
        assert_eq!(
            data.stats.used_brute_force(),
            require_brute_force,
            "{}",
            file.path().display()
        );
    }
    Ok(())
}

fn project_path(path: impl AsRef<Path>) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(path)
}

#[test]
fn generated_puzzles_solve_to_their_grid() {
    let mut rng = StdRng::seed_from_u64(42);
    for width in 1..=6 {
        for _ in 0..5 {
            let grid = generate_solution(width, &mut rng);
            assert!(is_latin_square(&grid));
            let spec = PuzzleSpec::from_solution(&grid);
            match spec.solve() {
                Ok(solution) => assert_eq!(grid, solution),
                Err(e) => assert_eq!(SolveError::NotUniquelySolvable, e),
            }
        }
    }
}

#[test]
fn single_cell() {
    let grid = Solution::from_rows(vec![vec![1]]).unwrap();
    let spec = PuzzleSpec::from_solution(&grid);
    assert_eq!("NORTH: 1\nEAST: 1\nSOUTH: 1\nWEST: 1\n", spec.to_string());
    let data = PuzzleSolver::new(&spec).solve().unwrap();
    assert_eq!(grid, data.solution);
    assert!(!data.stats.used_brute_force());
}

#[test]
fn ambiguous_clues() {
    // [[1, 2, 3, 4], [2, 4, 1, 3], [3, 1, 4, 2], [4, 3, 2, 1]] has the same clues
    let grid = Solution::from_rows(vec![
        vec![1, 2, 3, 4],
        vec![2, 1, 4, 3],
        vec![3, 4, 1, 2],
        vec![4, 3, 2, 1],
    ])
    .unwrap();
    let spec = PuzzleSpec::from_solution(&grid);
    assert_eq!(Err(SolveError::NotUniquelySolvable), spec.solve());
}

#[test]
fn equivalent_puzzles_solve_alike() {
    let grid = Solution::from_rows(vec![
        vec![1, 2, 3, 4],
        vec![3, 4, 1, 2],
        vec![4, 3, 2, 1],
        vec![2, 1, 4, 3],
    ])
    .unwrap();
    let spec = PuzzleSpec::from_solution(&grid);
    let canonical = canonical_form(&spec);
    for variant in symmetric_variants(&spec) {
        assert_eq!(canonical, canonical_form(&variant));
        let solution = variant.solve().unwrap();
        assert_eq!(variant, PuzzleSpec::from_solution(&solution));
    }
}

#[test]
fn reduced_puzzles_are_solvable() {
    let grid = Solution::from_rows(vec![vec![1, 2, 3], vec![2, 3, 1], vec![3, 1, 2]]).unwrap();
    let spec = PuzzleSpec::from_solution(&grid);
    let reduced = reduce_clues(&spec).unwrap();
    assert_eq!(spec, reduced[0]);
    for puzzle in &reduced {
        let solution = puzzle.solve().unwrap();
        assert!(puzzle.is_satisfied_by(&solution));
    }
}

#[test]
fn dataset_round_trip() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(9);
    let mut builder = DatasetBuilder::new(4);
    builder.max_attempts(500);
    builder.build(3, &mut rng);
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("puzzles.csv");
    dataset::write_dataset_file(&path, 4, builder.records())?;
    let records = dataset::read_dataset_file(&path)?;
    assert_eq!(builder.records(), &records[..]);
    for spec in dataset::feasible_specs(&records) {
        let solution = spec.solve()?;
        assert_eq!(spec, PuzzleSpec::from_solution(&solution));
    }
    Ok(())
}

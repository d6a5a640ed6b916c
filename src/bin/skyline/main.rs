#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use anyhow::Result;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;
use skyline::dataset::{self, DatasetBuilder, DatasetRecord};
use skyline::puzzle::solve::PuzzleSolver;
use skyline::puzzle::{ClueReducer, PuzzleSpec, SolveError};

use crate::options::{Options, Source};

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let records = match options.source() {
        Source::File(path) => {
            println!("Reading puzzles from \"{}\"", path.display());
            dataset::read_dataset_file(path)?
        }
        &Source::Generate(options::Generate { count, width }) => {
            let mut rng = match options.seed() {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let mut builder = DatasetBuilder::new(width);
            builder.build(count, &mut rng);
            println!(
                "Generated {} puzzle(s) in {} attempt(s)",
                builder.records().len(),
                builder.attempts()
            );
            if let Some(path) = options.output_path() {
                dataset::write_dataset_file(path, width, builder.records())?;
                println!("Saved puzzles to {}", path.display());
            }
            builder.records().to_vec()
        }
    };
    for (i, record) in records.iter().enumerate() {
        println!("Puzzle {}/{}", i + 1, records.len());
        on_puzzle(&options, record)?;
    }
    Ok(())
}

fn on_puzzle(options: &Options, record: &DatasetRecord) -> Result<()> {
    println!("{}", record.spec);
    println!(
        "{}",
        if record.feasible {
            "Puzzle is feasible"
        } else {
            "Puzzle is not feasible"
        }
    );
    if options.solve() {
        solve_puzzle(&record.spec)?;
    }
    if options.reduce() && record.feasible {
        reduce_puzzle(&record.spec)?;
    }
    Ok(())
}

fn solve_puzzle(spec: &PuzzleSpec) -> Result<()> {
    match PuzzleSolver::new(spec).solve() {
        Ok(data) => {
            println!(
                "Puzzle solved in {} pass(es){}",
                data.stats.passes,
                if data.stats.used_brute_force() {
                    " with brute force"
                } else {
                    ""
                }
            );
            print!("{}", data.solution);
        }
        Err(SolveError::NotUniquelySolvable) => println!("Puzzle is not uniquely solvable"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn reduce_puzzle(spec: &PuzzleSpec) -> Result<()> {
    let mut reducer = ClueReducer::new();
    let reduced = reducer.reduce(spec)?;
    let stats = reducer.stats();
    println!(
        "{} solvable puzzle(s) after blanking clues ({} tried, {} pruned)",
        reduced.len(),
        stats.attempted,
        stats.pruned
    );
    let most_blanks = reduced.iter().map(PuzzleSpec::blank_count).max().unwrap_or(0);
    let sparsest = reduced
        .iter()
        .filter(|spec| spec.blank_count() == most_blanks)
        .collect_vec();
    println!(
        "{} puzzle(s) with {} blank clue(s):",
        sparsest.len(),
        most_blanks
    );
    for spec in sparsest {
        println!("{}", spec);
    }
    Ok(())
}

//! Tables of puzzles labelled with whether they can be solved
//!
//! A dataset is a CSV file with a `feasibility` column holding `possible` or
//! `impossible`, followed by one column per clue named after its side and position
//! (`N0`, `N1`, ..., `E0`, ..., `S0`, ..., `W0`, ...).

use std::fs::File;
use std::io;
use std::num::ParseIntError;
use std::path::Path;

use ahash::AHashSet;
use csv::{ReaderBuilder, StringRecord, Trim};
use rand::Rng;
use thiserror::Error;

use crate::puzzle::{canonical_form, generate_solution, InvalidSpec, PuzzleSpec, Side, Value};

const FEASIBILITY_HEADER: &str = "feasibility";
const POSSIBLE: &str = "possible";
const IMPOSSIBLE: &str = "impossible";

pub type Result<T> = std::result::Result<T, DatasetError>;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid header: {0}")]
    Header(String),

    #[error("row {row}: expected {expected} columns, found {found}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}: unknown feasibility {value:?}")]
    Feasibility { row: usize, value: String },

    #[error("row {row}: invalid clue {value:?}")]
    Clue {
        row: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("row {row}: {source}")]
    Spec {
        row: usize,
        #[source]
        source: InvalidSpec,
    },

    #[error("record {row} has width {found}, expected {expected}")]
    Width {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A puzzle and whether the solver found its unique solution
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetRecord {
    pub spec: PuzzleSpec,
    pub feasible: bool,
}

/// Writes `records`, all of the given width, as CSV with a header row
pub fn write_dataset<W: io::Write>(
    writer: W,
    width: usize,
    records: &[DatasetRecord],
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(&header(width))?;
    for (i, record) in records.iter().enumerate() {
        if record.spec.width() != width {
            return Err(DatasetError::Width {
                row: i + 1,
                expected: width,
                found: record.spec.width(),
            });
        }
        let feasibility = if record.feasible { POSSIBLE } else { IMPOSSIBLE };
        let fields = std::iter::once(feasibility.to_string())
            .chain(record.spec.clues().iter().map(Value::to_string));
        writer.write_record(fields)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_dataset_file(
    path: impl AsRef<Path>,
    width: usize,
    records: &[DatasetRecord],
) -> Result<()> {
    write_dataset(File::create(path)?, width, records)
}

/// Reads the records of a dataset. The width is taken from the header.
pub fn read_dataset<R: io::Read>(reader: R) -> Result<Vec<DatasetRecord>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let width = parse_header(reader.headers()?)?;
    let mut records = Vec::new();
    for (i, record) in reader.records().enumerate() {
        records.push(parse_record(i + 1, width, &record?)?);
    }
    Ok(records)
}

pub fn read_dataset_file(path: impl AsRef<Path>) -> Result<Vec<DatasetRecord>> {
    read_dataset(File::open(path)?)
}

/// The puzzles of the records marked as feasible
pub fn feasible_specs(records: &[DatasetRecord]) -> Vec<PuzzleSpec> {
    records
        .iter()
        .filter(|record| record.feasible)
        .map(|record| record.spec.clone())
        .collect()
}

fn header(width: usize) -> Vec<String> {
    let mut header = vec![FEASIBILITY_HEADER.to_string()];
    for side in &Side::ALL {
        let prefix = &side.label()[..1];
        header.extend((0..width).map(|i| format!("{}{}", prefix, i)));
    }
    header
}

fn parse_header(headers: &StringRecord) -> Result<usize> {
    let clue_columns = headers.len().saturating_sub(1);
    if clue_columns == 0 || clue_columns % 4 != 0 {
        return Err(DatasetError::Header(format!(
            "expected a feasibility column and 4 clue columns per row, found {} columns",
            headers.len()
        )));
    }
    let width = clue_columns / 4;
    let expected = header(width);
    if let Some((found, expected)) = headers
        .iter()
        .zip(&expected)
        .find(|(found, expected)| found != expected)
    {
        return Err(DatasetError::Header(format!(
            "expected column {:?}, found {:?}",
            expected, found
        )));
    }
    Ok(width)
}

fn parse_record(row: usize, width: usize, record: &StringRecord) -> Result<DatasetRecord> {
    let expected = 1 + 4 * width;
    if record.len() != expected {
        return Err(DatasetError::RowLength {
            row,
            expected,
            found: record.len(),
        });
    }
    let feasible = match &record[0] {
        POSSIBLE => true,
        IMPOSSIBLE => false,
        value => {
            return Err(DatasetError::Feasibility {
                row,
                value: value.to_string(),
            })
        }
    };
    let clues = record
        .iter()
        .skip(1)
        .map(|value| {
            value.parse::<Value>().map_err(|source| DatasetError::Clue {
                row,
                value: value.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let spec = PuzzleSpec::from_clues(width, clues)
        .map_err(|source| DatasetError::Spec { row, source })?;
    Ok(DatasetRecord { spec, feasible })
}

/// Collects random puzzles of one width until enough of them can be solved.
///
/// Each puzzle is derived from a fresh random solution grid. A puzzle equivalent under
/// rotation or reflection to one already recorded is skipped.
pub struct DatasetBuilder {
    width: usize,
    max_attempts: Option<u64>,
    seen: AHashSet<PuzzleSpec>,
    records: Vec<DatasetRecord>,
    attempts: u64,
}

impl DatasetBuilder {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            max_attempts: None,
            seen: AHashSet::default(),
            records: Vec::new(),
            attempts: 0,
        }
    }

    /// Stops after generating this many grids, even if too few puzzles were feasible
    pub fn max_attempts(&mut self, max_attempts: u64) -> &mut Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn records(&self) -> &[DatasetRecord] {
        &self.records
    }

    pub fn feasible_count(&self) -> usize {
        self.records.iter().filter(|record| record.feasible).count()
    }

    /// Grids generated so far
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Solves and records `spec`, unless an equivalent puzzle is already recorded.
    /// Returns the new record.
    pub fn insert(&mut self, spec: PuzzleSpec) -> Option<&DatasetRecord> {
        if !self.seen.insert(canonical_form(&spec)) {
            trace!("Skipping a puzzle equivalent to one already recorded");
            return None;
        }
        let feasible = spec.solve().is_ok();
        self.records.push(DatasetRecord { spec, feasible });
        self.records.last()
    }

    /// Generates puzzles until `feasible_count` of the records are feasible
    pub fn build<R: Rng + ?Sized>(
        &mut self,
        feasible_count: usize,
        rng: &mut R,
    ) -> &[DatasetRecord] {
        let mut found = self.feasible_count();
        while found < feasible_count {
            if self.max_attempts.map_or(false, |max| self.attempts >= max) {
                info!(
                    "Giving up after {} attempts with {}/{} feasible puzzles",
                    self.attempts, found, feasible_count
                );
                break;
            }
            self.attempts += 1;
            let spec = PuzzleSpec::from_solution(&generate_solution(self.width, rng));
            if let Some(record) = self.insert(spec) {
                if record.feasible {
                    found += 1;
                    info!("Feasible puzzle {}/{}", found, feasible_count);
                } else {
                    debug!("Recorded an infeasible puzzle");
                }
            }
        }
        &self.records
    }
}

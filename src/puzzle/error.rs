use std::num::ParseIntError;

use thiserror::Error;

use crate::puzzle::Side;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid puzzle: {msg}")]
pub struct InvalidSpec {
    msg: String,
}

impl InvalidSpec {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Propagation stalled with undetermined cells, or the clues admit no grid at all
    #[error("puzzle is not uniquely solvable")]
    NotUniquelySolvable,
    #[error(transparent)]
    InvalidSpec(#[from] InvalidSpec),
}

#[derive(Error, Debug, PartialEq)]
pub enum ParseSpecError {
    #[error("expected \"SIDE: clues\" at line {line}")]
    MalformedLine { line: usize },
    #[error("unknown side \"{0}\"")]
    UnknownSide(String),
    #[error("side {0} is given more than once")]
    DuplicateSide(Side),
    #[error("side {0} is missing")]
    MissingSide(Side),
    #[error("invalid clue \"{token}\"")]
    InvalidClue {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error(transparent)]
    InvalidSpec(#[from] InvalidSpec),
}

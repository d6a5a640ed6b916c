use crate::puzzle::error::ParseSpecError;
use crate::puzzle::{PuzzleSpec, Side, Value};

/// Parses the format written by `PuzzleSpec`'s `Display` implementation:
/// one `SIDE: clue clue ...` line per side, in any order. Blank lines are ignored.
pub(crate) fn parse_spec(s: &str) -> Result<PuzzleSpec, ParseSpecError> {
    let mut sides: [Option<Vec<Value>>; 4] = Default::default();
    for (i, line) in s.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.splitn(2, ':');
        let (label, clues) = match (parts.next(), parts.next()) {
            (Some(label), Some(clues)) => (label.trim(), clues),
            _ => return Err(ParseSpecError::MalformedLine { line: i + 1 }),
        };
        let side =
            Side::from_label(label).ok_or_else(|| ParseSpecError::UnknownSide(label.into()))?;
        let slot = &mut sides[side.ordinal()];
        if slot.is_some() {
            return Err(ParseSpecError::DuplicateSide(side));
        }
        *slot = Some(parse_clues(clues)?);
    }
    let [north, east, south, west] = sides;
    let north = north.ok_or(ParseSpecError::MissingSide(Side::North))?;
    let east = east.ok_or(ParseSpecError::MissingSide(Side::East))?;
    let south = south.ok_or(ParseSpecError::MissingSide(Side::South))?;
    let west = west.ok_or(ParseSpecError::MissingSide(Side::West))?;
    Ok(PuzzleSpec::new(north, east, south, west)?)
}

fn parse_clues(s: &str) -> Result<Vec<Value>, ParseSpecError> {
    s.split_whitespace()
        .map(|token| {
            token
                .parse::<Value>()
                .map_err(|source| ParseSpecError::InvalidClue {
                    token: token.into(),
                    source,
                })
        })
        .collect()
}

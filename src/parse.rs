use itertools::Itertools;
use thiserror::Error;

/// Reasons a textual snapshot cannot be turned into a grid or universe.
///
/// All of these are construction-time errors: once a snapshot parses, ticking it
/// cannot fail.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    /// The input contained no non-blank lines.
    #[error("input contains no rows")]
    Empty,
    /// A row's width disagreed with the first row's.
    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row, counting non-blank lines only.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A character outside the cell alphabet.
    #[error("unrecognized symbol {symbol:?} at row {row}, column {column}")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Zero-based row of the offending character.
        row: usize,
        /// Zero-based column of the offending character.
        column: usize,
    },
    /// A universe was requested with too few axes to embed its starting plane.
    #[error("cannot embed a starting plane in {0} dimension(s)")]
    UnsupportedDimension(usize),
}

/// Normalize a snapshot into its rows: trim each line, drop blank lines, and require
/// every remaining row to be as wide as the first.
pub(crate) fn rows(text: &str) -> Result<Vec<&str>, ParseError> {
    let rows = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect_vec();

    let Some(first) = rows.first() else {
        return Err(ParseError::Empty);
    };

    let expected = first.chars().count();
    for (row, line) in rows.iter().enumerate() {
        let found = line.chars().count();
        if found != expected {
            return Err(ParseError::RaggedRow { row, expected, found });
        }
    }

    Ok(rows)
}

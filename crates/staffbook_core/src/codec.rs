//! Delimited text codec for the roster file format.
//!
//! # Responsibility
//! - Parse raw file text into ordered rows of field strings.
//! - Serialize rows back into the same line-oriented shape.
//!
//! # Invariants
//! - Fields carry no quoting or escaping; a field containing the delimiter
//!   corrupts its row.
//! - Encoded output terminates every row with `\n`, including the last.
//! - The first row fixes the column count for the whole encode.

use std::error::Error;
use std::fmt::{Display, Formatter};

const DELIMITER: &str = ",";

pub type CodecResult<T> = Result<T, CodecError>;

#[derive(Debug, PartialEq, Eq)]
pub enum CodecError {
    /// A row's field count differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RaggedRow {
                row,
                expected,
                actual,
            } => write!(f, "row {row} has {actual} fields, expected {expected}"),
        }
    }
}

impl Error for CodecError {}

/// Splits raw text into rows of delimiter-separated fields.
///
/// Lines end on `\n` with an optional preceding `\r`; lines that are empty
/// after trimming surrounding whitespace are dropped. Never fails: any
/// remaining line becomes a row of whatever fields it splits into.
pub fn decode(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        rows.push(line.split(DELIMITER).map(str::to_string).collect());
    }
    rows
}

/// Joins rows back into delimited text.
///
/// # Errors
/// - `RaggedRow` when any row's width differs from the first row's; rows are
///   rejected rather than padded or truncated.
///
/// An empty row set encodes to the empty string.
pub fn encode(rows: &[Vec<String>]) -> CodecResult<String> {
    let Some(first) = rows.first() else {
        return Ok(String::new());
    };

    let width = first.len();
    let mut text = String::new();
    for (index, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(CodecError::RaggedRow {
                row: index,
                expected: width,
                actual: row.len(),
            });
        }
        text.push_str(&row.join(DELIMITER));
        text.push('\n');
    }

    Ok(text)
}

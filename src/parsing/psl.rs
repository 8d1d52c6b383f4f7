//! Parser for the aligner's PSL-style tabular output.
//!
//! Only lines starting with the match prefix are read. With 31-mers a full-length
//! hit reports 31 matching bases in the first column, so the default prefix `31`
//! keeps those rows and drops headers, separators and partial hits.

use std::path::Path;

use crate::core::alignment::AlignmentRecord;
use crate::parsing::ParseError;

/// Default prefix selecting alignment lines
pub const DEFAULT_MATCH_PREFIX: &str = "31";

const QUERY_NAME_COLUMN: usize = 9;
const TARGET_NAME_COLUMN: usize = 13;
const START_COLUMN: usize = 15;
const END_COLUMN: usize = 16;

/// Read alignment records from a PSL file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` if a selected line is malformed.
pub fn parse_psl_file(path: &Path, match_prefix: &str) -> Result<Vec<AlignmentRecord>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_psl_text(&content, match_prefix)
}

/// Parse alignment records from PSL text, keeping lines that start with `match_prefix`
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a selected line has fewer than 17
/// columns or a coordinate column is not an integer.
pub fn parse_psl_text(text: &str, match_prefix: &str) -> Result<Vec<AlignmentRecord>, ParseError> {
    let mut records = Vec::new();

    for (i, line) in text.lines().enumerate() {
        if !line.starts_with(match_prefix) {
            continue;
        }

        let line_num = i + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();

        if fields.len() <= END_COLUMN {
            return Err(ParseError::InvalidFormat(format!(
                "Alignment line {line_num} has {} columns, expected at least {}",
                fields.len(),
                END_COLUMN + 1
            )));
        }

        records.push(AlignmentRecord {
            query_name: fields[QUERY_NAME_COLUMN].to_string(),
            target_name: fields[TARGET_NAME_COLUMN].to_string(),
            query_start: parse_coordinate(fields[START_COLUMN], line_num)?,
            query_end: parse_coordinate(fields[END_COLUMN], line_num)?,
        });
    }

    Ok(records)
}

fn parse_coordinate(field: &str, line_num: usize) -> Result<i64, ParseError> {
    field.parse().map_err(|_| {
        ParseError::InvalidFormat(format!(
            "Invalid coordinate on alignment line {line_num}: '{field}'"
        ))
    })
}

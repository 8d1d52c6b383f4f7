use std::collections::HashMap;
use std::path::Path;

use tracing::warn;

use crate::core::breakpoint::BreakpointRecord;
use crate::parsing::ParseError;

/// Breakpoints keyed by sequin name
pub type BreakpointMap = HashMap<String, BreakpointRecord>;

/// Load a breakpoint annotation file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` if any line is malformed.
pub fn parse_breakpoint_file(path: &Path) -> Result<BreakpointMap, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_breakpoint_text(&content)
}

/// Parse breakpoint annotation text.
///
/// Each line is split on whitespace; column 3 is the name, columns 1
/// and 2 are the two breakpoints. A repeated name replaces the earlier record.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a line has fewer than 4 columns or a
/// breakpoint column is not an integer. Blank lines count as short lines.
pub fn parse_breakpoint_text(text: &str) -> Result<BreakpointMap, ParseError> {
    let mut breakpoints = BreakpointMap::new();

    for (i, line) in text.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let line_num = i + 1;

        if fields.len() < 4 {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has fewer than 4 columns"
            )));
        }

        let position1 = parse_position(fields[1], line_num)?;
        let position2 = parse_position(fields[2], line_num)?;
        let record = BreakpointRecord::new(fields[3], position1, position2);

        if let Some(previous) = breakpoints.insert(record.name.clone(), record) {
            warn!(
                "Duplicate breakpoint annotation for '{}' on line {line_num}, keeping the later one",
                previous.name
            );
        }
    }

    Ok(breakpoints)
}

fn parse_position(field: &str, line_num: usize) -> Result<i64, ParseError> {
    field.parse().map_err(|_| {
        ParseError::InvalidFormat(format!(
            "Invalid breakpoint on line {line_num}: '{field}'"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_breakpoint_text() {
        let bed = "chrT\t1000\t2000\tNG1_12_P2\t0\t+\nchrT\t5000\t6000\tNG1_13_P1\n";

        let breaks = parse_breakpoint_text(bed).unwrap();
        assert_eq!(breaks.len(), 2);

        let b = &breaks["NG1_12_P2"];
        assert_eq!(b.position1, 1000);
        assert_eq!(b.position2, 2000);
        assert_eq!(breaks["NG1_13_P1"].position1, 5000);
    }

    #[test]
    fn test_duplicate_name_last_wins() {
        let bed = "chrT 100 200 SEQ1\nchrT 300 400 SEQ1\n";

        let breaks = parse_breakpoint_text(bed).unwrap();
        assert_eq!(breaks.len(), 1);
        assert_eq!(breaks["SEQ1"], BreakpointRecord::new("SEQ1", 300, 400));
    }

    #[test]
    fn test_blank_line_is_error() {
        let err = parse_breakpoint_text("chrT 100 200 SEQ1\n\nchrT 300 400 SEQ2\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
        assert!(err.to_string().contains("Line 2 has fewer than 4 columns"));
    }

    #[test]
    fn test_negative_position() {
        let breaks = parse_breakpoint_text("chrT -5 200 SEQ1\n").unwrap();
        assert_eq!(breaks["SEQ1"].position1, -5);
    }

    #[test]
    fn test_too_few_columns() {
        let err = parse_breakpoint_text("chrT 100 200\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
        assert!(err.to_string().contains("Line 1"));
    }

    #[test]
    fn test_non_numeric_position() {
        let err = parse_breakpoint_text("chrT 100 200 SEQ1\nchrT abc 200 SEQ2\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_parse_breakpoint_file() {
        let mut temp = NamedTempFile::with_suffix(".bed").unwrap();
        temp.write_all(b"chrT\t100\t200\tSEQ1\n").unwrap();
        temp.flush().unwrap();

        let breaks = parse_breakpoint_file(temp.path()).unwrap();
        assert_eq!(breaks["SEQ1"].position1, 100);
    }

    #[test]
    fn test_missing_file() {
        let result = parse_breakpoint_file(Path::new("/nonexistent/breaks.bed"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}

//! FASTA readers.
//!
//! K-mer files are scanned for header lines only; every record gets the
//! placeholder sequence. The reference is read with noodles, gzip/bgzip included,
//! to make sure it holds sequences before the aligner is started.

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fasta;

use crate::core::kmer::KmerRecord;
use crate::parsing::ParseError;

/// Read k-mer records from a sequin k-mer file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read.
pub fn parse_kmer_file(path: &Path) -> Result<Vec<KmerRecord>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_kmer_text(&content))
}

/// One record per `>` line, in file order, named by the trimmed header text.
/// Sequence lines are skipped.
#[must_use]
pub fn parse_kmer_text(text: &str) -> Vec<KmerRecord> {
    text.lines()
        .filter_map(|line| line.strip_prefix('>'))
        .map(|header| KmerRecord::new(header.trim()))
        .collect()
}

/// Check if the path is a UCSC `.2bit` file, which BLAT reads but noodles does not
pub fn is_two_bit(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("2bit"))
}

#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read the sequence names of a reference FASTA.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened, `ParseError::Noodles` if
/// a record is malformed, or `ParseError::InvalidFormat` if there are no sequences.
pub fn read_reference_names(path: &Path) -> Result<Vec<String>, ParseError> {
    let file = std::fs::File::open(path)?;

    if is_gzipped(path) {
        let mut reader = fasta::io::Reader::new(BufReader::new(GzDecoder::new(file)));
        reference_names(&mut reader)
    } else {
        let mut reader = fasta::io::Reader::new(BufReader::new(file));
        reference_names(&mut reader)
    }
}

fn reference_names<R: BufRead>(reader: &mut fasta::io::Reader<R>) -> Result<Vec<String>, ParseError> {
    let mut names = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;
        names.push(String::from_utf8_lossy(record.name()).to_string());
    }

    if names.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in reference FASTA".to_string(),
        ));
    }

    Ok(names)
}

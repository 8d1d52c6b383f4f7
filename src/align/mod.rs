//! Aligning k-mers against the sequin reference.
//!
//! [`Aligner`] is the seam between the pipeline and the external tool: the
//! pipeline hands over a reference and a k-mer FASTA and gets alignment records
//! back, or an error. [`blat::BlatAligner`] runs a BLAT-compatible binary.
//! Tests swap in in-memory implementations.

use std::path::Path;
use std::process::ExitStatus;

use thiserror::Error;

use crate::core::alignment::AlignmentRecord;
use crate::parsing::ParseError;

pub mod blat;

#[derive(Error, Debug)]
pub enum AlignError {
    #[error("Failed to start aligner '{tool}': {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Aligner '{tool}' exited with {status}: {stderr}")]
    ToolFailed {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read alignment output: {0}")]
    Parse(#[from] ParseError),
}

/// Aligns a query FASTA against a reference FASTA
pub trait Aligner {
    /// Align every sequence in `query` against `reference`.
    ///
    /// # Errors
    ///
    /// Returns an `AlignError` if the alignment could not be produced. An empty
    /// result means the tool ran and found nothing.
    fn align(&self, reference: &Path, query: &Path) -> Result<Vec<AlignmentRecord>, AlignError>;
}

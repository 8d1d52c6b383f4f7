//! Classification of k-mers against their alignments and the sequin breakpoint.
//!
//! A k-mer is **aligned** when at least one alignment record carries its name,
//! otherwise **unaligned**. Only unaligned k-mers go to the report. For aligned
//! k-mers the first breakpoint of the sequin is tested against every matching
//! alignment; the result is kept for logging and the run summary but does not
//! change what is reported.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::core::alignment::AlignmentRecord;
use crate::core::kmer::KmerRecord;
use crate::parsing::bed::BreakpointMap;

pub mod report;

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("No breakpoint annotation for sequin '{0}'")]
    UnknownSequin(String),
}

/// What happened to one k-mer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KmerClass {
    /// No alignment record names this k-mer
    Unaligned,
    /// At least one alignment; `spanning` if any of them covers breakpoint 1
    Aligned { spanning: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification<'a> {
    pub kmer: &'a KmerRecord,
    pub class: KmerClass,
}

/// Classify the k-mers of one sequin file.
///
/// The breakpoint for `sequin` is looked up only once some k-mer has an alignment,
/// so a sequin without annotation fails only if something aligned.
///
/// # Errors
///
/// Returns `ClassifyError::UnknownSequin` if an aligned k-mer needs the breakpoint
/// of a sequin missing from `breakpoints`.
pub fn classify_sequin<'a>(
    sequin: &str,
    kmers: &'a [KmerRecord],
    alignments: &[AlignmentRecord],
    breakpoints: &BreakpointMap,
) -> Result<Vec<Classification<'a>>, ClassifyError> {
    let mut by_query: HashMap<&str, Vec<&AlignmentRecord>> = HashMap::new();
    for alignment in alignments {
        by_query
            .entry(alignment.query_name.as_str())
            .or_default()
            .push(alignment);
    }

    let mut classifications = Vec::with_capacity(kmers.len());

    for kmer in kmers {
        let class = match by_query.get(kmer.name.as_str()) {
            None => KmerClass::Unaligned,
            Some(hits) => {
                let breakpoint = breakpoints
                    .get(sequin)
                    .ok_or_else(|| ClassifyError::UnknownSequin(sequin.to_string()))?;
                let spanning = hits.iter().any(|hit| hit.spans(breakpoint.position1));
                KmerClass::Aligned { spanning }
            }
        };

        debug!("{sequin}: {} {class:?}", kmer.name);
        classifications.push(Classification { kmer, class });
    }

    Ok(classifications)
}

/// Per-sequin counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SequinSummary {
    pub sequin: String,
    pub kmers: usize,
    pub aligned: usize,
    pub unaligned: usize,
    pub spanning: usize,
}

impl SequinSummary {
    #[must_use]
    pub fn from_classifications(sequin: &str, classifications: &[Classification<'_>]) -> Self {
        let mut summary = Self {
            sequin: sequin.to_string(),
            kmers: classifications.len(),
            ..Self::default()
        };

        for c in classifications {
            match c.class {
                KmerClass::Unaligned => summary.unaligned += 1,
                KmerClass::Aligned { spanning } => {
                    summary.aligned += 1;
                    if spanning {
                        summary.spanning += 1;
                    }
                }
            }
        }

        summary
    }
}

//! Core record types shared by the parsers, the classifier and the report.
//!
//! - [`BreakpointRecord`]: known fusion breakpoints of one sequin
//! - [`KmerRecord`]: a named k-mer probe
//! - [`AlignmentRecord`]: where a k-mer aligned, as reported by the aligner
//!
//! All records are plain data. They are created fresh for every sequin file and
//! dropped once that sequin has been classified; only breakpoints live for the
//! whole run.
//!
//! [`BreakpointRecord`]: breakpoint::BreakpointRecord
//! [`KmerRecord`]: kmer::KmerRecord
//! [`AlignmentRecord`]: alignment::AlignmentRecord

pub mod alignment;
pub mod breakpoint;
pub mod kmer;

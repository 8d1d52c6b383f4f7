//! # kmer-span
//!
//! Cross-references sequin k-mers against a reference alignment to find which
//! k-mers fail to align and which aligned k-mers span a known fusion breakpoint.
//!
//! Each sequin has a k-mer FASTA file named after it. The k-mers are aligned to
//! the sequin reference with a BLAT-compatible tool, the alignment table is read
//! back, and every k-mer without an alignment is written to a tab-separated report.
//! Aligned k-mers are tested against the sequin's first breakpoint; that result
//! is logged and summarised but not reported.
//!
//! ## Example
//!
//! ```rust,no_run
//! use kmer_span::pipeline::{run, PipelineConfig};
//!
//! let config = PipelineConfig::new("AFU006.v032.bed", "K", "CTR001.v021.fa");
//! let summary = run(&config).unwrap();
//! println!("{} unaligned k-mers", summary.total_unaligned());
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Breakpoint, k-mer and alignment records
//! - [`parsing`]: Annotation, PSL and FASTA readers
//! - [`align`]: The aligner capability and its BLAT implementation
//! - [`classify`]: K-mer classification and the report writer
//! - [`pipeline`]: Run configuration and the batch driver
//! - [`cli`]: Command-line interface implementation

pub mod align;
pub mod classify;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod pipeline;

// Re-export commonly used types for convenience
pub use align::{AlignError, Aligner};
pub use core::alignment::AlignmentRecord;
pub use core::breakpoint::BreakpointRecord;
pub use core::kmer::KmerRecord;
pub use pipeline::{PipelineConfig, RunSummary};

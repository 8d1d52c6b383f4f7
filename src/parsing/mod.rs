//! Parsers for the three inputs of a run.
//!
//! - **Breakpoint annotations** ([`bed`]): whitespace-delimited, one sequin per line
//! - **Alignment results** ([`psl`]): the aligner's tabular output, filtered by a line prefix
//! - **FASTA** ([`fasta`]): k-mer headers from sequin files, and a sanity read of the reference
//!
//! ## Annotation columns
//!
//! | Column (0-based) | Field |
//! |------------------|-------|
//! | 1 | first breakpoint |
//! | 2 | second breakpoint |
//! | 3 | sequin name |
//!
//! ## Alignment columns
//!
//! | Column (0-based) | Field |
//! |------------------|-------|
//! | 9  | k-mer name |
//! | 13 | sequin name |
//! | 15 | aligned start |
//! | 16 | aligned end |

use thiserror::Error;

pub mod bed;
pub mod fasta;
pub mod psl;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),
}

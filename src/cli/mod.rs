//! Command-line interface for kmer-span.
//!
//! - **classify**: align every sequin k-mer file and report the k-mers that did not align
//! - **breakpoints**: show the records loaded from a breakpoint annotation file
//!
//! ## Usage
//!
//! ```text
//! # Full run with BLAT on the PATH
//! kmer-span classify --breakpoints AFU006.v032.bed --kmers K --reference CTR001.v021.fa
//!
//! # JSON run summary, custom aligner and report
//! kmer-span -f json classify -b breaks.bed -k K -r ref.fa --aligner /opt/blat/blat -o unaligned.tsv
//!
//! # Check an annotation file
//! kmer-span breakpoints AFU006.v032.bed
//! ```

use clap::{Parser, Subcommand};

pub mod breakpoints;
pub mod classify;

#[derive(Parser)]
#[command(name = "kmer-span")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Find sequin k-mers that fail to align, and which aligned k-mers span the fusion breakpoint")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for summaries
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align sequin k-mers and report the unaligned ones
    Classify(classify::ClassifyArgs),

    /// Show breakpoint annotations
    Breakpoints(breakpoints::BreakpointsArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

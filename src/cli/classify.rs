use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::parsing::psl::DEFAULT_MATCH_PREFIX;
use crate::pipeline::{self, PipelineConfig, RunSummary};

#[derive(Args)]
pub struct ClassifyArgs {
    /// Breakpoint annotation file (columns: chrom, break1, break2, sequin)
    #[arg(short, long)]
    pub breakpoints: PathBuf,

    /// Directory with one k-mer FASTA file per sequin
    #[arg(short, long)]
    pub kmers: PathBuf,

    /// Reference the k-mers are aligned against (FASTA, optionally gzipped, or .2bit)
    #[arg(short, long)]
    pub reference: PathBuf,

    /// Report of unaligned k-mers
    #[arg(short, long, default_value = pipeline::DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Aligner binary, called as `<aligner> <reference> <query> <output>`
    #[arg(long, default_value = pipeline::DEFAULT_ALIGNER)]
    pub aligner: PathBuf,

    /// Keep the aligner output at this path instead of a temporary file
    #[arg(long)]
    pub alignment_output: Option<PathBuf>,

    /// Only k-mer files whose name starts with this character are processed
    #[arg(long, default_value_t = pipeline::DEFAULT_SEQUIN_PREFIX)]
    pub sequin_prefix: char,

    /// Only alignment lines starting with this text are read
    #[arg(long, default_value = DEFAULT_MATCH_PREFIX)]
    pub match_prefix: String,

    /// Append to an existing report instead of replacing it
    #[arg(long)]
    pub append: bool,
}

impl From<ClassifyArgs> for PipelineConfig {
    fn from(args: ClassifyArgs) -> Self {
        Self {
            breakpoints: args.breakpoints,
            kmer_dir: args.kmers,
            reference: args.reference,
            output: args.output,
            aligner: args.aligner,
            alignment_output: args.alignment_output,
            sequin_prefix: args.sequin_prefix,
            match_prefix: args.match_prefix,
            append: args.append,
        }
    }
}

/// Execute classify subcommand
///
/// # Errors
///
/// Returns an error if any stage of the run fails.
pub fn run(args: ClassifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = PipelineConfig::from(args);
    let summary = pipeline::run(&config)?;

    match format {
        OutputFormat::Text => print_text_summary(&summary, verbose),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Tsv => print_tsv_summary(&summary),
    }

    Ok(())
}

fn print_text_summary(summary: &RunSummary, verbose: bool) {
    println!("K-mer Breakpoint Summary");
    println!("{}", "=".repeat(60));
    println!("Sequins analyzed:   {}", summary.sequins.len());
    println!("K-mers:             {}", summary.total_kmers());
    println!("Unaligned k-mers:   {}", summary.total_unaligned());
    println!("Spanning k-mers:    {}", summary.total_spanning());
    println!("Report:             {}", summary.report.display());

    if verbose {
        println!();
        for s in &summary.sequins {
            println!(
                "  {}: {} k-mers, {} aligned ({} spanning), {} unaligned",
                s.sequin, s.kmers, s.aligned, s.spanning, s.unaligned
            );
        }
    }
}

fn print_tsv_summary(summary: &RunSummary) {
    println!("sequin\tkmers\taligned\tunaligned\tspanning");
    for s in &summary.sequins {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            s.sequin, s.kmers, s.aligned, s.unaligned, s.spanning
        );
    }
}

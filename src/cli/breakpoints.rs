use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::breakpoint::BreakpointRecord;
use crate::parsing::bed::parse_breakpoint_file;

#[derive(Args)]
pub struct BreakpointsArgs {
    /// Breakpoint annotation file
    #[arg(required = true)]
    pub input: PathBuf,
}

/// Execute breakpoints subcommand
///
/// # Errors
///
/// Returns an error if the annotation file cannot be loaded.
pub fn run(args: BreakpointsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let breakpoints = parse_breakpoint_file(&args.input)?;

    let mut records: Vec<&BreakpointRecord> = breakpoints.values().collect();
    records.sort_by(|a, b| a.name.cmp(&b.name));

    if verbose {
        eprintln!(
            "Loaded {} breakpoints from {}",
            records.len(),
            args.input.display()
        );
    }

    match format {
        OutputFormat::Text => {
            for r in &records {
                println!("{}: {} / {}", r.name, r.position1, r.position2);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Tsv => {
            println!("name\tposition1\tposition2");
            for r in &records {
                println!("{}\t{}\t{}", r.name, r.position1, r.position2);
            }
        }
    }

    Ok(())
}

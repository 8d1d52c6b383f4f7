use clap::Parser;
use tracing_subscriber::EnvFilter;

mod align;
mod classify;
mod cli;
mod core;
mod parsing;
mod pipeline;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("kmer_span=debug,info")
    } else {
        EnvFilter::new("kmer_span=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Classify(args) => {
            cli::classify::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Breakpoints(args) => {
            cli::breakpoints::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}

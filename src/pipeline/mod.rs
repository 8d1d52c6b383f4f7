//! The batch run: breakpoints in, one report out.
//!
//! 1. Load breakpoint annotations once
//! 2. Check the reference FASTA has sequences (`.2bit` references are passed through)
//! 3. Queue every file in the k-mer directory whose name starts with the sequin prefix
//! 4. For each queued sequin: align, read k-mers, classify, report unaligned k-mers
//!
//! Sequins are processed one at a time in file-name order, so the report is
//! reproducible. Any failure aborts the run.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::align::blat::BlatAligner;
use crate::align::{AlignError, Aligner};
use crate::classify::report::ReportWriter;
use crate::classify::{classify_sequin, ClassifyError, KmerClass, SequinSummary};
use crate::parsing::bed::parse_breakpoint_file;
use crate::parsing::fasta::{is_two_bit, parse_kmer_file, read_reference_names};
use crate::parsing::psl::DEFAULT_MATCH_PREFIX;
use crate::parsing::ParseError;

pub const DEFAULT_OUTPUT: &str = "kmer.stats";
pub const DEFAULT_ALIGNER: &str = "blat";
pub const DEFAULT_SEQUIN_PREFIX: char = 'N';

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Cannot read k-mer directory {path}: {source}")]
    KmerDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Align(#[from] AlignError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything a run needs to know
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Breakpoint annotation file
    pub breakpoints: PathBuf,
    /// Directory holding one k-mer FASTA per sequin
    pub kmer_dir: PathBuf,
    /// Reference FASTA passed to the aligner
    pub reference: PathBuf,
    /// Report of unaligned k-mers
    pub output: PathBuf,
    /// Aligner binary
    pub aligner: PathBuf,
    /// Where the aligner writes its table; a temporary file when `None`
    pub alignment_output: Option<PathBuf>,
    /// Only files whose name starts with this are processed
    pub sequin_prefix: char,
    /// Prefix selecting alignment lines
    pub match_prefix: String,
    /// Append to an existing report instead of replacing it
    pub append: bool,
}

impl PipelineConfig {
    #[must_use]
    pub fn new(
        breakpoints: impl Into<PathBuf>,
        kmer_dir: impl Into<PathBuf>,
        reference: impl Into<PathBuf>,
    ) -> Self {
        Self {
            breakpoints: breakpoints.into(),
            kmer_dir: kmer_dir.into(),
            reference: reference.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            aligner: PathBuf::from(DEFAULT_ALIGNER),
            alignment_output: None,
            sequin_prefix: DEFAULT_SEQUIN_PREFIX,
            match_prefix: DEFAULT_MATCH_PREFIX.to_string(),
            append: false,
        }
    }
}

/// One sequin k-mer file waiting to be processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequinTask {
    /// File name, also the sequin name used for the breakpoint lookup
    pub name: String,
    pub path: PathBuf,
}

/// Outcome of a complete run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub report: PathBuf,
    /// Sequences in a FASTA reference; `None` for `.2bit`, which is not read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_sequences: Option<usize>,
    pub sequins: Vec<SequinSummary>,
}

impl RunSummary {
    #[must_use]
    pub fn total_kmers(&self) -> usize {
        self.sequins.iter().map(|s| s.kmers).sum()
    }

    #[must_use]
    pub fn total_unaligned(&self) -> usize {
        self.sequins.iter().map(|s| s.unaligned).sum()
    }

    #[must_use]
    pub fn total_spanning(&self) -> usize {
        self.sequins.iter().map(|s| s.spanning).sum()
    }
}

/// List the sequin files in `dir`, sorted by name.
///
/// Subdirectories and names that are not valid UTF-8 are skipped.
///
/// # Errors
///
/// Returns `PipelineError::KmerDir` if the directory cannot be listed.
pub fn collect_tasks(dir: &Path, prefix: char) -> Result<Vec<SequinTask>, PipelineError> {
    let dir_error = |source| PipelineError::KmerDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut tasks = Vec::new();

    for entry in std::fs::read_dir(dir).map_err(dir_error)? {
        let entry = entry.map_err(dir_error)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Ok(name) = entry.file_name().into_string() else {
            warn!("Skipping non UTF-8 file name: {}", path.display());
            continue;
        };

        if name.starts_with(prefix) {
            tasks.push(SequinTask { name, path });
        }
    }

    tasks.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(tasks)
}

/// Run the pipeline with a BLAT-compatible aligner built from `config`
///
/// # Errors
///
/// Returns the first error met by any stage.
pub fn run(config: &PipelineConfig) -> Result<RunSummary, PipelineError> {
    // Held until the run ends so the scratch directory outlives every invocation
    let scratch;
    let alignment_output = if let Some(path) = &config.alignment_output {
        path.clone()
    } else {
        scratch = tempfile::Builder::new().prefix("kmer-span-").tempdir()?;
        scratch.path().join("output.psl")
    };

    let aligner = BlatAligner::new(&config.aligner, alignment_output)
        .with_match_prefix(config.match_prefix.clone());

    run_with_aligner(config, &aligner)
}

/// Run the pipeline with any [`Aligner`]
///
/// # Errors
///
/// Returns the first error met by any stage.
pub fn run_with_aligner(
    config: &PipelineConfig,
    aligner: &dyn Aligner,
) -> Result<RunSummary, PipelineError> {
    let breakpoints = parse_breakpoint_file(&config.breakpoints)?;
    info!(
        "Loaded {} breakpoint annotations from {}",
        breakpoints.len(),
        config.breakpoints.display()
    );

    let reference_sequences = if is_two_bit(&config.reference) {
        info!(
            "Reference {} is .2bit, leaving it to the aligner",
            config.reference.display()
        );
        None
    } else {
        let count = read_reference_names(&config.reference)?.len();
        info!(
            "Reference {} has {count} sequences",
            config.reference.display()
        );
        Some(count)
    };

    let tasks = collect_tasks(&config.kmer_dir, config.sequin_prefix)?;
    info!(
        "Found {} sequin k-mer files in {}",
        tasks.len(),
        config.kmer_dir.display()
    );

    let mut report = ReportWriter::create(&config.output, config.append)?;
    let mut sequins = Vec::with_capacity(tasks.len());

    for task in &tasks {
        info!("Analyzing {}", task.name);

        let alignments = aligner.align(&config.reference, &task.path)?;
        let kmers = parse_kmer_file(&task.path)?;
        let classifications = classify_sequin(&task.name, &kmers, &alignments, &breakpoints)?;

        for c in &classifications {
            if c.class == KmerClass::Unaligned {
                report.write_unaligned(c.kmer, &task.name)?;
            }
        }

        sequins.push(SequinSummary::from_classifications(
            &task.name,
            &classifications,
        ));
    }

    info!(
        "Wrote {} unaligned k-mers to {}",
        report.lines_written(),
        config.output.display()
    );
    report.finish()?;

    Ok(RunSummary {
        report: config.output.clone(),
        reference_sequences,
        sequins,
    })
}

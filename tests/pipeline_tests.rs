//! End-to-end runs of the pipeline with in-memory aligners.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use kmer_span::align::{AlignError, Aligner};
use kmer_span::pipeline::{run_with_aligner, PipelineConfig, PipelineError};
use kmer_span::AlignmentRecord;
use tempfile::TempDir;

/// Returns canned alignments keyed by query file name
struct FakeAligner {
    results: HashMap<String, Vec<AlignmentRecord>>,
}

impl Aligner for FakeAligner {
    fn align(&self, _reference: &Path, query: &Path) -> Result<Vec<AlignmentRecord>, AlignError> {
        let name = query.file_name().unwrap().to_string_lossy().to_string();
        Ok(self.results.get(&name).cloned().unwrap_or_default())
    }
}

struct FailingAligner;

impl Aligner for FailingAligner {
    fn align(&self, _reference: &Path, _query: &Path) -> Result<Vec<AlignmentRecord>, AlignError> {
        Err(AlignError::Io(std::io::Error::other("aligner crashed")))
    }
}

fn alignment(kmer: &str, target: &str, start: i64, end: i64) -> AlignmentRecord {
    AlignmentRecord {
        query_name: kmer.to_string(),
        target_name: target.to_string(),
        query_start: start,
        query_end: end,
    }
}

/// Lays out breakpoints, reference and k-mer directory in a temp dir
fn setup(breakpoints: &str, sequins: &[(&str, &str)]) -> (TempDir, PipelineConfig) {
    let dir = TempDir::new().unwrap();
    let kmer_dir = dir.path().join("K");
    std::fs::create_dir(&kmer_dir).unwrap();

    std::fs::write(dir.path().join("breaks.bed"), breakpoints).unwrap();
    std::fs::write(dir.path().join("ref.fa"), ">SEQ1\nACGTACGTACGT\n").unwrap();
    for (name, content) in sequins {
        std::fs::write(kmer_dir.join(name), content).unwrap();
    }

    let mut config = PipelineConfig::new(
        dir.path().join("breaks.bed"),
        kmer_dir,
        dir.path().join("ref.fa"),
    );
    config.output = dir.path().join("kmer.stats");
    config.sequin_prefix = 'S';

    (dir, config)
}

fn read_report(path: &PathBuf) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn test_unaligned_kmers_are_reported() {
    let (_dir, config) = setup(
        "chrT\t100\t200\tSEQ1\n",
        &[("SEQ1", ">K1\nACGT\n>K2\nACGT\n")],
    );
    let aligner = FakeAligner {
        results: HashMap::from([(
            "SEQ1".to_string(),
            vec![alignment("K1", "SEQ1", 500, 531)],
        )]),
    };

    let summary = run_with_aligner(&config, &aligner).unwrap();

    assert_eq!(read_report(&config.output), "K2\t????\tSEQ1\n");
    assert_eq!(summary.sequins.len(), 1);
    assert_eq!(summary.sequins[0].aligned, 1);
    assert_eq!(summary.sequins[0].unaligned, 1);
    // K1 aligned away from the breakpoint; still not reported
    assert_eq!(summary.total_spanning(), 0);
    assert_eq!(summary.reference_sequences, Some(1));
}

#[test]
fn test_spanning_kmers_counted_not_reported() {
    let (_dir, config) = setup(
        "chrT 100 200 SEQ1\n",
        &[("SEQ1", ">K1\n>K2\n")],
    );
    let aligner = FakeAligner {
        results: HashMap::from([(
            "SEQ1".to_string(),
            vec![
                alignment("K1", "SEQ1", 80, 111),
                alignment("K2", "SEQ1", 100, 131),
            ],
        )]),
    };

    let summary = run_with_aligner(&config, &aligner).unwrap();

    assert_eq!(read_report(&config.output), "");
    assert_eq!(summary.total_spanning(), 2);
}

#[test]
fn test_sequins_processed_in_name_order() {
    let (_dir, config) = setup(
        "chrT 100 200 SEQ1\nchrT 100 200 SEQ2\n",
        &[("SEQ2", ">B1\n"), ("SEQ1", ">A1\n"), ("other", ">X\n")],
    );
    let aligner = FakeAligner {
        results: HashMap::new(),
    };

    let summary = run_with_aligner(&config, &aligner).unwrap();

    assert_eq!(
        read_report(&config.output),
        "A1\t????\tSEQ1\nB1\t????\tSEQ2\n"
    );
    assert_eq!(summary.total_kmers(), 2);
}

#[test]
fn test_rerun_truncates_by_default_and_duplicates_with_append() {
    let (_dir, mut config) = setup("chrT 100 200 SEQ1\n", &[("SEQ1", ">K1\n")]);
    let aligner = FakeAligner {
        results: HashMap::new(),
    };

    run_with_aligner(&config, &aligner).unwrap();
    run_with_aligner(&config, &aligner).unwrap();
    assert_eq!(read_report(&config.output), "K1\t????\tSEQ1\n");

    config.append = true;
    run_with_aligner(&config, &aligner).unwrap();
    assert_eq!(
        read_report(&config.output),
        "K1\t????\tSEQ1\nK1\t????\tSEQ1\n"
    );
}

#[test]
fn test_two_bit_reference_skips_fasta_check() {
    let (dir, mut config) = setup("chrT 100 200 SEQ1\n", &[("SEQ1", ">K1\n")]);
    // Not FASTA; only the aligner reads it
    config.reference = dir.path().join("ref.2bit");
    std::fs::write(&config.reference, [0x1a, 0x41, 0x27, 0x43]).unwrap();
    let aligner = FakeAligner {
        results: HashMap::new(),
    };

    let summary = run_with_aligner(&config, &aligner).unwrap();

    assert_eq!(summary.reference_sequences, None);
    assert_eq!(read_report(&config.output), "K1\t????\tSEQ1\n");
}

#[test]
fn test_unknown_sequin_aborts_when_aligned() {
    let (_dir, config) = setup("chrT 100 200 SEQ1\n", &[("SEQ9", ">K1\n")]);
    let aligner = FakeAligner {
        results: HashMap::from([(
            "SEQ9".to_string(),
            vec![alignment("K1", "SEQ9", 0, 31)],
        )]),
    };

    let err = run_with_aligner(&config, &aligner).unwrap_err();
    assert!(matches!(err, PipelineError::Classify(_)));
}

#[test]
fn test_aligner_failure_aborts() {
    let (_dir, config) = setup("chrT 100 200 SEQ1\n", &[("SEQ1", ">K1\n")]);

    let err = run_with_aligner(&config, &FailingAligner).unwrap_err();
    assert!(matches!(err, PipelineError::Align(_)));
}

#[test]
fn test_malformed_breakpoints_abort() {
    let (_dir, config) = setup("chrT 100\n", &[("SEQ1", ">K1\n")]);
    let aligner = FakeAligner {
        results: HashMap::new(),
    };

    let err = run_with_aligner(&config, &aligner).unwrap_err();
    assert!(matches!(err, PipelineError::Parse(_)));
    assert!(!config.output.exists());
}

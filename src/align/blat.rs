use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::align::{AlignError, Aligner};
use crate::core::alignment::AlignmentRecord;
use crate::parsing::psl::{parse_psl_file, DEFAULT_MATCH_PREFIX};

/// Runs `<binary> <reference> <query> <output>` and reads `output` back as PSL
#[derive(Debug, Clone)]
pub struct BlatAligner {
    binary: PathBuf,
    output: PathBuf,
    match_prefix: String,
}

impl BlatAligner {
    #[must_use]
    pub fn new(binary: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            output: output.into(),
            match_prefix: DEFAULT_MATCH_PREFIX.to_string(),
        }
    }

    /// Keep only alignment lines starting with `prefix`
    #[must_use]
    pub fn with_match_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.match_prefix = prefix.into();
        self
    }

    fn tool_name(&self) -> String {
        self.binary.display().to_string()
    }

    /// The output path must not exist when the tool starts
    fn remove_previous_output(&self) -> Result<(), AlignError> {
        match std::fs::remove_file(&self.output) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AlignError::Io(e)),
        }
    }
}

impl Aligner for BlatAligner {
    fn align(&self, reference: &Path, query: &Path) -> Result<Vec<AlignmentRecord>, AlignError> {
        self.remove_previous_output()?;

        debug!(
            "Running {} {} {} {}",
            self.tool_name(),
            reference.display(),
            query.display(),
            self.output.display()
        );

        let output = Command::new(&self.binary)
            .arg(reference)
            .arg(query)
            .arg(&self.output)
            .output()
            .map_err(|source| AlignError::Spawn {
                tool: self.tool_name(),
                source,
            })?;

        if !output.status.success() {
            return Err(AlignError::ToolFailed {
                tool: self.tool_name(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let records = parse_psl_file(&self.output, &self.match_prefix)?;
        if records.is_empty() {
            warn!(
                "No alignment lines starting with '{}' for {}",
                self.match_prefix,
                query.display()
            );
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_binary_is_spawn_error() {
        let dir = TempDir::new().unwrap();
        let aligner = BlatAligner::new("/nonexistent/blat", dir.path().join("out.psl"));

        let err = aligner
            .align(Path::new("ref.fa"), Path::new("query.fa"))
            .unwrap_err();
        assert!(matches!(err, AlignError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_tool_failure() {
        let dir = TempDir::new().unwrap();
        let aligner = BlatAligner::new("false", dir.path().join("out.psl"));

        let err = aligner
            .align(Path::new("ref.fa"), Path::new("query.fa"))
            .unwrap_err();
        assert!(matches!(err, AlignError::ToolFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_stale_output_removed_before_run() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.psl");
        std::fs::write(
            &out,
            "31\t0\t0\t0\t0\t0\t0\t0\t+\tK1\t31\t0\t31\tSEQ1\t5000\t10\t41\n",
        )
        .unwrap();

        // `true` succeeds without writing anything, so the stale file must be gone
        let aligner = BlatAligner::new("true", &out);
        let err = aligner
            .align(Path::new("ref.fa"), Path::new("query.fa"))
            .unwrap_err();

        assert!(!out.exists());
        assert!(matches!(err, AlignError::Parse(_)));
    }
}

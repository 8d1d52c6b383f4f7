use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::kmer::KmerRecord;

/// Tab-separated report of unaligned k-mers: `name\tsequence\tsequin`
pub struct ReportWriter<W: Write> {
    writer: W,
    lines: usize,
}

impl ReportWriter<BufWriter<File>> {
    /// Open the report file, truncating it unless `append` is set
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be opened.
    pub fn create(path: &Path, append: bool) -> std::io::Result<Self> {
        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }

        Ok(Self::new(BufWriter::new(options.open(path)?)))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    /// # Errors
    ///
    /// Returns an IO error if the line cannot be written.
    pub fn write_unaligned(&mut self, kmer: &KmerRecord, sequin: &str) -> std::io::Result<()> {
        writeln!(self.writer, "{}\t{}\t{sequin}", kmer.name, kmer.sequence)?;
        self.lines += 1;
        Ok(())
    }

    #[must_use]
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    /// Flush and hand back the underlying writer
    ///
    /// # Errors
    ///
    /// Returns an IO error if flushing fails.
    pub fn finish(mut self) -> std::io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

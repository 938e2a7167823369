//! Plain text report formatter

use super::{FileReport, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - one line per file plus a total
pub struct TextFormatter<W: Write> {
    writer: W,
    files: usize,
    changed: usize,
    replacements: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            files: 0,
            changed: 0,
            replacements: 0,
        }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_file(&mut self, report: &FileReport) -> Result<()> {
        self.files += 1;
        self.replacements += report.replacements;
        if report.changed {
            self.changed += 1;
        }
        writeln!(
            self.writer,
            "{}: {} replacement(s)",
            report.path, report.replacements
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(
            self.writer,
            "Total: {} replacement(s) in {} file(s), {} changed",
            self.replacements, self.files, self.changed
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

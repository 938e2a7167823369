//! Report formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Outcome of running the replacer over one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Input path as given after glob resolution
    pub path: String,
    /// Total replacements across all rules
    pub replacements: usize,
    /// Whether the output differs from the input
    pub changed: bool,
}

impl FileReport {
    /// Build a report for `path`
    pub fn new(path: &Path, replacements: usize, changed: bool) -> Self {
        Self {
            path: path.display().to_string(),
            replacements,
            changed,
        }
    }
}

/// Trait for report formatters
pub trait OutputFormatter: Send + Sync {
    /// Record the outcome for a single file
    fn format_file(&mut self, report: &FileReport) -> Result<()>;

    /// Finalize output (e.g., totals or the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

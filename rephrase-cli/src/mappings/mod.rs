//! Mapping source parsing
//!
//! Mapping files hold `(from, to)` pairs as CSV rows or Markdown table rows.
//! Pairs keep file order, and files keep command-line order.

pub mod csv;
pub mod markdown;

use crate::error::CliError;
use crate::input::FileReader;
use anyhow::Result;
use rephrase_core::MappingSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Supported mapping file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingFormat {
    /// Comma-separated `from,to` rows
    Csv,
    /// Rows of Markdown tables
    Markdown,
}

impl MappingFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(MappingFormat::Csv),
            "md" | "markdown" => Some(MappingFormat::Markdown),
            _ => None,
        }
    }

    /// Parse mapping pairs from file content
    pub fn parse(&self, content: &str) -> Result<MappingSet> {
        match self {
            MappingFormat::Csv => csv::parse(content),
            MappingFormat::Markdown => markdown::parse(content),
        }
    }
}

/// Pairs loaded from one mapping file
#[derive(Debug, Clone)]
pub struct MappingSource {
    /// Where the pairs came from
    pub path: PathBuf,
    /// The pairs, in file order
    pub pairs: MappingSet,
}

/// Load one mapping file, detecting its format unless `format` is given
pub fn load_file(path: &Path, format: Option<MappingFormat>) -> Result<MappingSource> {
    let format = format
        .or_else(|| MappingFormat::from_path(path))
        .ok_or_else(|| CliError::MappingSource {
            path: path.display().to_string(),
            reason: "unknown format, use --mapping-format".to_string(),
        })?;

    if !path.is_file() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }

    // Lossy decoding leaves U+FFFD behind, which the engine rejects per pair
    let content = FileReader::read_text_lossy(path)?;
    let pairs = format.parse(&content).map_err(|e| CliError::MappingSource {
        path: path.display().to_string(),
        reason: format!("{e:#}"),
    })?;

    log::info!("Loaded {} mapping pair(s) from {}", pairs.len(), path.display());
    Ok(MappingSource {
        path: path.to_path_buf(),
        pairs,
    })
}

/// Load every file in order
pub fn load_files(paths: &[PathBuf], format: Option<MappingFormat>) -> Result<Vec<MappingSource>> {
    paths.iter().map(|path| load_file(path, format)).collect()
}

/// Concatenate sources into one mapping set, optionally inverted
pub fn combine(sources: &[MappingSource], invert: bool) -> MappingSet {
    let combined: MappingSet = sources
        .iter()
        .flat_map(|source| source.pairs.iter().cloned())
        .collect();

    if invert {
        combined.inverted()
    } else {
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            MappingFormat::from_path(Path::new("words.CSV")),
            Some(MappingFormat::Csv)
        );
        assert_eq!(
            MappingFormat::from_path(Path::new("docs/terms.md")),
            Some(MappingFormat::Markdown)
        );
        assert_eq!(
            MappingFormat::from_path(Path::new("terms.markdown")),
            Some(MappingFormat::Markdown)
        );
        assert_eq!(MappingFormat::from_path(Path::new("terms.txt")), None);
        assert_eq!(MappingFormat::from_path(Path::new("terms")), None);
    }

    #[test]
    fn test_load_and_combine_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let csv_path = temp_dir.path().join("first.csv");
        let md_path = temp_dir.path().join("second.md");
        fs::write(&csv_path, "colour,color\ncentre,center\n").unwrap();
        fs::write(&md_path, "| from | to |\n|---|---|\n| grey | gray |\n").unwrap();

        let sources = load_files(&[csv_path, md_path], None).unwrap();
        let combined = combine(&sources, false);
        let froms: Vec<&str> = combined.iter().map(|p| p.from.as_str()).collect();
        assert_eq!(froms, vec!["colour", "centre", "grey"]);

        let inverted = combine(&sources, true);
        assert_eq!(inverted.as_slice()[2].from, "gray");
    }

    #[test]
    fn test_unknown_extension_needs_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pairs.txt");
        fs::write(&path, "a,b\n").unwrap();

        let err = load_file(&path, None).unwrap_err();
        assert!(err.to_string().contains("unknown format"));

        let source = load_file(&path, Some(MappingFormat::Csv)).unwrap();
        assert_eq!(source.pairs.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = load_file(Path::new("/nonexistent/pairs.csv"), None).unwrap_err();
        assert!(err.to_string().starts_with("File not found"));
    }

    #[test]
    fn test_parse_error_names_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.csv");
        fs::write(&path, "lonely\n").unwrap();

        let err = load_file(&path, None).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("broken.csv"));
        assert!(msg.contains("expected at least 2"));
    }
}

//! File reading and writing utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File access for input texts and mapping sources
pub struct FileReader;

impl FileReader {
    /// Read a file as raw bytes
    ///
    /// Input texts are kept as bytes so that invalid UTF-8 survives a
    /// rewrite untouched.
    pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Read a file as text, replacing invalid UTF-8 with U+FFFD
    pub fn read_text_lossy(path: &Path) -> Result<String> {
        let bytes = Self::read_bytes(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Replace the contents of a file
    pub fn write_bytes(path: &Path, content: &[u8]) -> Result<()> {
        fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }
}

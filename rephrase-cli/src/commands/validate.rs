//! Validate command implementation

use crate::error::CliError;
use crate::mappings::{self, MappingFormat};
use anyhow::Result;
use clap::Args;
use rephrase_core::Replacer;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Mapping files to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub mapping: Vec<PathBuf>,

    /// Mapping file format (default: detect from extension)
    #[arg(long, value_enum)]
    pub mapping_format: Option<MappingFormat>,

    /// Validate the pairs in the `to -> from` direction
    #[arg(long)]
    pub invert: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let mut invalid_pairs = 0;
        let mut unreadable_files = 0;

        for path in &self.mapping {
            println!("Validating mapping file: {}", path.display());

            let source = match mappings::load_file(path, self.mapping_format) {
                Ok(source) => source,
                Err(e) => {
                    println!("✗ Could not read mappings!");
                    println!("  Error: {e:#}");
                    unreadable_files += 1;
                    continue;
                }
            };

            let pairs = if self.invert {
                source.pairs.inverted()
            } else {
                source.pairs
            };
            let replacer = Replacer::new(&pairs);

            for skipped in replacer.skipped() {
                println!(
                    "✗ Pair #{} {:?} -> {:?}: {}",
                    skipped.index + 1,
                    skipped.pair.from,
                    skipped.pair.to,
                    skipped.error
                );
            }

            if replacer.skipped().is_empty() {
                println!("✓ All {} pair(s) are valid!", pairs.len());
            } else {
                println!(
                    "  {} of {} pair(s) are invalid",
                    replacer.skipped().len(),
                    pairs.len()
                );
            }
            invalid_pairs += replacer.skipped().len();
        }

        if unreadable_files > 0 {
            anyhow::bail!("Validation failed: {unreadable_files} mapping file(s) could not be read");
        }
        if invalid_pairs > 0 {
            return Err(CliError::InvalidMappings(invalid_pairs).into());
        }
        Ok(())
    }
}

//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. List your mapping files under [mappings]");
        println!("2. Validate the mapping files:");
        println!("   rephrase validate -m words.csv");
        println!("3. Use it for replacing:");
        println!(
            "   rephrase replace -i 'docs/*.md' --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    fn template() -> &'static str {
        r#"# rephrase configuration

[processing]
# Apply every mapping in the `to -> from` direction
invert = false

# Process files in parallel once this many files are matched (0 = never)
parallel_threshold_files = 16

# Worker threads for parallel processing (0 = one per CPU)
worker_threads = 0

[mappings]
# Mapping files used when no --mapping is given, applied in order.
# Relative paths are resolved against this file's directory.
# CSV files hold `from,to` rows; Markdown files hold tables whose first two
# columns are `from` and `to`.
files = [
    # "spelling.csv",
    # "terms.md",
]

[output]
# Report format: "text" or "json"
default_format = "text"

# Pretty print JSON reports
pretty_json = true
"#
    }
}

//! Replace command implementation

use crate::commands::init_logging;
use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::mappings::{self, MappingFormat};
use crate::output::{FileReport, JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{bail, Context, Result};
use clap::Args;
use rayon::prelude::*;
use rephrase_core::Replacer;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Arguments for the replace command
#[derive(Debug, Args)]
pub struct ReplaceArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Mapping files (CSV or Markdown tables), applied in the given order
    #[arg(short, long, value_name = "FILE")]
    pub mapping: Vec<PathBuf>,

    /// Mapping file format (default: detect from extension)
    #[arg(long, value_enum)]
    pub mapping_format: Option<MappingFormat>,

    /// Apply mappings in the `to -> from` direction
    #[arg(long)]
    pub invert: bool,

    /// Print rewritten text to stdout instead of writing files back
    #[arg(long, conflicts_with = "dry_run")]
    pub stdout: bool,

    /// Report replacements without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Force parallel processing even for few files
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel processing
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per file plus a total
    Text,
    /// JSON array of per-file reports
    Json,
}

/// Result of processing one input file
struct FileOutcome {
    report: FileReport,
    output: Option<Vec<u8>>,
}

impl ReplaceArgs {
    /// Execute the replace command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting replacement");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let replacer = self.build_replacer(&config)?;

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to process", files.len());

        let mut progress = ProgressReporter::new(self.quiet || self.stdout);
        progress.init_files(files.len() as u64);

        let outcomes = if self.use_parallel(&config, files.len()) {
            let threads = self.worker_threads(&config);
            log::info!("Processing in parallel with {threads} thread(s)");

            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build worker pool")?;
            pool.install(|| {
                files
                    .par_iter()
                    .map(|path| self.process_file(path, &replacer, &progress))
                    .collect::<Result<Vec<_>>>()
            })?
        } else {
            files
                .iter()
                .map(|path| self.process_file(path, &replacer, &progress))
                .collect::<Result<Vec<_>>>()?
        };

        progress.finish();

        if self.stdout {
            let mut stdout = io::stdout().lock();
            for output in outcomes.iter().filter_map(|o| o.output.as_deref()) {
                stdout.write_all(output)?;
            }
            stdout.flush()?;
        }

        self.write_report(&config, &outcomes)
    }

    /// Load, combine and compile the mapping files
    fn build_replacer(&self, config: &CliConfig) -> Result<Replacer> {
        let paths = if self.mapping.is_empty() {
            let base = self.config.as_deref().and_then(Path::parent);
            config
                .mappings
                .files
                .iter()
                .map(|path| match base {
                    Some(base) if path.is_relative() => base.join(path),
                    _ => path.clone(),
                })
                .collect()
        } else {
            self.mapping.clone()
        };

        if paths.is_empty() {
            bail!("No mapping files given; pass --mapping or list them under [mappings] in the config");
        }

        let sources = mappings::load_files(&paths, self.mapping_format)?;
        let invert = self.invert || config.processing.invert;
        let pairs = mappings::combine(&sources, invert);

        let replacer = Replacer::new(&pairs);
        log::info!(
            "Compiled {} rule(s), skipped {} invalid pair(s){}",
            replacer.rules().len(),
            replacer.skipped().len(),
            if invert { " (inverted)" } else { "" }
        );
        Ok(replacer)
    }

    fn use_parallel(&self, config: &CliConfig, file_count: usize) -> bool {
        let threshold = config.processing.parallel_threshold_files;
        self.parallel || (threshold > 0 && file_count >= threshold)
    }

    fn worker_threads(&self, config: &CliConfig) -> usize {
        self.threads
            .filter(|&n| n > 0)
            .or_else(|| Some(config.processing.worker_threads).filter(|&n| n > 0))
            .unwrap_or_else(num_cpus::get)
    }

    fn process_file(
        &self,
        path: &Path,
        replacer: &Replacer,
        progress: &ProgressReporter,
    ) -> Result<FileOutcome> {
        let input = FileReader::read_bytes(path)?;
        let replaced = replacer.replace_bytes(&input);
        let changed = replaced.output != input;

        log::debug!(
            "{}: {} replacement(s), per rule {:?}",
            path.display(),
            replaced.replacements(),
            replaced.per_rule
        );

        if changed && !self.stdout && !self.dry_run {
            FileReader::write_bytes(path, &replaced.output)?;
        }

        progress.file_completed(&path.display().to_string());

        Ok(FileOutcome {
            report: FileReport::new(path, replaced.replacements(), changed),
            output: self.stdout.then_some(replaced.output),
        })
    }

    fn write_report(&self, config: &CliConfig, outcomes: &[FileOutcome]) -> Result<()> {
        // Rewritten text owns stdout in --stdout mode
        let writer: Box<dyn Write + Send + Sync> = if self.stdout {
            Box::new(io::stderr())
        } else {
            Box::new(io::stdout())
        };

        let mut formatter: Box<dyn OutputFormatter> =
            match self.format.unwrap_or(config.output.default_format) {
                OutputFormat::Text => Box::new(TextFormatter::new(writer)),
                OutputFormat::Json => {
                    Box::new(JsonFormatter::new(writer, config.output.pretty_json))
                }
            };

        for outcome in outcomes {
            formatter.format_file(&outcome.report)?;
        }
        formatter.finish()
    }
}

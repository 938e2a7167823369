//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Mapping file could not be parsed
    MappingSource {
        /// Path of the mapping file
        path: String,
        /// What went wrong
        reason: String,
    },
    /// Mapping pairs rejected during validation
    InvalidMappings(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::MappingSource { path, reason } => {
                write!(f, "Invalid mapping file {path}: {reason}")
            }
            CliError::InvalidMappings(count) => {
                write!(f, "Validation failed: {count} invalid mapping pair(s)")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

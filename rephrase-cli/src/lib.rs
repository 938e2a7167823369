//! Rephrase CLI library
//!
//! This library provides the command-line interface for the rephrase
//! case-preserving replacement engine: mapping file parsing, file
//! discovery, and result reporting.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod mappings;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

//! `rephrase` command-line entry point

use clap::Parser;
use rephrase_cli::commands::Commands;

/// Replace words and phrases in text files while preserving capitalization
/// and whitespace
#[derive(Debug, Parser)]
#[command(name = "rephrase", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}

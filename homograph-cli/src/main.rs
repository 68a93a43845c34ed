//! Main entry point for the homograph CLI.
//!
//! It provides commands for working with path homographs:
//! - `canonicalize`: Print the canonical form of paths
//! - `check`: Compare a path with another path or the forbidden path
//! - `run`: Run test cases against the configured scenario
//! - `interactive`: Menu-driven test runner and manual checker

use clap::Parser;
use homograph_cli::cli::{Cli, Command};
use homograph_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = homograph::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        working_dir: cli.working_dir,
        forbidden: cli.forbidden,
        config_dir: cli.config_dir,
        logger,
    };

    // Execute the command
    let result = match cli.command {
        Command::Canonicalize(cmd) => cmd.execute(&global),
        Command::Check(cmd) => cmd.execute(&global),
        Command::Run(cmd) => cmd.execute(&global),
        Command::Interactive(cmd) => cmd.execute(&global),
        Command::Validate(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

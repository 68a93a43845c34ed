//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CanonicalizeCommand, CheckCommand, CompletionsCommand, InteractiveCommand, RunCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Canonicalize paths and detect path homographs.
#[derive(Parser)]
#[command(name = "homograph")]
#[command(version, about = "Canonicalize paths and detect path homographs", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Working directory relative paths are resolved against
    #[arg(long, value_name = "DIR", global = true, env = "HOMOGRAPH_WORKING_DIR")]
    pub working_dir: Option<String>,

    /// Forbidden path candidates are compared with
    #[arg(long, value_name = "PATH", global = true, env = "HOMOGRAPH_FORBIDDEN")]
    pub forbidden: Option<String>,

    /// Override the user configuration directory
    #[arg(long, value_name = "DIR", global = true, env = "HOMOGRAPH_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the canonical form of each path
    Canonicalize(CanonicalizeCommand),

    /// Check whether a path is a homograph
    Check(CheckCommand),

    /// Run the configured test cases
    Run(RunCommand),

    /// Start the interactive menu
    Interactive(InteractiveCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

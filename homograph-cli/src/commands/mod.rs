//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `canonicalize`: Print canonical paths
//! - `check`: Homograph verdict for one pair of paths
//! - `run`: Run test cases and report
//! - `interactive`: Menu loop over stdin
//! - `validate`: Validate configuration file
//! - `completions`: Shell completion scripts

pub mod canonicalize;
pub mod check;
pub mod completions;
pub mod interactive;
pub mod run;
pub mod validate;

pub use canonicalize::CanonicalizeCommand;
pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use interactive::InteractiveCommand;
pub use run::RunCommand;
pub use validate::ValidateCommand;

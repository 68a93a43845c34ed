//! Utility functions for CLI operations.
//!
//! This module provides the global options shared by every command and the
//! configuration loading they all go through.

use crate::error::CliError;
use homograph::{Config, ConfigBuilder, Logger, Scenario};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the working directory.
    pub working_dir: Option<String>,

    /// Override the forbidden path.
    pub forbidden: Option<String>,

    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,

    /// Logger configured from `verbose`/`quiet`.
    pub logger: Logger,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    let overrides = Config {
        working_dir: global.working_dir.clone(),
        forbidden: global.forbidden.clone(),
        ..Default::default()
    };

    let config = builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    global.logger.debug(&format!(
        "working directory: {}",
        config.scenario().working_dir()
    ));

    Ok(config)
}

/// Load configuration and return the scenario it describes.
pub fn load_scenario(global: &GlobalOptions) -> Result<Scenario, CliError> {
    Ok(load_configuration(global)?.scenario())
}

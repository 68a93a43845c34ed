//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `HOMOGRAPH_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::OutputFormat;
use std::env;

/// Overrides `working_dir`.
pub const WORKING_DIR_ENV: &str = "HOMOGRAPH_WORKING_DIR";

/// Overrides `forbidden`.
pub const FORBIDDEN_ENV: &str = "HOMOGRAPH_FORBIDDEN";

/// Overrides `output_format`.
pub const OUTPUT_FORMAT_ENV: &str = "HOMOGRAPH_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use homograph::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Unset variables leave the configuration untouched. Empty values are
    /// ignored rather than clearing a configured field.
    ///
    /// # Errors
    ///
    /// Returns an error if `HOMOGRAPH_OUTPUT_FORMAT` names an unknown format.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(working_dir) = Self::var(WORKING_DIR_ENV) {
            config.working_dir = Some(working_dir);
        }

        if let Some(forbidden) = Self::var(FORBIDDEN_ENV) {
            config.forbidden = Some(forbidden);
        }

        if let Some(format) = Self::var(OUTPUT_FORMAT_ENV) {
            let format: OutputFormat = format.parse().map_err(|message| Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message,
            })?;
            config.output_format = Some(format);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.is_empty())
    }
}

//! Configuration validation.
//!
//! Canonicalization itself accepts any string. Validation only guards the
//! values the scenario is built from, so that a typo in a configuration file
//! is reported instead of silently producing a meaningless run.

use crate::config::schema::{CaseDefinition, Config};
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use homograph::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let relative = Config { working_dir: Some("home/user".into()), ..Default::default() };
/// assert!(ConfigValidator::validate(&relative).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error when:
    /// - `working_dir` is set but does not start with `/`
    /// - `forbidden` is set but blank
    /// - a case path is blank
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref working_dir) = config.working_dir {
            Self::validate_working_dir(working_dir)?;
        }

        if let Some(ref forbidden) = config.forbidden {
            if forbidden.trim().is_empty() {
                return Err(Error::Validation {
                    field: "forbidden".into(),
                    message: "forbidden path cannot be empty".into(),
                });
            }
        }

        if let Some(ref cases) = config.cases {
            Self::validate_cases(cases)?;
        }

        Ok(())
    }

    /// Validate a working directory value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not absolute.
    pub fn validate_working_dir(working_dir: &str) -> Result<()> {
        if !working_dir.starts_with('/') {
            return Err(Error::Validation {
                field: "working_dir".into(),
                message: format!("working directory must be absolute, got '{working_dir}'"),
            });
        }
        Ok(())
    }

    fn validate_cases(cases: &[CaseDefinition]) -> Result<()> {
        for (index, case) in cases.iter().enumerate() {
            if case.path.trim().is_empty() {
                return Err(Error::Validation {
                    field: format!("cases[{index}].path"),
                    message: "case path cannot be empty".into(),
                });
            }
        }
        Ok(())
    }
}

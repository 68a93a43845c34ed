//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use homograph::config::{Config, ConfigMerger};
///
/// let low = Config { forbidden: Some("/low".to_string()), ..Default::default() };
/// let high = Config { forbidden: Some("/high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.forbidden, Some("/high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Scalar fields: source overwrites if Some
    /// - Cases: complete replacement, never concatenated
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.working_dir.is_some() {
            target.working_dir.clone_from(&source.working_dir);
        }

        if source.forbidden.is_some() {
            target.forbidden.clone_from(&source.forbidden);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.cases.is_some() {
            target.cases.clone_from(&source.cases);
        }
    }
}

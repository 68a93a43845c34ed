//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::scenario::{builtin_cases, Scenario, TestCase, DEFAULT_FORBIDDEN, DEFAULT_WORKING_DIR};

/// Complete configuration structure.
///
/// Every field is optional so that configurations from several sources can
/// be layered; unset fields fall back to built-in defaults.
///
/// # Examples
///
/// ```
/// use homograph::Config;
///
/// let config: Config = serde_yaml::from_str(
///     "working_dir: /srv/app\nforbidden: /srv/app/.env\n",
/// ).unwrap();
///
/// let scenario = config.scenario();
/// assert!(scenario.check("./.env"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Absolute directory relative paths are resolved against.
    pub working_dir: Option<String>,

    /// The path candidates are checked against.
    pub forbidden: Option<String>,

    /// Report format for case runs.
    pub output_format: Option<OutputFormat>,

    /// Cases to run instead of the built-in list.
    pub cases: Option<Vec<CaseDefinition>>,
}

/// A test case as written in a configuration file.
///
/// ```yaml
/// cases:
///   - path: ../secret/password.txt
///     expected: true
///   - path: password.txt
///     expected: false
///     note: same filename, different directory
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CaseDefinition {
    /// Candidate path.
    pub path: String,
    /// Whether the candidate should match the forbidden path.
    pub expected: bool,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<&CaseDefinition> for TestCase {
    fn from(def: &CaseDefinition) -> Self {
        Self {
            path: def.path.clone(),
            expected: def.expected,
            note: def.note.clone(),
        }
    }
}

impl From<TestCase> for CaseDefinition {
    fn from(case: TestCase) -> Self {
        Self {
            path: case.path,
            expected: case.expected,
            note: case.note,
        }
    }
}

impl Config {
    /// Build the scenario described by this configuration.
    #[must_use]
    pub fn scenario(&self) -> Scenario {
        Scenario::new(
            self.working_dir.as_deref().unwrap_or(DEFAULT_WORKING_DIR),
            self.forbidden.as_deref().unwrap_or(DEFAULT_FORBIDDEN),
        )
    }

    /// The configured cases, or the built-in ones when none are set.
    #[must_use]
    pub fn test_cases(&self) -> Vec<TestCase> {
        match &self.cases {
            Some(cases) => cases.iter().map(TestCase::from).collect(),
            None => builtin_cases(),
        }
    }

    /// The configured report format, or the default.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

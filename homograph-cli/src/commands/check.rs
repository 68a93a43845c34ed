//! Command to check whether a path is a homograph.

use crate::error::CliError;
use crate::utils::{load_scenario, GlobalOptions};
use clap::Args;

/// Check whether a path is a homograph of another path.
///
/// Without `OTHER` the path is compared with the configured forbidden path.
#[derive(Args)]
pub struct CheckCommand {
    /// Candidate path
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Path to compare with (defaults to the forbidden path)
    #[arg(value_name = "OTHER")]
    pub other: Option<String>,

    /// Exit with status 1 unless the paths are homographs
    #[arg(long)]
    pub assert: bool,
}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let scenario = load_scenario(global)?;

        let (other, comparison) = match self.other {
            Some(ref other) => (other.as_str(), scenario.compare_pair(&self.path, other)),
            None => (scenario.forbidden(), scenario.compare(&self.path)),
        };

        global
            .logger
            .info(&format!("{} -> {}", self.path, comparison.left()));
        global
            .logger
            .info(&format!("{other} -> {}", comparison.right()));

        let verdict = comparison.is_homograph();
        println!("{verdict}");

        if self.assert && !verdict {
            return Err(CliError::SemanticFailure(format!(
                "Assertion failed: {} is not a homograph of {other}",
                self.path
            )));
        }

        Ok(())
    }
}

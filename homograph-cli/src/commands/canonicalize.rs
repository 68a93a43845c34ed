//! Command to print the canonical form of paths.

use crate::error::CliError;
use crate::utils::{load_scenario, GlobalOptions};
use clap::Args;
use homograph::CanonicalPath;

/// Print the canonical form of each path.
#[derive(Args)]
pub struct CanonicalizeCommand {
    /// Paths to canonicalize
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl CanonicalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let scenario = load_scenario(global)?;

        for path in &self.paths {
            let canonical = CanonicalPath::resolve(path, scenario.working_dir());
            global.logger.debug(&format!("{path} -> {canonical}"));
            println!("{canonical}");
        }

        Ok(())
    }
}

//! Command to run test cases against the configured scenario.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use homograph::{OutputFormat, Summary};

/// Run every configured test case and print a report.
///
/// Uses the cases from configuration, or the built-in cases when none are
/// configured.
#[derive(Args)]
pub struct RunCommand {
    /// Output format (human or json); overrides configuration
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl RunCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let scenario = config.scenario();
        let cases = config.test_cases();

        global.logger.info(&format!(
            "Running {} cases against {}",
            cases.len(),
            scenario.forbidden()
        ));

        let outcomes = scenario.run(&cases);
        let format = self.format.unwrap_or_else(|| config.output_format());
        let report = format.create_formatter().format(&outcomes)?;
        println!("{report}");

        let summary = Summary::from_outcomes(&outcomes);
        if summary.all_passed() {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} of {} cases failed",
                summary.failed, summary.total
            )))
        }
    }
}

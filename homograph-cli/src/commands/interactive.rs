//! Interactive menu for running cases and comparing paths by hand.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use homograph::output::HumanFormatter;
use homograph::{ReportFormatter, Scenario, TestCase};
use std::io::{self, BufRead, Write};

/// Start the interactive menu.
#[derive(Args)]
pub struct InteractiveCommand {}

impl InteractiveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let session = Session::new(config.scenario(), config.test_cases());

        let stdin = io::stdin();
        let stdout = io::stdout();
        session.run(stdin.lock(), stdout.lock())
    }
}

/// One menu session over a reader and a writer.
pub struct Session {
    scenario: Scenario,
    cases: Vec<TestCase>,
}

impl Session {
    pub fn new(scenario: Scenario, cases: Vec<TestCase>) -> Self {
        Self { scenario, cases }
    }

    /// Run the menu until the user exits or input ends.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<(), CliError> {
        writeln!(output, "\nWelcome to the Path Homograph Detection Lab!\n")?;

        loop {
            writeln!(output, "Select an option:")?;
            writeln!(output, "1. Run Automated Test Cases")?;
            writeln!(output, "2. Manual Homograph Testing Mode")?;
            writeln!(output, "3. Exit")?;

            let Some(choice) = prompt(&mut input, &mut output, "Enter your choice (1/2/3): ")?
            else {
                break;
            };

            match choice.as_str() {
                "1" => self.run_cases(&mut output)?,
                "2" => {
                    if !self.manual_check(&mut input, &mut output)? {
                        break;
                    }
                }
                "3" => {
                    writeln!(output, "\nExiting the program. Goodbye!\n")?;
                    break;
                }
                _ => writeln!(output, "Invalid choice. Please enter 1, 2, or 3.\n")?,
            }
        }

        output.flush()?;
        Ok(())
    }

    fn run_cases<W: Write>(&self, output: &mut W) -> Result<(), CliError> {
        let (homographs, distinct): (Vec<TestCase>, Vec<TestCase>) =
            self.cases.iter().cloned().partition(|case| case.expected);

        for (title, cases) in [("Non-Homograph", distinct), ("Homograph", homographs)] {
            if cases.is_empty() {
                continue;
            }
            writeln!(output, "\nRunning {title} Test Cases:")?;
            let report = HumanFormatter.format(&self.scenario.run(&cases))?;
            writeln!(output, "{report}\n")?;
        }

        Ok(())
    }

    /// Returns false when input ended before both paths were read.
    fn manual_check<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<bool, CliError> {
        writeln!(
            output,
            "\nDefault Working Directory: {}",
            self.scenario.working_dir()
        )?;

        let Some(first) = prompt(input, output, "Enter the first path to test: ")? else {
            return Ok(false);
        };
        let Some(second) = prompt(input, output, "Enter the second path to test: ")? else {
            return Ok(false);
        };

        let verdict = self.scenario.compare_pair(&first, &second).is_homograph();
        writeln!(output, "\nAre the two paths homographs? {verdict}\n")?;
        Ok(true)
    }
}

/// Print `message` and read one trimmed line, or `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use homograph::builtin_cases;

    fn run_session(input: &str) -> String {
        let session = Session::new(Scenario::default(), builtin_cases());
        let mut output = Vec::new();
        session.run(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let output = run_session("3\n");
        assert!(output.contains("Welcome to the Path Homograph Detection Lab!"));
        assert!(output.contains("Exiting the program. Goodbye!"));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let output = run_session("9\n3\n");
        assert!(output.contains("Invalid choice. Please enter 1, 2, or 3."));
        assert_eq!(output.matches("Select an option:").count(), 2);
    }

    #[test]
    fn test_run_cases_groups_by_expectation() {
        let output = run_session("1\n3\n");
        let distinct = output.find("Running Non-Homograph Test Cases:").unwrap();
        let homographs = output.find("Running Homograph Test Cases:").unwrap();
        assert!(distinct < homographs);
        assert!(output.contains("7 passed, 0 failed"));
        assert!(output.contains("8 passed, 0 failed"));
        assert!(!output.contains("FAIL"));
    }

    #[test]
    fn test_manual_check() {
        let output = run_session("2\n../secret/password.txt\n/home/user/secret/password.txt\n3\n");
        assert!(output.contains("Default Working Directory: /home/user/cse453/"));
        assert!(output.contains("Are the two paths homographs? true"));
    }

    #[test]
    fn test_manual_check_trims_input() {
        let output = run_session("2\n  password.txt  \n/home/user/secret/password.txt\n3\n");
        assert!(output.contains("Are the two paths homographs? false"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let output = run_session("");
        assert!(output.ends_with("Enter your choice (1/2/3): "));

        let output = run_session("2\nonly-one-path\n");
        assert!(output.ends_with("Enter the second path to test: "));
    }
}

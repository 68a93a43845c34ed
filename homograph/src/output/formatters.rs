//! Report formatter implementations.

use std::fmt::Write as _;

use serde::Serialize;

use crate::scenario::{CaseOutcome, Summary};
use crate::Result;

use super::ReportFormatter;

/// Formatter for human-readable output.
///
/// Each case is printed as a three-line block followed by a blank line:
///
/// ```text
/// Test path: ../secret/password.txt
/// Expected homograph: true
/// Result: true | Status: PASS
/// ```
///
/// The report ends with a summary line such as `15 passed, 0 failed`.
pub struct HumanFormatter;

impl ReportFormatter for HumanFormatter {
    fn format(&self, outcomes: &[CaseOutcome]) -> Result<String> {
        let mut out = String::new();

        for outcome in outcomes {
            // Writing to a String cannot fail
            let _ = writeln!(out, "Test path: {}", outcome.path);
            let _ = writeln!(out, "Expected homograph: {}", outcome.expected);
            let _ = writeln!(
                out,
                "Result: {} | Status: {}",
                outcome.result,
                outcome.status()
            );
            out.push('\n');
        }

        let _ = write!(out, "{}", Summary::from_outcomes(outcomes));
        Ok(out)
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    cases: Vec<JsonCase<'a>>,
    summary: Summary,
}

#[derive(Serialize)]
struct JsonCase<'a> {
    path: &'a str,
    canonical: &'a str,
    expected: bool,
    result: bool,
    status: String,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, outcomes: &[CaseOutcome]) -> Result<String> {
        let report = JsonReport {
            cases: outcomes
                .iter()
                .map(|o| JsonCase {
                    path: &o.path,
                    canonical: o.canonical.as_str(),
                    expected: o.expected,
                    result: o.result,
                    status: o.status().to_string(),
                })
                .collect(),
            summary: Summary::from_outcomes(outcomes),
        };

        Ok(serde_json::to_string_pretty(&report)?)
    }
}

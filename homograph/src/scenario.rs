//! Scenarios: a working directory, a forbidden path, and the cases run
//! against them.
//!
//! A [`Scenario`] is built once at the call site and passed by reference;
//! running cases never mutates it.
//!
//! # Examples
//!
//! ```
//! use homograph::{builtin_cases, Scenario, Summary};
//!
//! let scenario = Scenario::default();
//! let outcomes = scenario.run(&builtin_cases());
//! let summary = Summary::from_outcomes(&outcomes);
//! assert!(summary.all_passed());
//! ```

use std::fmt;

use serde::Serialize;

use crate::path::{compare, is_homograph, CanonicalPath, Comparison};

/// Working directory used when none is configured.
pub const DEFAULT_WORKING_DIR: &str = "/home/user/cse453/";

/// Forbidden path used when none is configured.
pub const DEFAULT_FORBIDDEN: &str = "/home/user/secret/password.txt";

/// A working directory and the forbidden path candidates are compared with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    working_dir: String,
    forbidden: String,
}

impl Scenario {
    /// Create a scenario.
    #[must_use]
    pub fn new(working_dir: impl Into<String>, forbidden: impl Into<String>) -> Self {
        Self {
            working_dir: working_dir.into(),
            forbidden: forbidden.into(),
        }
    }

    /// The working directory relative candidates resolve against.
    #[must_use]
    pub fn working_dir(&self) -> &str {
        &self.working_dir
    }

    /// The forbidden path.
    #[must_use]
    pub fn forbidden(&self) -> &str {
        &self.forbidden
    }

    /// Canonical form of the forbidden path.
    #[must_use]
    pub fn forbidden_canonical(&self) -> CanonicalPath {
        CanonicalPath::resolve(&self.forbidden, &self.working_dir)
    }

    /// Returns true if `path` names the forbidden location.
    ///
    /// # Examples
    ///
    /// ```
    /// use homograph::Scenario;
    ///
    /// let scenario = Scenario::default();
    /// assert!(scenario.check("./../secret/password.txt"));
    /// assert!(!scenario.check("./secret/password.txt"));
    /// ```
    #[must_use]
    pub fn check(&self, path: &str) -> bool {
        is_homograph(path, &self.forbidden, &self.working_dir)
    }

    /// Compare `path` with the forbidden path, keeping both canonical forms.
    #[must_use]
    pub fn compare(&self, path: &str) -> Comparison {
        compare(path, &self.forbidden, &self.working_dir)
    }

    /// Compare two arbitrary paths under this scenario's working directory.
    #[must_use]
    pub fn compare_pair(&self, path1: &str, path2: &str) -> Comparison {
        compare(path1, path2, &self.working_dir)
    }

    /// Run every case and collect the outcomes in order.
    #[must_use]
    pub fn run(&self, cases: &[TestCase]) -> Vec<CaseOutcome> {
        cases.iter().map(|case| self.run_case(case)).collect()
    }

    /// Run a single case.
    #[must_use]
    pub fn run_case(&self, case: &TestCase) -> CaseOutcome {
        let comparison = self.compare(&case.path);
        let outcome = CaseOutcome {
            path: case.path.clone(),
            expected: case.expected,
            result: comparison.is_homograph(),
            canonical: comparison.left().clone(),
        };

        log::debug!(
            "case {:?} -> {} (expected {}, got {})",
            outcome.path,
            outcome.canonical,
            outcome.expected,
            outcome.result
        );

        outcome
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new(DEFAULT_WORKING_DIR, DEFAULT_FORBIDDEN)
    }
}

/// A candidate path and whether it is expected to match the forbidden path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCase {
    /// The candidate path.
    pub path: String,
    /// Whether the candidate should be a homograph of the forbidden path.
    pub expected: bool,
    /// Optional description shown alongside the case.
    pub note: Option<String>,
}

impl TestCase {
    /// A case expected to be a homograph of the forbidden path.
    #[must_use]
    pub fn homograph(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            expected: true,
            note: None,
        }
    }

    /// A case expected to name a different location.
    #[must_use]
    pub fn distinct(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            expected: false,
            note: None,
        }
    }

    /// Attach a note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// The cases shipped with the tool, written against [`Scenario::default`].
///
/// Non-homographs come first, then homographs.
#[must_use]
pub fn builtin_cases() -> Vec<TestCase> {
    vec![
        TestCase::distinct("password.txt").with_note("same filename, different directory"),
        TestCase::distinct("../password.txt").with_note("same filename, different directory"),
        TestCase::distinct("/home/user/password.txt")
            .with_note("same filename, different directory"),
        TestCase::distinct("/home/user/secrets/password.txt")
            .with_note("similar directory name"),
        TestCase::distinct("/home/user/secret/password_backup.txt")
            .with_note("similar file name"),
        TestCase::distinct("./secret/password.txt")
            .with_note("traversal that misses the target"),
        TestCase::distinct("../../password.txt").with_note("traversal that misses the target"),
        TestCase::homograph("../secret/password.txt").with_note("relative traversal"),
        TestCase::homograph("./../secret/password.txt").with_note("relative traversal"),
        TestCase::homograph("././../secret/password.txt").with_note("relative traversal"),
        TestCase::homograph("/home/user//secret/password.txt").with_note("redundant slashes"),
        TestCase::homograph("/home//user/secret//password.txt").with_note("redundant slashes"),
        TestCase::homograph("/home/user/cse453/../secret/password.txt")
            .with_note("mixed absolute and traversal"),
        TestCase::homograph("/home/user/secret/./password.txt")
            .with_note("mixed absolute and traversal"),
        TestCase::homograph("/home/user/secret/temp/../password.txt")
            .with_note("traversal cancellation"),
    ]
}

/// Whether a case produced the expected verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CaseStatus {
    /// Verdict matched the expectation.
    Pass,
    /// Verdict differed from the expectation.
    Fail,
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

/// The result of running one [`TestCase`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseOutcome {
    /// The candidate path as given.
    pub path: String,
    /// The expected verdict.
    pub expected: bool,
    /// The actual verdict.
    pub result: bool,
    /// Canonical form of the candidate.
    pub canonical: CanonicalPath,
}

impl CaseOutcome {
    /// Returns true if the verdict matched the expectation.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.expected == self.result
    }

    /// PASS or FAIL.
    #[must_use]
    pub fn status(&self) -> CaseStatus {
        if self.passed() {
            CaseStatus::Pass
        } else {
            CaseStatus::Fail
        }
    }
}

/// Pass/fail counts over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of cases run.
    pub total: usize,
    /// Number of cases that passed.
    pub passed: usize,
    /// Number of cases that failed.
    pub failed: usize,
}

impl Summary {
    /// Tally a set of outcomes.
    #[must_use]
    pub fn from_outcomes(outcomes: &[CaseOutcome]) -> Self {
        let passed = outcomes.iter().filter(|o| o.passed()).count();
        Self {
            total: outcomes.len(),
            passed,
            failed: outcomes.len() - passed,
        }
    }

    /// Returns true if no case failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} passed, {} failed", self.passed, self.failed)
    }
}

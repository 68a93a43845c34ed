#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # homograph
//!
//! A library for canonicalizing path strings and detecting path homographs:
//! textually different paths that name the same logical location.
//!
//! Canonicalization is purely lexical. Nothing here touches the filesystem,
//! follows symlinks, or folds case.
//!
//! ## Core Functions
//!
//! - [`canonicalize`]: Resolve a path string against a working directory
//! - [`is_homograph`]: Check whether two paths canonicalize identically
//!
//! ## Supporting Types
//!
//! - [`Scenario`] and [`TestCase`]: A working directory / forbidden path pair
//!   and the cases checked against it
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use homograph::{canonicalize, is_homograph};
//!
//! let cwd = "/home/user/cse453/";
//! assert_eq!(canonicalize("../secret/password.txt", cwd), "/home/user/secret/password.txt");
//!
//! assert!(is_homograph(
//!     "../secret/password.txt",
//!     "/home/user/secret/password.txt",
//!     cwd,
//! ));
//! assert!(!is_homograph("password.txt", "/home/user/secret/password.txt", cwd));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;
pub mod scenario;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, ReportFormatter};
pub use path::{canonicalize, compare, is_homograph, CanonicalPath, Comparison, Segment};
pub use scenario::{builtin_cases, CaseOutcome, CaseStatus, Scenario, Summary, TestCase};

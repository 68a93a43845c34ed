//! Lexical path canonicalization and homograph detection.
//!
//! # Key Concepts
//!
//! ## Canonicalization
//!
//! Canonicalization maps a POSIX-style path string and a working directory to
//! a single absolute representative:
//! - Relative paths are resolved against the working directory
//! - Empty segments (from `//`, leading or trailing `/`) are dropped
//! - `.` segments are dropped
//! - `..` segments remove the previously resolved segment, and are absorbed
//!   once the root is reached
//!
//! The process is purely lexical. No filesystem access happens, symlinks are
//! not followed, and names are compared byte for byte (no case folding, no
//! Unicode normalization). Backslashes and drive letters are ordinary
//! characters.
//!
//! The working directory is split literally: it is trusted to already be
//! absolute and canonical, so a `.` or `..` inside it is kept as a name.
//!
//! ## Homographs
//!
//! Two path strings are homographs under a working directory when they
//! canonicalize to the same string.
//!
//! # Examples
//!
//! ```
//! use homograph::path::{canonicalize, is_homograph};
//!
//! assert_eq!(canonicalize("/a/../../b", "/ignored"), "/b");
//! assert_eq!(canonicalize("x/y", "/base"), "/base/x/y");
//!
//! let cwd = "/home/user/cse453";
//! assert!(is_homograph(
//!     "./../secret/password.txt",
//!     "/home//user/secret//password.txt",
//!     cwd,
//! ));
//! ```

pub mod canonicalize;
pub mod homograph;
pub mod segment;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key items
pub use canonicalize::canonicalize;
pub use homograph::{compare, is_homograph, Comparison};
pub use segment::Segment;
pub use types::CanonicalPath;

/// The path separator understood by this module.
pub const SEPARATOR: char = '/';

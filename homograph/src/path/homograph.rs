//! Homograph detection built on canonicalization.

use serde::Serialize;

use super::types::CanonicalPath;

/// The canonical forms of two paths resolved under one working directory.
///
/// # Examples
///
/// ```
/// use homograph::path::compare;
///
/// let cmp = compare("../password.txt", "/home/user/password.txt", "/home/user/cse453");
/// assert!(cmp.is_homograph());
/// assert_eq!(cmp.left(), cmp.right());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    left: CanonicalPath,
    right: CanonicalPath,
}

impl Comparison {
    /// Canonical form of the first path.
    #[must_use]
    pub fn left(&self) -> &CanonicalPath {
        &self.left
    }

    /// Canonical form of the second path.
    #[must_use]
    pub fn right(&self) -> &CanonicalPath {
        &self.right
    }

    /// Returns true if both paths name the same location.
    #[must_use]
    pub fn is_homograph(&self) -> bool {
        self.left == self.right
    }

    /// Swap the two sides.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }
}

/// Canonicalize two paths under `cwd` and keep both results.
#[must_use]
pub fn compare(path1: &str, path2: &str, cwd: &str) -> Comparison {
    Comparison {
        left: CanonicalPath::resolve(path1, cwd),
        right: CanonicalPath::resolve(path2, cwd),
    }
}

/// Returns true if `path1` and `path2` canonicalize to the same string.
///
/// Comparison is exact and case-sensitive. The relation is reflexive,
/// symmetric and transitive for a fixed `cwd`.
///
/// # Examples
///
/// ```
/// use homograph::is_homograph;
///
/// let cwd = "/home/user/cse453/";
/// let forbidden = "/home/user/secret/password.txt";
///
/// assert!(is_homograph("../secret/password.txt", forbidden, cwd));
/// assert!(is_homograph("/home/user/secret/temp/../password.txt", forbidden, cwd));
/// assert!(!is_homograph("password.txt", forbidden, cwd));
/// assert!(!is_homograph("/home/user/Secret/password.txt", forbidden, cwd));
/// ```
#[must_use]
pub fn is_homograph(path1: &str, path2: &str, cwd: &str) -> bool {
    compare(path1, path2, cwd).is_homograph()
}

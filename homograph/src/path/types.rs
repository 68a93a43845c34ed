//! Core types for canonical paths.

use std::fmt;

use serde::Serialize;

use super::canonicalize::canonicalize;
use super::SEPARATOR;

/// A path string in canonical form.
///
/// A `CanonicalPath` always starts with `/` and has no empty segments. It can
/// only be produced by canonicalization, so two values compare equal exactly
/// when the paths they were resolved from are homographs.
///
/// # Examples
///
/// ```
/// use homograph::CanonicalPath;
///
/// let path = CanonicalPath::resolve("../secret/./password.txt", "/home/user/cse453");
/// assert_eq!(path.as_str(), "/home/user/secret/password.txt");
/// assert_eq!(path.depth(), 4);
/// assert_eq!(path.file_name(), Some("password.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalPath(String);

impl CanonicalPath {
    /// Canonicalize `path` against `cwd`.
    #[must_use]
    pub fn resolve(path: &str, cwd: &str) -> Self {
        Self(canonicalize(path, cwd))
    }

    /// The root path, `/`.
    #[must_use]
    pub fn root() -> Self {
        Self(SEPARATOR.to_string())
    }

    /// Get the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.len() == 1
    }

    /// Iterate over the segments below the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use homograph::CanonicalPath;
    ///
    /// let path = CanonicalPath::resolve("/a//b/", "/");
    /// assert_eq!(path.segments().collect::<Vec<_>>(), vec!["a", "b"]);
    /// assert_eq!(CanonicalPath::root().segments().count(), 0);
    /// ```
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR).filter(|segment| !segment.is_empty())
    }

    /// Number of segments below the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// The last segment, or `None` for the root.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.segments().last()
    }

    /// Convert into the underlying `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CanonicalPath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CanonicalPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<CanonicalPath> for String {
    fn from(path: CanonicalPath) -> Self {
        path.0
    }
}

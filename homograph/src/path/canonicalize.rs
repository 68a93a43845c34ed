//! Lexical canonicalization of path strings.
//!
//! This module resolves a path string against a working directory by:
//! - Seeding relative paths with the working directory's segments
//! - Dropping empty and `.` segments
//! - Resolving `..` by popping the last resolved segment, absorbed at root
//! - Joining the result under a single leading `/`

use super::segment::Segment;
use super::SEPARATOR;

/// Canonicalize `path`, resolving relative paths against `cwd`.
///
/// Every input is accepted. `..` beyond the root is absorbed, an empty `path`
/// resolves to the working directory itself, and characters outside the
/// separator (backslashes, drive letters, whitespace) are kept verbatim.
///
/// `cwd` is not itself resolved. Its segments are taken literally, see
/// [`working_dir_segments`].
///
/// The result always starts with `/` and never contains consecutive
/// separators.
///
/// # Examples
///
/// ```
/// use homograph::path::canonicalize;
///
/// // Absolute paths ignore the working directory
/// assert_eq!(canonicalize("/a/./b/.", "/anything"), "/a/b");
/// assert_eq!(canonicalize("/a//b///c", "/anything"), "/a/b/c");
///
/// // Excess `..` stops at root
/// assert_eq!(canonicalize("/a/../../b", "/anything"), "/b");
///
/// // Relative paths start from the working directory
/// assert_eq!(canonicalize("x/y", "/base"), "/base/x/y");
/// assert_eq!(canonicalize("", "/base/"), "/base");
/// ```
#[must_use]
pub fn canonicalize(path: &str, cwd: &str) -> String {
    let mut resolved: Vec<&str> = if path.starts_with(SEPARATOR) {
        Vec::new()
    } else {
        working_dir_segments(cwd).collect()
    };

    for segment in Segment::split(path) {
        match segment {
            Segment::Empty | Segment::Current => {}
            Segment::Parent => {
                // Popping an empty list is a no-op: the root absorbs `..`
                resolved.pop();
            }
            Segment::Normal(name) => resolved.push(name),
        }
    }

    join(&resolved)
}

/// Split a working directory into the segments that seed a relative path.
///
/// Leading and trailing separators are stripped and the remainder is split on
/// `/`. Empty pieces are skipped so that `/` and `/a//b` seed cleanly, but
/// `.` and `..` are kept as literal names: the working directory is a trusted
/// value and is not resolved again.
///
/// # Examples
///
/// ```
/// use homograph::path::canonicalize::working_dir_segments;
///
/// let segments: Vec<_> = working_dir_segments("/home/user/cse453/").collect();
/// assert_eq!(segments, vec!["home", "user", "cse453"]);
///
/// assert_eq!(working_dir_segments("/").count(), 0);
/// ```
pub fn working_dir_segments(cwd: &str) -> impl Iterator<Item = &str> {
    cwd.trim_matches(SEPARATOR)
        .split(SEPARATOR)
        .filter(|segment| !segment.is_empty())
}

/// Join resolved segments under the root.
fn join(segments: &[&str]) -> String {
    if segments.is_empty() {
        return SEPARATOR.to_string();
    }

    let len = segments.iter().map(|s| s.len() + 1).sum();
    let mut out = String::with_capacity(len);
    for segment in segments {
        out.push(SEPARATOR);
        out.push_str(segment);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CWD: &str = "/home/user/cse453/";

    #[test]
    fn test_absolute_path_unchanged() {
        assert_eq!(canonicalize("/usr/local/bin", CWD), "/usr/local/bin");
    }

    #[test]
    fn test_root_only() {
        assert_eq!(canonicalize("/", CWD), "/");
        assert_eq!(canonicalize("///", CWD), "/");
        assert_eq!(canonicalize("/.", CWD), "/");
    }

    #[test]
    fn test_redundant_separators_collapse() {
        assert_eq!(canonicalize("/a//b///c", CWD), "/a/b/c");
        assert_eq!(canonicalize("/a/b/", CWD), "/a/b");
    }

    #[test]
    fn test_dot_is_noop() {
        assert_eq!(canonicalize("/a/./b/.", CWD), "/a/b");
        assert_eq!(canonicalize(".", CWD), "/home/user/cse453");
    }

    #[test]
    fn test_parent_pops_one_segment() {
        assert_eq!(canonicalize("/a/b/../c", CWD), "/a/c");
        assert_eq!(canonicalize("/a/b/../../c", CWD), "/c");
    }

    #[test]
    fn test_parent_absorbed_at_root() {
        assert_eq!(canonicalize("/a/../../b", CWD), "/b");
        assert_eq!(canonicalize("/../../..", CWD), "/");
        assert_eq!(canonicalize("../../../../../etc/passwd", CWD), "/etc/passwd");
    }

    #[test]
    fn test_relative_resolution() {
        assert_eq!(canonicalize("x/y", "/base"), "/base/x/y");
        assert_eq!(
            canonicalize("../secret/password.txt", CWD),
            "/home/user/secret/password.txt"
        );
        assert_eq!(
            canonicalize("password.txt", CWD),
            "/home/user/cse453/password.txt"
        );
    }

    #[test]
    fn test_empty_path_resolves_to_cwd() {
        assert_eq!(canonicalize("", CWD), "/home/user/cse453");
        assert_eq!(canonicalize("", "/"), "/");
    }

    #[test]
    fn test_root_cwd_does_not_double_separator() {
        assert_eq!(canonicalize("x", "/"), "/x");
        assert_eq!(canonicalize("x", ""), "/x");
    }

    #[test]
    fn test_cwd_taken_literally() {
        // `.` and `..` inside the working directory are names, not navigation
        assert_eq!(canonicalize("x", "/a/../b"), "/a/../b/x");
        assert_eq!(canonicalize("x", "/a/./b"), "/a/./b/x");
        // A relative `..` can still pop a literal cwd segment
        assert_eq!(canonicalize("../x", "/a/.."), "/a/x");
    }

    #[test]
    fn test_cwd_without_leading_separator() {
        assert_eq!(canonicalize("x", "base/dir"), "/base/dir/x");
    }

    #[test]
    fn test_non_posix_constructs_are_literal() {
        assert_eq!(canonicalize("C:\\Windows", "/"), "/C:\\Windows");
        assert_eq!(canonicalize("/a\\..\\b", CWD), "/a\\..\\b");
        assert_eq!(canonicalize("/ /...", CWD), "/ /...");
    }

    #[test]
    fn test_case_and_unicode_preserved() {
        assert_eq!(canonicalize("/Home/USER", CWD), "/Home/USER");
        assert_eq!(canonicalize("/caf\u{e9}", CWD), "/caf\u{e9}");
        assert_ne!(canonicalize("/caf\u{e9}", CWD), canonicalize("/cafe\u{301}", CWD));
    }

    #[test]
    fn test_inputs_not_mutated() {
        let path = String::from("./../secret/password.txt");
        let cwd = String::from(CWD);
        let _ = canonicalize(&path, &cwd);
        assert_eq!(path, "./../secret/password.txt");
        assert_eq!(cwd, CWD);
    }

    #[test]
    fn test_working_dir_segments() {
        let segments: Vec<_> = working_dir_segments("//a//b//").collect();
        assert_eq!(segments, vec!["a", "b"]);
        assert_eq!(working_dir_segments("").count(), 0);
    }

    // Property-based tests
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn name_strategy() -> impl Strategy<Value = String> {
            "[a-zA-Z0-9_-]{1,10}"
        }

        // Canonical absolute paths: no empty, `.` or `..` segments
        fn canonical_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec(name_strategy(), 0..=6).prop_map(|parts| {
                if parts.is_empty() {
                    "/".to_string()
                } else {
                    format!("/{}", parts.join("/"))
                }
            })
        }

        // Arbitrary paths mixing names, `.`, `..` and empty segments
        fn messy_strategy() -> impl Strategy<Value = String> {
            (
                any::<bool>(),
                prop::collection::vec(
                    prop_oneof![
                        Just(String::new()),
                        Just(".".to_string()),
                        Just("..".to_string()),
                        name_strategy(),
                    ],
                    0..=10,
                ),
            )
                .prop_map(|(absolute, parts)| {
                    let joined = parts.join("/");
                    if absolute {
                        format!("/{joined}")
                    } else {
                        joined
                    }
                })
        }

        proptest! {
            /// Canonical paths map to themselves under any working directory
            #[test]
            fn canonical_input_is_fixed_point(p in canonical_strategy(), cwd in canonical_strategy()) {
                prop_assert_eq!(canonicalize(&p, &cwd), p);
            }

            /// Canonicalizing twice gives the same result
            #[test]
            fn canonicalize_idempotent(p in messy_strategy(), cwd in canonical_strategy()) {
                let once = canonicalize(&p, &cwd);
                let twice = canonicalize(&once, "/elsewhere");
                prop_assert_eq!(once, twice);
            }

            /// Output is absolute with no `.`, `..` or empty segments
            #[test]
            fn output_is_clean(p in messy_strategy(), cwd in canonical_strategy()) {
                let out = canonicalize(&p, &cwd);
                prop_assert!(out.starts_with('/'));
                prop_assert!(!out.contains("//"));
                if out != "/" {
                    for segment in out[1..].split('/') {
                        prop_assert!(segment != "." && segment != ".." && !segment.is_empty());
                    }
                }
            }

            /// A relative path equals the same path appended to the working directory
            #[test]
            fn relative_matches_joined(p in messy_strategy(), cwd in canonical_strategy()) {
                let relative = p.trim_start_matches('/');
                let joined = format!("{cwd}/{relative}");
                prop_assert_eq!(canonicalize(relative, &cwd), canonicalize(&joined, "/"));
            }
        }
    }
}

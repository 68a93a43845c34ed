//! Property-based tests for path handling.
//!
//! Note: The canonicalize and homograph modules already carry small property
//! suites. This module runs heavier cases over `CanonicalPath` and
//! `Comparison`, and is only built with the `property-tests` feature.

use super::homograph::compare;
use super::types::CanonicalPath;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z0-9_-]{1,8}",
        1 => Just(String::new()),
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

fn path_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), prop::collection::vec(segment_strategy(), 0..12)).prop_map(
        |(absolute, parts)| {
            let joined = parts.join("/");
            if absolute {
                format!("/{joined}")
            } else {
                joined
            }
        },
    )
}

fn cwd_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9_-]{1,8}", 0..5)
        .prop_map(|parts| format!("/{}/", parts.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Depth never exceeds working directory depth plus the number of names
    #[test]
    fn depth_bounded_by_input(path in path_strategy(), cwd in cwd_strategy()) {
        let canonical = CanonicalPath::resolve(&path, &cwd);
        let names = path
            .split('/')
            .filter(|s| !s.is_empty() && *s != "." && *s != "..")
            .count();
        let base = if path.starts_with('/') {
            0
        } else {
            cwd.split('/').filter(|s| !s.is_empty()).count()
        };
        prop_assert!(canonical.depth() <= base + names);
    }

    // Resolving the canonical form again is a fixed point
    #[test]
    fn canonical_path_fixed_point(path in path_strategy(), cwd in cwd_strategy(), other in cwd_strategy()) {
        let canonical = CanonicalPath::resolve(&path, &cwd);
        prop_assert_eq!(CanonicalPath::resolve(canonical.as_str(), &other), canonical);
    }

    // Reversing a comparison never changes the verdict
    #[test]
    fn comparison_reversal_preserves_verdict(a in path_strategy(), b in path_strategy(), cwd in cwd_strategy()) {
        let cmp = compare(&a, &b, &cwd);
        let verdict = cmp.is_homograph();
        prop_assert_eq!(cmp.reversed(), compare(&b, &a, &cwd));
        prop_assert_eq!(compare(&b, &a, &cwd).is_homograph(), verdict);
    }

    // Appending a name and `..` leaves the location unchanged
    #[test]
    fn name_then_parent_cancels(a in path_strategy(), name in "[a-z]{1,8}", cwd in cwd_strategy()) {
        // An empty relative path must stay relative
        let detour = if a.is_empty() {
            format!("{name}/..")
        } else {
            format!("{a}/{name}/..")
        };
        prop_assert!(compare(&a, &detour, &cwd).is_homograph());
    }

    // Segments of a canonical path rebuild it exactly
    #[test]
    fn segments_rebuild_path(path in path_strategy(), cwd in cwd_strategy()) {
        let canonical = CanonicalPath::resolve(&path, &cwd);
        let rebuilt = if canonical.is_root() {
            "/".to_string()
        } else {
            canonical.segments().map(|s| format!("/{s}")).collect::<String>()
        };
        prop_assert_eq!(rebuilt.as_str(), canonical.as_str());
    }
}

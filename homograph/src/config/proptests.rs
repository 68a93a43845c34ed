//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{CaseDefinition, Config};
use crate::output::OutputFormat;
use proptest::prelude::*;

fn dir_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,8}", 0..4).prop_map(|parts| format!("/{}", parts.join("/")))
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![Just(OutputFormat::Human), Just(OutputFormat::Json)]
}

fn cases_strategy() -> impl Strategy<Value = Vec<CaseDefinition>> {
    prop::collection::vec(
        ("[a-z./]{1,12}", any::<bool>()).prop_map(|(path, expected)| CaseDefinition {
            path,
            expected,
            note: None,
        }),
        0..4,
    )
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(dir_strategy()),
        prop::option::of(dir_strategy()),
        prop::option::of(format_strategy()),
        prop::option::of(cases_strategy()),
    )
        .prop_map(|(working_dir, forbidden, output_format, cases)| Config {
            working_dir,
            forbidden,
            output_format,
            cases,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Every field set in the higher layer wins; unset fields keep the lower value
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.working_dir, high.working_dir.or(low.working_dir));
        prop_assert_eq!(merged.forbidden, high.forbidden.or(low.forbidden));
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
        prop_assert_eq!(merged.cases, high.cases.or(low.cases));
    }

    // Merging a config into itself changes nothing
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // Merging into an empty config reproduces the source
    #[test]
    fn config_merge_into_default_is_identity(config in config_strategy()) {
        let mut merged = Config::default();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }
}

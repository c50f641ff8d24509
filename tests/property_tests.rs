//! Property-based tests for the environment fallback chain.
//!
//! These tests use proptest to verify the preferred/legacy rules hold across
//! randomly generated variable names and values.

use proptest::prelude::*;

use gitlab_ci_helper::core::env::{resolve, resolve_traced, FallbackPair, MapEnv, Source};
use gitlab_ci_helper::core::metadata::Metadata;

const PAIR: FallbackPair = FallbackPair::new("PREFERRED_VAR", "LEGACY_VAR");

/// Strategy for non-empty variable values.
fn value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9._/:-]{1,40}"
}

/// Strategy for a legacy value that may be absent or empty.
fn maybe_value() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), Just(Some(String::new())), value().prop_map(Some)]
}

proptest! {
    #[test]
    fn preferred_always_wins(preferred in value(), legacy in maybe_value()) {
        let mut env = MapEnv::new().with(PAIR.preferred, preferred.clone());
        if let Some(legacy) = legacy {
            env.set(PAIR.legacy, legacy);
        }

        let resolved = resolve_traced(&env, &PAIR);
        prop_assert_eq!(resolved.value, preferred);
        prop_assert_eq!(resolved.source, Source::Preferred);
    }

    #[test]
    fn legacy_used_when_preferred_missing(legacy in value(), preferred_empty in any::<bool>()) {
        let mut env = MapEnv::new().with(PAIR.legacy, legacy.clone());
        if preferred_empty {
            env.set(PAIR.preferred, "");
        }

        let resolved = resolve_traced(&env, &PAIR);
        prop_assert_eq!(resolved.value, legacy);
        prop_assert_eq!(resolved.source, Source::Legacy);
    }

    #[test]
    fn unrelated_variables_do_not_leak(name in "[A-Z_]{1,20}", v in value()) {
        prop_assume!(name != PAIR.preferred && name != PAIR.legacy);
        let env = MapEnv::new().with(name, v);
        prop_assert_eq!(resolve(&env, &PAIR), "");
    }

    #[test]
    fn metadata_json_round_trips(id in value(), sha in value(), dir in value()) {
        let env = MapEnv::new()
            .with("CI_BUILD_ID", id)
            .with("CI_COMMIT_SHA", sha)
            .with("CI_PROJECT_DIR", dir);

        let meta = Metadata::collect(&env);
        let bytes = meta.to_pretty_json().unwrap();
        let parsed: Metadata = serde_json::from_slice(&bytes).unwrap();
        prop_assert_eq!(parsed, meta);
        prop_assert!(!bytes.ends_with(b"\n"));
    }
}

//! Property-based tests for the classifier and batch driver.
//!
//! These tests use proptest to check properties around:
//! - counter bookkeeping for every outcome
//! - idempotence of classification
//! - recovery of generated coordinates in both layouts
//! - noise suppression regardless of colon count

use crate::classify::{Classification, Classifier, IgnoreReason, classify_line};
use crate::engine::process_lines;
use crate::policy::{AmbiguousLayout, KNOWN_SCOPES, ParsePolicy};
use crate::rules::RuleBook;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

const PACKAGING: &[&str] = &["jar", "pom", "war", "test-jar"];
const NOISE: &[&str] = &["Finished at", "Download"];

/// Maven group ids: dotted lowercase segments.
fn arb_group() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9]{0,8}(\\.[a-z][a-z0-9]{0,8}){0,3}").unwrap()
}

fn arb_artifact() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9-]{0,20}").unwrap()
}

fn arb_version() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..30, 0u32..30, 0u32..30).prop_map(|(a, b, c)| format!("{a}.{b}.{c}")),
        (1u32..10, 0u32..20).prop_map(|(a, b)| format!("{a}.{b}.Final")),
        (1u32..10, 0u32..20).prop_map(|(a, b)| format!("{a}.{b}-SNAPSHOT")),
    ]
}

fn arb_scope() -> impl Strategy<Value = String> {
    prop::sample::select(KNOWN_SCOPES).prop_map(str::to_string)
}

fn arb_classifier() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("linux-x86_64".to_string()),
        Just("osx-x86_64".to_string()),
        Just("sources".to_string()),
        Just("tests".to_string()),
    ]
}

fn arb_type() -> impl Strategy<Value = String> {
    prop::sample::select(PACKAGING).prop_map(str::to_string)
}

/// Lines that mostly look like input: coordinates, log lines, comments, garbage.
fn arb_line() -> impl Strategy<Value = String> {
    prop_oneof![
        ".*",
        "[a-z.:# \\[\\]\"=,-]{0,40}",
        (arb_group(), arb_artifact(), arb_version()).prop_map(|(g, a, v)| format!("{g}:{a}:{v}")),
        Just("".to_string()),
        Just("# RULE exclude a:b".to_string()),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn classify_never_panics(line in ".*") {
        let mut book = RuleBook::new();
        let _ = classify_line(&line, Some(&mut book));
        let _ = classify_line(&line, None);
    }

    #[test]
    fn classification_is_idempotent(line in arb_line()) {
        let first = classify_line(&line, None);
        let second = classify_line(&line, None);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn counters_follow_the_outcome(line in arb_line()) {
        let outcome = classify_line(&line, None);
        let batch = process_lines(&Classifier::default(), [line.as_str()], None);

        match &outcome {
            Classification::DependencyFound(_) => {
                prop_assert_eq!(batch.dependencies.len(), 1);
                prop_assert_eq!(batch.ignored_count(), 0);
                prop_assert_eq!(batch.parse_error_count(), 0);
            }
            Classification::Ignored(_) => {
                prop_assert!(batch.dependencies.is_empty());
                prop_assert_eq!(batch.ignored_count(), 1);
                prop_assert_eq!(batch.parse_error_count(), 0);
            }
            Classification::Rejected(_) => {
                prop_assert!(batch.dependencies.is_empty());
                prop_assert_eq!(batch.ignored_count(), 1);
                prop_assert_eq!(batch.parse_error_count(), 1);
            }
            Classification::RuleRegistered { .. } | Classification::RuleDropped { .. } => {
                prop_assert!(batch.dependencies.is_empty());
                prop_assert_eq!(batch.ignored_count(), 0);
                prop_assert_eq!(batch.parse_error_count(), 0);
            }
        }
        prop_assert_eq!(batch.counts.lines, 1);
    }

    #[test]
    fn dependency_list_lines_recover_version_and_scope(
        group in arb_group(),
        artifact in arb_artifact(),
        ty in arb_type(),
        version in arb_version(),
        scope in arb_scope(),
        indent in 1usize..8,
    ) {
        let line = format!("[INFO]{}{group}:{artifact}:{ty}:{version}:{scope}", " ".repeat(indent));
        let strict = Classifier::new(&ParsePolicy {
            ambiguous_layout: AmbiguousLayout::Reject,
            ..ParsePolicy::default()
        });
        let outcome = strict.classify(&line, None);
        let dep = outcome.dependency().cloned();
        prop_assert!(dep.is_some(), "not a dependency: {:?}", outcome);
        let dep = dep.unwrap();
        prop_assert_eq!(dep.group(), group.as_str());
        prop_assert_eq!(dep.artifact(), artifact.as_str());
        prop_assert_eq!(dep.version(), version.as_str());
        prop_assert_eq!(dep.scope(), scope.as_str());
        prop_assert_eq!(dep.classifier(), None);
    }

    #[test]
    fn manifest_lines_recover_classifier_and_version(
        group in arb_group(),
        artifact in arb_artifact(),
        ty in arb_type(),
        classifier in arb_classifier(),
        version in arb_version(),
    ) {
        let line = format!("    artifact = \"{group}:{artifact}:{ty}:{classifier}:{version}\",");
        let outcome = classify_line(&line, None);
        let dep = outcome.dependency().cloned();
        prop_assert!(dep.is_some(), "not a dependency: {:?}", outcome);
        let dep = dep.unwrap();
        prop_assert_eq!(dep.classifier(), Some(classifier.as_str()));
        prop_assert_eq!(dep.version(), version.as_str());
        prop_assert_eq!(dep.scope(), "compile");
        prop_assert_eq!(dep.source_line(), line.as_str());
    }

    #[test]
    fn noise_markers_win_over_colons(
        prefix in "[a-z: ]{0,10}",
        marker in prop::sample::select(NOISE),
        coords in (arb_group(), arb_artifact(), arb_version())
            .prop_map(|(g, a, v)| format!("{g}:{a}:{v}")),
    ) {
        let line = format!("{prefix}{marker} {coords}");
        prop_assert_eq!(
            classify_line(&line, None),
            Classification::Ignored(IgnoreReason::Noise)
        );
    }
}

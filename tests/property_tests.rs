//! Property-based tests for loxgen
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use loxgen::backend::rust_emitter::is_keyword;
use loxgen::backend::test_name;
use loxgen::{Classification, classify_source};
use proptest::prelude::*;

/// One of the four error annotation forms.
fn error_annotation() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,12}".prop_map(|m| format!("// Error{m}")),
        (1u32..500, "[a-z ]{0,12}").prop_map(|(n, m)| format!("// [line {n}] Error{m}")),
        (1u32..500, "[a-z ]{0,12}").prop_map(|(n, m)| format!("// [java line {n}] Error{m}")),
        "[a-z ]{1,12}".prop_map(|m| format!("// expect runtime error: {m}")),
    ]
}

/// Lines that carry no annotation at all.
fn plain_line() -> impl Strategy<Value = String> {
    "[a-z0-9 ;=+]{0,20}"
}

// =============================================================================
// Classification Properties
// =============================================================================

proptest! {
    /// Property: classification is total
    #[test]
    fn classify_never_panics(source in any::<String>()) {
        let _ = classify_source(&source);
    }

    /// Property: any error annotation wins over any number of expect lines
    #[test]
    fn error_annotation_makes_fixture_negative(
        expects in prop::collection::vec("[a-z0-9 ]{0,10}", 0..8),
        error in error_annotation(),
        position in any::<prop::sample::Index>(),
    ) {
        let mut lines: Vec<String> = expects.iter().map(|e| format!("print x; // expect: {e}")).collect();
        let at = position.index(lines.len() + 1);
        lines.insert(at, error);
        prop_assert_eq!(classify_source(&lines.join("\n")), Classification::Negative);
    }

    /// Property: without error annotations, expected output is every expect capture in order
    #[test]
    fn expect_lines_are_collected_in_order(
        body in prop::collection::vec((plain_line(), prop::option::of("[a-z0-9][a-z0-9 ]{0,10}")), 0..12),
    ) {
        let mut source = String::new();
        let mut wanted = Vec::new();
        for (code, expect) in &body {
            source.push_str(code);
            if let Some(text) = expect {
                source.push_str(" // expect: ");
                source.push_str(text);
                wanted.push(text.clone());
            }
            source.push('\n');
        }
        prop_assert_eq!(classify_source(&source), Classification::Positive { expected: wanted });
    }
}

// =============================================================================
// Naming Properties
// =============================================================================

proptest! {
    /// Property: every fixture name maps to a usable, deterministic identifier
    #[test]
    fn test_names_are_valid_identifiers(name in "\\PC{0,24}") {
        let first = test_name(&name);
        prop_assert_eq!(&first, &test_name(&name));
        prop_assert!(!first.is_empty());
        prop_assert!(!is_keyword(&first));
        prop_assert!(first != "_");
        let mut chars = first.chars();
        let head = chars.next().unwrap();
        prop_assert!(head == '_' || head.is_ascii_lowercase());
        prop_assert!(chars.all(|c| c == '_' || c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    /// Property: names that are already plain snake_case identifiers pass through unchanged
    #[test]
    fn snake_case_names_are_kept(name in "[a-z][a-z0-9_]{0,16}") {
        prop_assume!(!is_keyword(&name) && name != "suite_runner" && name != "main");
        prop_assert_eq!(test_name(&name), name);
    }
}

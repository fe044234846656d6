//! Property-based tests for compiled patterns.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use shapec::{compile, CompileError, Value};

// ============================================================================
// Strategies
// ============================================================================

/// Small scalar values together with a literal pattern matching exactly them.
fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-100i64..100).prop_map(Value::Int),
        "[a-z]{0,6}".prop_map(Value::string),
        "[a-z][a-z0-9_]{0,5}".prop_map(Value::symbol),
        any::<bool>().prop_map(Value::Bool),
        Just(Value::Nil),
    ]
}

/// Nested lists of scalars.
fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        proptest::collection::vec(inner, 0..4).prop_map(Value::list)
    })
}

/// Capture names that are not keywords.
fn arb_names(len: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::hash_set("[a-z][a-z0-9]{1,5}", len)
        .prop_filter("keywords are not names", |names| {
            !names
                .iter()
                .any(|n| matches!(n.as_str(), "true" | "false" | "nil"))
        })
        .prop_map(|names| names.into_iter().collect())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// A value written back as a pattern matches that value.
    #[test]
    fn displayed_value_matches_itself(value in arb_value()) {
        let pattern = compile(&value.to_string()).unwrap();
        prop_assert!(pattern.test(&value));
    }

    /// Compiling the same text twice gives patterns that agree everywhere.
    #[test]
    fn compilation_is_idempotent(pattern in arb_value(), candidate in arb_value()) {
        let source = pattern.to_string();
        let first = compile(&source).unwrap();
        let second = compile(&source).unwrap();
        prop_assert_eq!(first.test(&candidate), second.test(&candidate));
        prop_assert_eq!(first.extract(&candidate), second.extract(&candidate));
    }

    /// `[*]` accepts every list; `[_, *]` every non-empty one.
    #[test]
    fn splat_accepts_any_remainder(items in proptest::collection::vec(arb_scalar(), 0..8)) {
        let list = Value::list(items.clone());
        prop_assert!(compile("[*]").unwrap().test(&list));
        prop_assert_eq!(compile("[_, *]").unwrap().test(&list), !items.is_empty());
    }

    /// A splat followed by anything is rejected at compile time.
    #[test]
    fn splat_must_be_last(
        before in proptest::collection::vec("(1|x|_|\\[\\])", 0..3),
        after in "(1|x|_|\\*|\\[\\]|)",
    ) {
        let mut parts = before;
        parts.push("*".to_string());
        parts.push(after);
        let source = format!("[{}]", parts.join(", "));
        prop_assert!(matches!(compile(&source), Err(CompileError::Syntax(_))));
    }

    /// Captures come out in the order their names appear in the text.
    #[test]
    fn bindings_follow_textual_order(names in arb_names(4), values in proptest::collection::vec(arb_scalar(), 4)) {
        let source = format!("[{}]", names.join(", "));
        let pattern = compile(&source).unwrap();
        let bindings = pattern.extract(&Value::list(values.clone())).unwrap();
        let bound: Vec<String> = bindings.names().map(ToString::to_string).collect();
        prop_assert_eq!(&bound, &names);
        for (name, value) in names.iter().zip(&values) {
            prop_assert_eq!(bindings.get(name), Some(value));
        }
    }
}

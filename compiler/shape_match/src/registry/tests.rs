use super::*;
use crate::value::Value;
use pretty_assertions::assert_eq;

#[test]
fn empty_registry_resolves_nothing() {
    let registry = Registry::new();
    assert!(registry.is_empty());
    assert!(registry.resolve_type("Integer").is_none());
    assert!(registry.resolve_extractor("Array").is_none());
}

#[test]
fn builtin_names() {
    let registry = Registry::default();
    let names: Vec<&str> = registry.names().into_iter().map(Name::as_str).collect();
    assert_eq!(
        names,
        vec![
            "Array", "Boolean", "Float", "Integer", "Nil", "Numeric", "Object", "String",
            "Symbol"
        ]
    );
    assert_eq!(
        registry.resolve_type("Integer"),
        Some(&TypeTest::Kind(ValueKind::Int))
    );
    assert!(registry.resolve_type("Array").is_some());
    assert!(registry.resolve_extractor("Array").is_some());
    assert!(registry.resolve_extractor("Integer").is_none());
}

#[test]
fn shared_builtins_match_a_fresh_copy() {
    assert_eq!(builtin_registry().len(), Registry::with_builtins().len());
}

#[test]
fn register_record_adds_type_and_extractor() {
    let mut registry = Registry::new();
    registry.register_record("Point");
    assert!(registry.contains("Point"));

    let point = Value::record("Point", vec![Value::Int(1), Value::Int(2)]);
    let test = registry.resolve_type("Point").unwrap();
    assert!(test.test(&point));

    let extractor = registry.resolve_extractor("Point").unwrap();
    assert_eq!(
        extractor.extract(&point),
        Some(vec![Value::Int(1), Value::Int(2)])
    );
}

#[test]
fn re_registering_replaces_only_that_capability() {
    let mut registry = Registry::new();
    registry
        .register_type("Even", TypeTest::Numeric)
        .register_extractor("Even", |_: &Value| None);
    registry.register_type("Even", TypeTest::Object);
    assert_eq!(registry.resolve_type("Even"), Some(&TypeTest::Object));
    assert!(registry.resolve_extractor("Even").is_some());
    assert_eq!(registry.len(), 1);
}

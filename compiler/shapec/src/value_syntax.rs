//! Values written in pattern literal syntax.
//!
//! `[1, "two", :three, Point(4, 5)]` reads as a list holding an integer, a
//! string, a symbol and a `Point` record. Anything that only makes sense
//! as a pattern (captures, wildcards, splats, ranges, type tests) is
//! rejected.

use crate::error::PatternSyntaxError;
use shape_ir::{PatternKind, PatternNode};
use shape_match::{decode_string, Value};
use shape_stack::ensure_sufficient_stack;

/// Parse a value written in pattern literal syntax.
pub fn value_from_source(source: &str) -> Result<Value, PatternSyntaxError> {
    let node =
        shape_parse::parse(source).map_err(|err| PatternSyntaxError::from_parse(source, err))?;
    to_value(&node, source)
}

fn to_value(node: &PatternNode, source: &str) -> Result<Value, PatternSyntaxError> {
    ensure_sufficient_stack(|| match &node.kind {
        PatternKind::Array {
            elements,
            splat: None,
        } => Ok(Value::list(to_values(elements, source)?)),
        PatternKind::Extractor {
            name,
            args,
            splat: None,
            ..
        } => Ok(Value::record(name, to_values(args, source)?)),
        PatternKind::Int(n) => Ok(Value::Int(*n)),
        PatternKind::Float(n) => Ok(Value::Float(*n)),
        PatternKind::Str { raw, quote } => Ok(Value::string(decode_string(raw, *quote))),
        PatternKind::Symbol(name) => Ok(Value::Symbol(name.clone())),
        PatternKind::Bool(b) => Ok(Value::Bool(*b)),
        PatternKind::Nil => Ok(Value::Nil),
        PatternKind::Array { splat: Some(splat), .. }
        | PatternKind::Extractor {
            splat: Some(splat), ..
        } => Err(PatternSyntaxError::new(
            source,
            "a splat is not a value",
            splat.span,
        )),
        other => Err(PatternSyntaxError::new(
            source,
            format!("expected a value, found {}", other.describe()),
            node.span,
        )),
    })
}

fn to_values(nodes: &[PatternNode], source: &str) -> Result<Vec<Value>, PatternSyntaxError> {
    nodes.iter().map(|node| to_value(node, source)).collect()
}

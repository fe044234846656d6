//! Command handlers for the `shapec` CLI.
//!
//! Each handler returns the text to print on success, or a rendered error
//! for stderr. The binary maps `Err` to exit status 1.

use crate::pattern::compile;
use crate::value_syntax::value_from_source;
use shape_match::Value;
use std::fmt::Write;

/// `shapec check <pattern>`: the compiled matcher tree and its captures.
pub fn check(pattern: &str) -> Result<String, String> {
    let compiled = compile(pattern).map_err(|err| err.render(pattern))?;
    let mut out = compiled.matcher().to_string();
    let names: Vec<String> = compiled
        .capture_names()
        .iter()
        .map(ToString::to_string)
        .collect();
    if !names.is_empty() {
        let _ = writeln!(out, "captures: {}", names.join(", "));
    }
    Ok(out)
}

/// `shapec test <pattern> <value>`: `true` or `false`.
pub fn test(pattern: &str, value: &str) -> Result<String, String> {
    let compiled = compile(pattern).map_err(|err| err.render(pattern))?;
    let value = parse_value(value)?;
    Ok(format!("{}\n", compiled.test(&value)))
}

/// `shapec extract <pattern> <value>`: one `name = value` line per capture,
/// or `no match`.
pub fn extract(pattern: &str, value: &str) -> Result<String, String> {
    let compiled = compile(pattern).map_err(|err| err.render(pattern))?;
    let value = parse_value(value)?;
    let Some(bindings) = compiled.extract(&value) else {
        return Ok("no match\n".to_string());
    };
    let mut out = String::new();
    for (name, value) in bindings.iter() {
        let _ = writeln!(out, "{name} = {value}");
    }
    Ok(out)
}

fn parse_value(text: &str) -> Result<Value, String> {
    value_from_source(text).map_err(|err| err.render())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn check_prints_tree_and_captures() {
        assert_eq!(
            check("[x, *rest]").unwrap(),
            "Array\n  Identifier x\n  NamedSplat rest\ncaptures: x, rest\n"
        );
        assert_eq!(check("[]").unwrap(), "EmptyList\n");
    }

    #[test]
    fn check_renders_errors() {
        let err = check("[*, 2]").unwrap_err();
        assert!(err.starts_with("error: a splat must be the last element\n"));
        let err = check("Nope(x)").unwrap_err();
        assert!(err.starts_with("error: unknown extractor `Nope`\n"));
    }

    #[test]
    fn test_prints_boolean() {
        assert_eq!(test("[1, *]", "[1, 2]").unwrap(), "true\n");
        assert_eq!(test("[1, *]", "[]").unwrap(), "false\n");
        assert!(test("[1]", "[x]").is_err());
    }

    #[test]
    fn extract_prints_bindings_in_order() {
        assert_eq!(
            extract("[a, [b, *c]]", r#"[1, ["two", :three, 4.5]]"#).unwrap(),
            "a = 1\nb = \"two\"\nc = [:three, 4.5]\n"
        );
        assert_eq!(extract("[a]", "[]").unwrap(), "no match\n");
    }
}

//! The extractor protocol.
//!
//! An extractor deconstructs a value into an ordered list of sub-values,
//! or declines. The argument patterns of `Name(a, b, *rest)` are then
//! matched against that list exactly like an array pattern.

use crate::value::Value;
use shape_ir::Name;
use std::fmt;
use std::sync::Arc;

/// Deconstructs values for `Name(args...)` patterns.
///
/// Returning `None` makes the pattern fail; `Some` yields the sub-values
/// the argument patterns run against. Any
/// `Fn(&Value) -> Option<Vec<Value>>` closure is an extractor.
pub trait Extractor: Send + Sync {
    fn extract(&self, value: &Value) -> Option<Vec<Value>>;
}

impl<F> Extractor for F
where
    F: Fn(&Value) -> Option<Vec<Value>> + Send + Sync,
{
    fn extract(&self, value: &Value) -> Option<Vec<Value>> {
        self(value)
    }
}

/// Sequences yield their own elements.
#[derive(Copy, Clone, Debug, Default)]
pub struct SequenceExtractor;

impl Extractor for SequenceExtractor {
    fn extract(&self, value: &Value) -> Option<Vec<Value>> {
        value.as_list().map(<[Value]>::to_vec)
    }
}

/// Records of one type yield their fields.
#[derive(Clone, Debug)]
pub struct RecordExtractor {
    type_name: Name,
}

impl RecordExtractor {
    pub fn new(type_name: Name) -> Self {
        RecordExtractor { type_name }
    }
}

impl Extractor for RecordExtractor {
    fn extract(&self, value: &Value) -> Option<Vec<Value>> {
        value
            .as_record()
            .filter(|record| record.type_name == self.type_name)
            .map(|record| record.fields.clone())
    }
}

/// An extractor after name resolution, shared by every matcher that uses it.
#[derive(Clone)]
pub struct ResolvedExtractor(Arc<dyn Extractor>);

impl ResolvedExtractor {
    pub fn new(extractor: impl Extractor + 'static) -> Self {
        ResolvedExtractor(Arc::new(extractor))
    }

    #[inline]
    pub fn extract(&self, value: &Value) -> Option<Vec<Value>> {
        self.0.extract(value)
    }
}

impl fmt::Debug for ResolvedExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResolvedExtractor(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sequence_extractor_yields_elements() {
        let list = Value::from(vec![1, 2]);
        assert_eq!(
            SequenceExtractor.extract(&list),
            Some(vec![Value::Int(1), Value::Int(2)])
        );
        assert_eq!(SequenceExtractor.extract(&Value::Int(1)), None);
    }

    #[test]
    fn record_extractor_checks_type() {
        let extractor = RecordExtractor::new(Name::new("Point"));
        let point = Value::record("Point", vec![Value::Int(3)]);
        assert_eq!(extractor.extract(&point), Some(vec![Value::Int(3)]));
        assert_eq!(
            extractor.extract(&Value::record("Pair", vec![Value::Int(3)])),
            None
        );
    }

    #[test]
    fn closures_are_extractors() {
        let halves = ResolvedExtractor::new(|value: &Value| {
            let n = value.as_int()?;
            (n % 2 == 0).then(|| vec![Value::Int(n / 2)])
        });
        assert_eq!(halves.extract(&Value::Int(8)), Some(vec![Value::Int(4)]));
        assert_eq!(halves.extract(&Value::Int(7)), None);
    }
}

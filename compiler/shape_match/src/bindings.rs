//! Captured values of a successful match.

use crate::value::Value;
use shape_ir::Name;
use smallvec::SmallVec;
use std::fmt;

/// Ordered map from capture name to value.
///
/// Order is the textual order of the captures in the pattern. Most
/// patterns capture a handful of names, so storage is inline up to four
/// entries and lookup is a linear scan.
#[derive(Clone, Default, PartialEq)]
pub struct Bindings {
    entries: SmallVec<[(Name, Value); 4]>,
}

impl Bindings {
    pub fn new() -> Self {
        Bindings::default()
    }

    /// Bind `name`. A repeated name keeps its first position and takes the
    /// new value.
    pub fn insert(&mut self, name: Name, value: Value) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.as_str() == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Value)> {
        self.entries.iter().map(|(name, value)| (name, value))
    }

    pub fn names(&self) -> impl Iterator<Item = &Name> {
        self.entries.iter().map(|(name, _)| name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl IntoIterator for Bindings {
    type Item = (Name, Value);
    type IntoIter = smallvec::IntoIter<[(Name, Value); 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(Name, Value)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (Name, Value)>>(iter: I) -> Self {
        let mut bindings = Bindings::new();
        for (name, value) in iter {
            bindings.insert(name, value);
        }
        bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_insertion_order() {
        let mut bindings = Bindings::new();
        bindings.insert(Name::new("b"), Value::Int(1));
        bindings.insert(Name::new("a"), Value::Int(2));
        let names: Vec<&str> = bindings.names().map(Name::as_str).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(bindings.get("a"), Some(&Value::Int(2)));
        assert_eq!(bindings.get("c"), None);
    }

    #[test]
    fn repeated_name_keeps_first_position() {
        let bindings: Bindings = [
            (Name::new("x"), Value::Int(1)),
            (Name::new("y"), Value::Int(2)),
            (Name::new("x"), Value::Int(3)),
        ]
        .into_iter()
        .collect();
        assert_eq!(bindings.len(), 2);
        let pairs: Vec<(String, Value)> = bindings
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("x".to_string(), Value::Int(3)),
                ("y".to_string(), Value::Int(2))
            ]
        );
    }
}

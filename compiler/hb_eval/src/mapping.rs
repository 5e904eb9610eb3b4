//! Ordered, unique-keyed mapping.
//!
//! Backs both the `Mapping` runtime value and the variable table.
//! Iteration follows insertion order; overwriting a key keeps its
//! original position.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::Value;

/// String keys to values, iterated in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mapping {
    /// Entries in insertion order.
    entries: Vec<(String, Value)>,
    /// Key to position in `entries`.
    index: FxHashMap<String, usize>,
}

impl Mapping {
    /// An empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a positional list: keys `"0"`, `"1"`, ... in iteration order.
    pub fn from_list(values: impl IntoIterator<Item = Value>) -> Self {
        let mut mapping = Mapping::new();
        for (i, value) in values.into_iter().enumerate() {
            mapping.insert(i.to_string(), value);
        }
        mapping
    }

    /// Insert or overwrite `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        if let Some(&pos) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[pos].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Look up `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    /// Whether `key` is present.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn insertion_order_is_kept() {
        let mut m = Mapping::new();
        m.insert("b", Value::string("1"));
        m.insert("a", Value::string("2"));
        m.insert("c", Value::string("3"));
        assert_eq!(m.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn overwrite_keeps_position_and_returns_old() {
        let mut m = Mapping::new();
        m.insert("a", Value::string("1"));
        m.insert("b", Value::string("2"));
        let old = m.insert("a", Value::string("3"));
        assert_eq!(old, Some(Value::string("1")));
        assert_eq!(m.len(), 2);
        assert_eq!(m.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(m.get("a"), Some(&Value::string("3")));
    }

    #[test]
    fn from_list_uses_sequential_keys() {
        let m = Mapping::from_list(["x", "y", "z"].map(Value::string));
        assert_eq!(m.keys().collect::<Vec<_>>(), vec!["0", "1", "2"]);
        assert_eq!(m.get("2"), Some(&Value::string("z")));
        assert!(!m.contains_key("3"));
    }

    #[test]
    fn display_format() {
        let m = Mapping::from_list(["x", "y"].map(Value::string));
        assert_eq!(m.to_string(), "{ 0: x, 1: y }");
        assert_eq!(Mapping::new().to_string(), "{  }");
    }

    #[test]
    fn nested_display() {
        let mut outer = Mapping::new();
        outer.insert("inner", Value::Mapping(Mapping::from_list([Value::string("v")])));
        assert_eq!(outer.to_string(), "{ inner: { 0: v } }");
    }
}

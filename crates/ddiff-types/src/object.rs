use indexmap::IndexMap;

use crate::value::Value;

/// An insertion-ordered, string-keyed collection of values.
///
/// Keys are unique. Enumeration follows insertion order, which is the order
/// object differences are reported in. Lookups are constant time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object {
    entries: IndexMap<String, Value>,
}

impl Object {
    /// Create an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty object with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert a key-value pair.
    ///
    /// Re-inserting an existing key replaces its value in place, keeping the
    /// key's original position, and returns the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` is an own key of this object.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in enumeration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Number of own keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the object has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(key, value)| (key.into(), value)).collect(),
        }
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let object: Object = [("zeta", Value::Null), ("alpha", Value::Bool(true))]
            .into_iter()
            .collect();
        let keys: Vec<_> = object.keys().collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }

    #[test]
    fn reinsert_keeps_position() {
        let mut object = Object::new();
        object.insert("a", Value::from(1));
        object.insert("b", Value::from(2));
        let previous = object.insert("a", Value::from(3));

        assert_eq!(previous, Some(Value::from(1)));
        assert_eq!(object.len(), 2);
        assert_eq!(object.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(object.get("a"), Some(&Value::from(3)));
    }

    #[test]
    fn duplicate_keys_collapse_on_collect() {
        let object: Object = [("a", Value::from(1)), ("b", Value::Null), ("a", Value::from(2))]
            .into_iter()
            .collect();
        assert_eq!(object.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(object.get("a"), Some(&Value::from(2)));
    }

    #[test]
    fn undefined_value_is_still_an_own_key() {
        let mut object = Object::new();
        object.insert("foo", Value::Undefined);
        assert!(object.contains_key("foo"));
        assert_eq!(object.get("foo"), Some(&Value::Undefined));
        assert!(!object.contains_key("bar"));
    }

    #[test]
    fn wide_object_builds_and_looks_up_every_key() {
        let n = 20_000;
        let mut object = Object::with_capacity(n);
        for i in 0..n {
            object.insert(format!("key{i}"), Value::from(i as f64));
        }
        assert_eq!(object.len(), n);
        assert!((0..n).all(|i| object.contains_key(&format!("key{i}"))));
        assert_eq!(object.keys().last(), Some("key19999"));
    }
}

use crate::interpreter::value::core::{Value, values_equal};

/// An insertion-ordered association between value keys and values.
///
/// Entries are kept in a single vector so that insertion order is what
/// `echo` prints. Key lookup uses the language's cross-type equality
/// relation, so `1`, `1.0`, and `true` all name the same slot; hashing is
/// deliberately avoided because it would have to agree with that relation.
///
/// Replacing an existing key keeps its position:
///
/// ```
/// use voidlang::interpreter::value::{core::Value, dict::Dict};
///
/// let mut d = Dict::new();
/// d.insert(Value::from("a"), Value::Int(1));
/// d.insert(Value::from("b"), Value::Int(2));
/// d.insert(Value::from("a"), Value::Int(9));
///
/// assert_eq!(d.len(), 2);
/// assert_eq!(d.get(&Value::from("a")), Some(&Value::Int(9)));
/// assert_eq!(d.entries()[0].1, Value::Int(9));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dict {
    entries: Vec<(Value, Value)>,
}

impl Dict {
    /// Creates an empty dictionary.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Builds a dictionary from key/value pairs in order, applying the
    /// replace-in-place rule to duplicate keys.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(Value, Value)>) -> Self {
        let mut dict = Self::new();
        for (key, value) in pairs {
            dict.insert(key, value);
        }
        dict
    }

    /// The number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the value stored under a key equal to `key`.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| values_equal(existing, key))
            .map(|(_, value)| value)
    }

    /// Inserts a key/value pair.
    ///
    /// If a key equal to `key` already exists, its value is replaced in
    /// place and its position is preserved; otherwise the pair is appended.
    pub fn insert(&mut self, key: Value, value: Value) {
        for (existing, slot) in &mut self.entries {
            if values_equal(existing, &key) {
                *slot = value;
                return;
            }
        }
        self.entries.push((key, value));
    }

    /// Removes the entry whose key equals `key`, returning its value.
    pub fn remove(&mut self, key: &Value) -> Option<Value> {
        let position = self.entries
                           .iter()
                           .position(|(existing, _)| values_equal(existing, key))?;
        Some(self.entries.remove(position).1)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[(Value, Value)] {
        &self.entries
    }
}

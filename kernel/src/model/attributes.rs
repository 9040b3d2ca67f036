//! `Attributes`: the ordered attribute map of an entity.
//!
//! The key set is fixed when the map is built. Effects may change values
//! but can neither add nor remove keys: writes to an unknown key are
//! ignored and reported through the `bool` return value.

use indexmap::IndexMap;

use crate::model::value::Value;

/// Ordered attribute-name → value map with a fixed key set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes {
    values: IndexMap<String, Value>,
}

impl Attributes {
    /// Create an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Boolean attribute; `false` when missing or not a boolean.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    #[must_use]
    pub fn int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_int)
    }

    #[must_use]
    pub fn symbol(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_symbol)
    }

    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Name of the entity referenced by `key`, if it holds a [`Value::Ref`].
    #[must_use]
    pub fn reference(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_reference)
    }

    /// True if `key` holds a symbol equal to `symbol`.
    #[must_use]
    pub fn is(&self, key: &str, symbol: &str) -> bool {
        self.symbol(key) == Some(symbol)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Overwrite the value of an existing key.
    ///
    /// Returns `false` (and changes nothing) if `key` is not part of the
    /// fixed key set.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> bool {
        match self.values.get_mut(key) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Replace the value of an existing key with `f(current)`.
    ///
    /// Returns `false` if `key` is unknown.
    pub fn update(&mut self, key: &str, f: impl FnOnce(&Value) -> Value) -> bool {
        match self.values.get_mut(key) {
            Some(slot) => {
                *slot = f(slot);
                true
            }
            None => false,
        }
    }

    /// Add `delta` to an integer attribute. No-op unless `key` holds an int.
    pub fn increment(&mut self, key: &str, delta: i64) -> bool {
        match self.values.get_mut(key) {
            Some(Value::Int(i)) => {
                *i = i.saturating_add(delta);
                true
            }
            _ => false,
        }
    }

    /// Iterate `(key, value)` pairs in construction order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterate `(key, referenced entity name)` for every reference held by
    /// an attribute, including references inside list values.
    pub fn references(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().flat_map(|(k, v)| {
            v.referenced_names()
                .into_iter()
                .map(move |target| (k, target))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

//! Structured record fields.
//!
//! A `Fields` value is an ordered key/value map. Inserting an existing key
//! replaces its value, which gives the merge rule used when building a
//! record: later sources win over earlier ones.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// Key used when a flat pair list carries a non-string key.
pub const UNKNOWN_KEY: &str = "<unknown>";

/// Ordered key/value fields attached to a log record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Fields(Map<String, Value>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a field, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Build fields from a flat alternating `key, value, key, value` list.
    ///
    /// Non-string keys are recorded under [`UNKNOWN_KEY`]. A trailing key
    /// without a value is dropped.
    pub fn from_pairs(args: &[Value]) -> Self {
        let mut fields = Self::new();
        for pair in args.chunks_exact(2) {
            let key = match &pair[0] {
                Value::String(key) => key.clone(),
                _ => UNKNOWN_KEY.to_string(),
            };
            fields.0.insert(key, pair[1].clone());
        }
        fields
    }

    /// Merge `other` into `self`; `other` wins on key collisions.
    pub fn merge(&mut self, other: &Fields) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (key, value) in iter {
            fields.insert(key, value);
        }
        fields
    }
}

impl<K, V> From<Vec<(K, V)>> for Fields
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Fields
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<()> for Fields {
    fn from(_: ()) -> Self {
        Fields::new()
    }
}

impl From<Map<String, Value>> for Fields {
    fn from(map: Map<String, Value>) -> Self {
        Fields(map)
    }
}

/// Render a value for text output: strings bare, everything else as JSON.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{}={}", key, display_value(value))?;
        }
        Ok(())
    }
}

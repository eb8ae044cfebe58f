use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
struct OverrideEntry {
    key: String,
    needle: String,
    value: String,
}

/// User-supplied values keyed by field-key substrings, tried in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideMap {
    entries: Vec<OverrideEntry>,
}

impl OverrideMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a profile's `data` object, keeping its declaration order.
    pub fn from_json_object(data: &Map<String, Value>) -> Self {
        let mut map = Self::new();
        for (key, value) in data {
            map.insert(key, coerce_value(value));
        }
        map
    }

    /// An empty key is a substring of every field key and so matches every field.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.entries.push(OverrideEntry {
            key: key.to_string(),
            needle: key.to_lowercase(),
            value: value.into(),
        });
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// First entry whose lowercased key occurs in `field_key`, as `(entry key, value)`.
    /// `field_key` is expected in lowercase.
    pub fn lookup(&self, field_key: &str) -> Option<(&str, &str)> {
        self.entries
            .iter()
            .find(|e| field_key.contains(&e.needle))
            .map(|e| (e.key.as_str(), e.value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|e| (e.key.as_str(), e.value.as_str()))
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for OverrideMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key.as_ref(), value);
        }
        map
    }
}

/// String form of a profile value.
///
/// Strings pass through; numbers and booleans use their literal text; `null` becomes
/// `"null"`; arrays join their elements with `,` (nested `null` as empty); objects
/// become compact JSON.
pub fn coerce_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".into(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

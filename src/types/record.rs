use std::collections::HashMap;

use super::Value;

/// The data a rule group is evaluated against: field names mapped to [`Value`]s.
///
/// Field names are literal keys. `"user.age"` is a single field, not a path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value.
    #[must_use]
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Insert a field (mutable reference version). Returns the previous value, if any.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Remove a field, returning its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Whether `field` is present. A field holding [`Value::Null`] is present.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, Value>> for Record {
    fn from(fields: HashMap<String, Value>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let record = Record::new().set("name", "alice");
        assert_eq!(record.get("name"), Some(&Value::String("alice".to_owned())));
    }

    #[test]
    fn dotted_names_are_literal_keys() {
        let record = Record::new().set("user.age", 25_i64);
        assert_eq!(record.get("user.age"), Some(&Value::Int(25)));
        assert_eq!(record.get("user"), None);
    }

    #[test]
    fn get_missing_returns_none() {
        let record = Record::new().set("age", 25_i64);
        assert_eq!(record.get("name"), None);
        assert!(!record.contains("name"));
    }

    #[test]
    fn null_field_is_present() {
        let record = Record::new().set("nickname", Value::Null);
        assert!(record.contains("nickname"));
        assert_eq!(record.get("nickname"), Some(&Value::Null));
    }

    #[test]
    fn overwrite_value() {
        let record = Record::new().set("score", 10_i64).set("score", 20_i64);
        assert_eq!(record.get("score"), Some(&Value::Int(20)));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn insert_returns_previous() {
        let mut record = Record::new();
        assert_eq!(record.insert("key", true), None);
        assert_eq!(record.insert("key", false), Some(Value::Bool(true)));
        assert_eq!(record.remove("key"), Some(Value::Bool(false)));
        assert!(record.is_empty());
    }

    #[test]
    fn collect_from_pairs() {
        let record: Record = [("age", Value::Int(20)), ("sex", Value::from("1"))]
            .into_iter()
            .collect();
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("sex"), Some(&Value::from("1")));
    }
}

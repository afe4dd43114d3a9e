//! Compound records used to persist morphs and their settings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{MorphError, Result};

/// A compound record of named fields.
///
/// Getters follow the host's save-format conventions: a missing field or a
/// field of the wrong type reads as the type's default instead of failing, so
/// an outdated save degrades instead of aborting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MorphTag(Map<String, Value>);

impl MorphTag {
    /// Create an empty compound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a compound from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(MorphError::NotACompound {
                found: value_kind(&other),
            }),
        }
    }

    /// Encode this compound as JSON text.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn set_string(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_owned(), Value::String(value.into()));
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.0.insert(key.to_owned(), Value::Bool(value));
    }

    pub fn set_int(&mut self, key: &str, value: i32) {
        self.0.insert(key.to_owned(), Value::from(value));
    }

    pub fn set_long(&mut self, key: &str, value: i64) {
        self.0.insert(key.to_owned(), Value::from(value));
    }

    pub fn set_float(&mut self, key: &str, value: f32) {
        self.0.insert(key.to_owned(), Value::from(f64::from(value)));
    }

    pub fn set_string_list<I, S>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = values
            .into_iter()
            .map(|s| Value::String(s.into()))
            .collect();
        self.0.insert(key.to_owned(), Value::Array(list));
    }

    pub fn set_compound(&mut self, key: &str, value: MorphTag) {
        self.0.insert(key.to_owned(), Value::Object(value.0));
    }

    /// Read a string field; "" when absent.
    pub fn get_string(&self, key: &str) -> String {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned()
    }

    /// Read a boolean field; `false` when absent.
    pub fn get_bool(&self, key: &str) -> bool {
        self.0.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Read an integer field; 0 when absent or out of range.
    pub fn get_int(&self, key: &str) -> i32 {
        self.0
            .get(key)
            .and_then(Value::as_i64)
            .and_then(|v| i32::try_from(v).ok())
            .unwrap_or(0)
    }

    /// Read a float field; 0.0 when absent.
    pub fn get_float(&self, key: &str) -> f32 {
        self.0.get(key).and_then(Value::as_f64).unwrap_or(0.0) as f32
    }

    /// A numeric field as a float; `None` when absent or not a number.
    pub fn float(&self, key: &str) -> Option<f32> {
        self.0.get(key).and_then(Value::as_f64).map(|v| v as f32)
    }

    /// An integer field; `None` when absent or not an integer.
    pub fn long(&self, key: &str) -> Option<i64> {
        self.0.get(key).and_then(Value::as_i64)
    }

    /// Read a list of strings, skipping non-string entries.
    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Read a nested compound; empty when absent.
    pub fn get_compound(&self, key: &str) -> MorphTag {
        match self.0.get(key) {
            Some(Value::Object(map)) => MorphTag(map.clone()),
            _ => MorphTag::new(),
        }
    }
}

impl From<Map<String, Value>> for MorphTag {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "compound",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_read_as_defaults() {
        let tag = MorphTag::new();
        assert_eq!(tag.get_string("Name"), "");
        assert!(!tag.get_bool("Favorite"));
        assert_eq!(tag.get_int("Keybind"), 0);
        assert!(tag.get_compound("Settings").is_empty());
        assert!(tag.get_string_list("Abilities").is_empty());
    }

    #[test]
    fn test_wrong_type_reads_as_default() {
        let mut tag = MorphTag::new();
        tag.set_int("Name", 4);
        tag.set_string("Keybind", "four");

        assert_eq!(tag.get_string("Name"), "");
        assert_eq!(tag.get_int("Keybind"), 0);
    }

    #[test]
    fn test_optional_numbers() {
        let mut tag = MorphTag::new();
        tag.set_float("Speed", 0.5);
        tag.set_string("Fast", "yes");
        tag.set_long("Keybind", i64::from(u32::MAX));

        assert_eq!(tag.float("Speed"), Some(0.5));
        assert_eq!(tag.float("Fast"), None);
        assert_eq!(tag.float("Missing"), None);
        assert_eq!(tag.long("Keybind"), Some(4_294_967_295));
        assert_eq!(tag.long("Speed"), None);
    }

    #[test]
    fn test_nested_compound() {
        let mut inner = MorphTag::new();
        inner.set_float("Speed", 0.25);

        let mut tag = MorphTag::new();
        tag.set_compound("Settings", inner);

        let settings = tag.get_compound("Settings");
        assert!((settings.get_float("Speed") - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_json_text() {
        let mut tag = MorphTag::new();
        tag.set_string("Name", "Pig");
        tag.set_bool("Favorite", true);
        tag.set_string_list("Abilities", ["jumping", "fire_proof"]);

        let text = tag.to_json_string().unwrap();
        let parsed = MorphTag::from_json_str(&text).unwrap();

        assert_eq!(parsed, tag);
        assert_eq!(parsed.get_string_list("Abilities"), vec!["jumping", "fire_proof"]);
    }

    #[test]
    fn test_json_must_be_compound() {
        let err = MorphTag::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, MorphError::NotACompound { found: "list" }));

        assert!(matches!(
            MorphTag::from_json_str("{ nope"),
            Err(MorphError::Json(_))
        ));
    }
}

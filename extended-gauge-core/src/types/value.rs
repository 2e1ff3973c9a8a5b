//! Configuration value model
//!
//! Card configuration is a tree of records and lists. Containers sit behind `Arc`,
//! so cloning a value shares the whole subtree and an edit only has to copy the
//! containers on the path from the edited leaf up to the root. [`ConfigValue::ptr_eq`]
//! tells whether two container values are still the same object.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::path::PathStep;
use crate::error::{CoreError, CoreResult};

/// Insertion-ordered record of a configuration object
pub type Record = IndexMap<String, ConfigValue>;

/// One node of the configuration graph
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ConfigValue {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Object(Arc<Record>),
    List(Arc<Vec<ConfigValue>>),
}

impl ConfigValue {
    /// Wrap a record
    #[must_use]
    pub fn object(record: Record) -> Self {
        Self::Object(Arc::new(record))
    }

    /// Wrap a list of values
    #[must_use]
    pub fn list(items: Vec<ConfigValue>) -> Self {
        Self::List(Arc::new(items))
    }

    /// A fresh, empty record
    #[must_use]
    pub fn empty_object() -> Self {
        Self::object(Record::new())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Record> {
        match self {
            Self::Object(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ConfigValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Field of a record (`None` for missing keys and non-records)
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.as_object().and_then(|record| record.get(key))
    }

    /// Element of a list (`None` when out of range or not a list)
    pub fn get_index(&self, index: usize) -> Option<&ConfigValue> {
        self.as_list().and_then(|items| items.get(index))
    }

    /// Follow one path step
    pub fn step(&self, step: &PathStep) -> Option<&ConfigValue> {
        match step {
            PathStep::Key(key) => self.get(key),
            PathStep::Index(index) => self.get_index(*index),
        }
    }

    /// Follow a sequence of path steps
    pub fn resolve(&self, steps: &[PathStep]) -> Option<&ConfigValue> {
        steps
            .iter()
            .try_fold(self, |value, step| value.step(step))
    }

    /// Shallow copy of this record with `key` set to `value`.
    ///
    /// `Null` is treated as an empty record; every other field keeps its identity.
    pub fn with_key(&self, key: &str, value: ConfigValue) -> CoreResult<Self> {
        let mut record = match self {
            Self::Object(record) => Record::clone(record),
            Self::Null => Record::new(),
            other => {
                return Err(CoreError::InvalidPath(format!(
                    "cannot set key '{key}' on {}",
                    other.kind_name()
                )))
            }
        };
        record.insert(key.to_string(), value);
        Ok(Self::object(record))
    }

    /// Shallow copy of this list with element `index` replaced by `value`
    pub fn with_index(&self, index: usize, value: ConfigValue) -> CoreResult<Self> {
        let Self::List(items) = self else {
            return Err(CoreError::InvalidPath(format!(
                "cannot set index {index} on {}",
                self.kind_name()
            )));
        };
        if index >= items.len() {
            return Err(CoreError::RowOutOfRange {
                index,
                len: items.len(),
            });
        }
        let mut items = Vec::clone(items);
        items[index] = value;
        Ok(Self::list(items))
    }

    /// Shallow copy with a single step replaced
    pub fn with_step(&self, step: &PathStep, value: ConfigValue) -> CoreResult<Self> {
        match step {
            PathStep::Key(key) => self.with_key(key, value),
            PathStep::Index(index) => self.with_index(*index, value),
        }
    }

    /// Copy-on-write replacement of the value at `steps`.
    ///
    /// Each container along the path is shallow-copied; everything off the path
    /// is shared with `self`. Missing intermediate keys read as `Null`.
    pub fn replace_at(&self, steps: &[PathStep], value: ConfigValue) -> CoreResult<Self> {
        let Some((first, rest)) = steps.split_first() else {
            return Ok(value);
        };
        let child = self.step(first).cloned().unwrap_or_default();
        let child = child.replace_at(rest, value)?;
        self.with_step(first, child)
    }

    /// Identity comparison: containers compare by pointer, scalars by value
    pub fn ptr_eq(&self, other: &ConfigValue) -> bool {
        match (self, other) {
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::List(a), Self::List(b)) => Arc::ptr_eq(a, b),
            (Self::Object(_) | Self::List(_), _) | (_, Self::Object(_) | Self::List(_)) => false,
            (a, b) => a == b,
        }
    }

    /// Convert into a `serde_json::Value`
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Number(n) => serde_json::Value::Number(n.clone()),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Object(record) => serde_json::Value::Object(
                record
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            Self::List(items) => {
                serde_json::Value::Array(items.iter().map(ConfigValue::to_json).collect())
            }
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "a boolean",
            Self::Number(_) => "a number",
            Self::String(_) => "a string",
            Self::Object(_) => "an object",
            Self::List(_) => "a list",
        }
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::list(items.into_iter().map(ConfigValue::from).collect())
            }
            serde_json::Value::Object(map) => Self::object(
                map.into_iter()
                    .map(|(key, value)| (key, ConfigValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for ConfigValue {
    /// Non-finite numbers have no JSON representation and become `Null`
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Object(record) => {
                let mut map = serializer.serialize_map(Some(record.len()))?;
                for (key, value) in record.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(ConfigValue::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ConfigValue {
        ConfigValue::from(json!({
            "title": { "title": "Boiler" },
            "segment_list": [
                { "id": 0, "title": { "title": "cold" } },
                { "id": 1, "title": { "title": "hot" } }
            ]
        }))
    }

    #[test]
    fn with_key_shares_untouched_fields() {
        let root = sample();
        let updated = root.with_key("title", json!({"title": "Tank"}).into()).unwrap();

        assert!(!updated.ptr_eq(&root));
        assert!(updated
            .get("segment_list")
            .unwrap()
            .ptr_eq(root.get("segment_list").unwrap()));
        assert_eq!(updated.get("title").unwrap().get("title").unwrap().as_str(), Some("Tank"));
        // the source value is left as it was
        assert_eq!(root.get("title").unwrap().get("title").unwrap().as_str(), Some("Boiler"));
    }

    #[test]
    fn with_key_on_null_creates_record() {
        let value = ConfigValue::Null.with_key("min_value", 5_i64.into()).unwrap();
        assert_eq!(value.get("min_value").and_then(ConfigValue::as_i64), Some(5));
    }

    #[test]
    fn with_key_on_scalar_fails() {
        let err = ConfigValue::from("text").with_key("x", ConfigValue::Null).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPath(_)));
    }

    #[test]
    fn with_index_out_of_range() {
        let list = ConfigValue::list(vec![ConfigValue::Null]);
        let err = list.with_index(3, ConfigValue::Null).unwrap_err();
        assert_eq!(err, CoreError::RowOutOfRange { index: 3, len: 1 });
    }

    #[test]
    fn replace_at_copies_only_the_path() {
        let root = sample();
        let path = [
            PathStep::key("segment_list"),
            PathStep::Index(1),
            PathStep::key("title"),
        ];
        let updated = root
            .replace_at(&path, json!({"title": "very hot"}).into())
            .unwrap();

        let old_list = root.get("segment_list").unwrap();
        let new_list = updated.get("segment_list").unwrap();
        assert!(!new_list.ptr_eq(old_list));
        assert!(new_list.get_index(0).unwrap().ptr_eq(old_list.get_index(0).unwrap()));
        assert!(!new_list.get_index(1).unwrap().ptr_eq(old_list.get_index(1).unwrap()));
        assert!(updated.get("title").unwrap().ptr_eq(root.get("title").unwrap()));
        assert_eq!(
            updated.resolve(&path).unwrap().get("title").unwrap().as_str(),
            Some("very hot")
        );
    }

    #[test]
    fn replace_at_fills_missing_records() {
        let updated = ConfigValue::empty_object()
            .replace_at(
                &[PathStep::key("entity"), PathStep::key("settings")],
                json!({"decimals": 2}).into(),
            )
            .unwrap();
        assert_eq!(updated.to_json(), json!({"entity": {"settings": {"decimals": 2}}}));
    }

    #[test]
    fn ptr_eq_compares_scalars_by_value() {
        assert!(ConfigValue::from(3_i64).ptr_eq(&ConfigValue::from(3_i64)));
        assert!(!ConfigValue::empty_object().ptr_eq(&ConfigValue::empty_object()));
        assert!(!ConfigValue::Null.ptr_eq(&ConfigValue::empty_object()));
    }

    #[test]
    fn serde_keeps_key_order() {
        let json = r#"{"type":"custom:extended-gauge-card","main":{"show_needle":true},"entity":null}"#;
        let value: ConfigValue = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), json);
    }

    #[test]
    fn nested_records_keep_file_order() {
        let json = r#"{"type":"custom:extended-gauge-card","segment_list":[{"title":{"title":"hot"},"id":1,"settings":{"segment_upper":100,"segment_lower":40}}]}"#;
        let value: ConfigValue = serde_json::from_str(json).unwrap();

        let row = value.get("segment_list").and_then(|list| list.get_index(0)).unwrap();
        let keys: Vec<&str> = row.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["title", "id", "settings"]);
        assert_eq!(serde_json::to_string(&value).unwrap(), json);
        assert_eq!(serde_json::to_string(&value.to_json()).unwrap(), json);
    }

    #[test]
    fn non_finite_float_becomes_null() {
        assert!(ConfigValue::from(f64::NAN).is_null());
        assert_eq!(ConfigValue::from(0.5).as_f64(), Some(0.5));
    }
}

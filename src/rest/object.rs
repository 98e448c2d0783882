//! Dynamic object mapping for Tassi API responses.
//!
//! This module converts arbitrary JSON values into a navigable object
//! graph. The mapping is structural, not schema-driven: an [`Object`]
//! exposes exactly the keys present in the originating JSON object, unknown
//! fields survive, and missing fields are simply absent (never null-filled).
//!
//! # Mapping Rules
//!
//! - JSON objects become [`Object`], recursively to arbitrary depth
//! - JSON arrays preserve order and length; object elements become
//!   [`Object`]s, scalar elements pass through
//! - Scalars (string, number, boolean, null) pass through unchanged
//!
//! The mapper never fails for well-formed JSON values; malformed response
//! bodies are rejected upstream by the dispatcher.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use tassi_api::ObjectValue;
//!
//! let mapped = ObjectValue::from_json(json!({
//!     "id": 4,
//!     "status": "in_transit",
//!     "route": {"origin": "Cotonou", "destination": "Porto-Novo"}
//! }));
//!
//! let package = mapped.as_object().unwrap();
//! assert_eq!(package.get_i64("id"), Some(4));
//! assert_eq!(package.get_object("route").unwrap().get_str("origin"), Some("Cotonou"));
//! assert!(package.get("tracking_number").is_none());
//! ```

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Number, Value};

/// A value in a mapped response graph.
///
/// The tagged union mirrors JSON's value space, with mappings replaced by
/// [`Object`] so nested structures stay navigable.
#[derive(Clone, Debug, PartialEq)]
pub enum ObjectValue {
    /// JSON `null`.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number, kept in JSON representation.
    Number(Number),
    /// A string.
    String(String),
    /// An ordered sequence of mapped elements.
    Array(Vec<ObjectValue>),
    /// A nested mapped object.
    Object(Object),
}

impl ObjectValue {
    /// Recursively maps a JSON value.
    #[must_use]
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from_json).collect()),
            Value::Object(map) => Self::Object(Object::from_json_map(map)),
        }
    }

    /// Converts the mapped value back into JSON.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::String(s) => Value::String(s.clone()),
            Self::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Object(object) => object.to_json(),
        }
    }

    /// Returns the string slice if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as an `i64` if it is an integer in range.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Returns the value as a `u64` if it is a non-negative integer.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    /// Returns the value as an `f64` if it is a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Returns the nested object if this is an object.
    #[must_use]
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the elements if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[ObjectValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns `true` if this is JSON `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<Value> for ObjectValue {
    fn from(value: Value) -> Self {
        Self::from_json(value)
    }
}

impl From<bool> for ObjectValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ObjectValue {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<u64> for ObjectValue {
    fn from(value: u64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<&str> for ObjectValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ObjectValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl Serialize for ObjectValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => serializer.collect_seq(items),
            Self::Object(object) => object.serialize(serializer),
        }
    }
}

/// A dynamic object mapped from a JSON response.
///
/// An `Object` is an insertion-ordered mapping from string key to
/// [`ObjectValue`]; iteration yields keys in document order. Accessors
/// return `Option` so absent attributes read as `None` rather than null.
///
/// Objects are owned exclusively by the caller that receives them; mutating
/// one has no effect on the server until the instance is persisted through
/// a resource operation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object {
    fields: Vec<(String, ObjectValue)>,
}

impl Object {
    /// Creates an empty object.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Maps a decoded JSON mapping, preserving key order.
    #[must_use]
    pub fn from_json_map(map: Map<String, Value>) -> Self {
        Self {
            fields: map
                .into_iter()
                .map(|(key, value)| (key, ObjectValue::from_json(value)))
                .collect(),
        }
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ObjectValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Returns the string value for `key`, if present and a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ObjectValue::as_str)
    }

    /// Returns the boolean value for `key`, if present and a boolean.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(ObjectValue::as_bool)
    }

    /// Returns the `i64` value for `key`, if present and in range.
    #[must_use]
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(ObjectValue::as_i64)
    }

    /// Returns the `u64` value for `key`, if present and in range.
    #[must_use]
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(ObjectValue::as_u64)
    }

    /// Returns the `f64` value for `key`, if present and a number.
    #[must_use]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(ObjectValue::as_f64)
    }

    /// Returns the nested object for `key`, if present and an object.
    #[must_use]
    pub fn get_object(&self, key: &str) -> Option<&Object> {
        self.get(key).and_then(ObjectValue::as_object)
    }

    /// Returns the array elements for `key`, if present and an array.
    #[must_use]
    pub fn get_array(&self, key: &str) -> Option<&[ObjectValue]> {
        self.get(key).and_then(ObjectValue::as_array)
    }

    /// Returns `true` if the object has an attribute named `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    /// Iterates over key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ObjectValue)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the object has no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Sets an attribute, replacing an existing value in place so key order
    /// is stable under mutation.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ObjectValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.fields.push((key, value));
        }
    }

    /// Removes an attribute and returns its value, if present.
    pub fn remove(&mut self, key: &str) -> Option<ObjectValue> {
        let index = self.fields.iter().position(|(k, _)| k == key)?;
        Some(self.fields.remove(index).1)
    }

    /// Converts the object back into JSON.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }

    /// Serializes the attribute state for persistence: every field except
    /// the server-assigned identifier, as a JSON object.
    #[must_use]
    pub fn serialize_params(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .filter(|(key, _)| key.as_str() != "id")
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

//! JSON bridge: conversions between [`Element`] trees and `serde_json`
//! value trees, plus the text-level entry points.
//!
//! The JSON grammar itself is fully delegated to `serde_json`; this module
//! only maps between the two in-memory representations. Numbers follow the
//! element's own type tag rather than value inspection: an Int element
//! always serializes without a decimal point, a Double always as a float.
//! Object key order survives both directions (`serde_json` is built with
//! `preserve_order`).

use crate::element::Element;
use crate::error::Result;
use crate::types::Type;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fmt;

/// Convert an element tree into a `serde_json` value tree.
///
/// Arrays drop their synthetic keys; objects emit entries in stored key
/// order. Function elements have no JSON representation and map to null,
/// as do non-finite doubles.
pub fn to_json_value(element: &Element) -> Value {
    match element.get_type() {
        Type::Null | Type::Function => Value::Null,
        Type::Bool => Value::Bool(element.get_bool()),
        Type::Int => Value::Number(element.get_int().into()),
        Type::Double => serde_json::Number::from_f64(element.get_double())
            .map_or(Value::Null, Value::Number),
        Type::String => Value::String(element.get_string().to_owned()),
        Type::Array => Value::Array(element.iter().map(to_json_value).collect()),
        Type::Object => {
            let mut map = Map::with_capacity(element.count_children());
            for (key, child) in element.get_keys().iter().zip(element.children()) {
                map.insert(key.clone(), to_json_value(child));
            }
            Value::Object(map)
        }
    }
}

/// Convert a `serde_json` value tree into an element tree.
///
/// Number nodes keep the tree's own integer/float classification; unsigned
/// values beyond `i64::MAX` fall back to double. The `Value` enum is
/// closed, so the mapping is total by construction.
pub fn from_json_value(value: &Value) -> Element {
    match value {
        Value::Null => Element::new(),
        Value::Bool(value) => Element::from(*value),
        Value::Number(number) => match number.as_i64() {
            Some(int) => Element::from(int),
            None => Element::from(number.as_f64().unwrap_or(0.0)),
        },
        Value::String(text) => Element::from(text.as_str()),
        Value::Array(items) => Element::array(items.iter().map(from_json_value).collect()),
        Value::Object(map) => {
            let keys = map.keys().cloned().collect();
            let values = map.values().map(from_json_value).collect();
            // Both lists come from the same map; the size check cannot fire.
            Element::object(keys, values).unwrap_or_default()
        }
    }
}

impl Element {
    /// Serialize to JSON text. `indentation` 0 yields compact output with
    /// no embedded newlines; any other width pretty-prints with that many
    /// spaces per level.
    pub fn to_json(&self, indentation: usize) -> Result<String> {
        let value = to_json_value(self);
        if indentation == 0 {
            return Ok(serde_json::to_string(&value)?);
        }
        let indent = vec![b' '; indentation];
        let mut out = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&indent));
        value.serialize(&mut serializer)?;
        Ok(String::from_utf8(out).expect("serde_json emits UTF-8"))
    }

    /// Parse JSON text into a new element tree.
    pub fn from_json(json_text: &str) -> Result<Element> {
        let value: Value = serde_json::from_str(json_text)?;
        Ok(from_json_value(&value))
    }

    /// Parse JSON text and merge it onto this element via
    /// [`Element::apply`]: the entry point for applying partial JSON
    /// patches to an existing structure.
    pub fn apply_json(&mut self, json_text: &str) -> Result<()> {
        let patch = Element::from_json(json_text)?;
        self.apply(&patch);
        Ok(())
    }
}

impl Serialize for Element {
    /// Serializes through the JSON tree mapping: function elements become
    /// null, arrays drop their synthetic keys.
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        to_json_value(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(from_json_value(&value))
    }
}

impl fmt::Display for Element {
    /// Compact JSON rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(&to_json_value(self)).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

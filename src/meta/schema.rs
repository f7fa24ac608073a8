// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! JSON Schema projection of shape descriptors.
//!
//! | Shape         | JSON Schema                                             |
//! |---------------|---------------------------------------------------------|
//! | `Null`        | `{"type":"null"}`                                       |
//! | `Bool`        | `{"type":"boolean"}`                                    |
//! | `Int`         | `{"type":"integer"}`                                    |
//! | `Float`       | `{"type":"number"}`                                     |
//! | `String`      | `{"type":"string"}`                                     |
//! | `Array(E)`    | `{"type":"array","items":E}`                            |
//! | `Map{K,V}`    | `{"type":"object","additionalProperties":V}`            |
//! | `Object{..}`  | `{"type":"object","properties":{"name":T,..}}`          |
//!
//! JSON object keys are always strings, so the key shape of a `Map` has no
//! counterpart in the schema.

use anyhow::Result;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::{Meta, Shape};

impl Shape {
    /// The JSON Schema `type` keyword for this shape.
    pub fn json_type(&self) -> &'static str {
        match self {
            Shape::Null => "null",
            Shape::Bool => "boolean",
            Shape::Int => "integer",
            Shape::Float => "number",
            Shape::String => "string",
            Shape::Array(_) => "array",
            Shape::Map { .. } | Shape::Object(_) => "object",
        }
    }
}

// Entries are written in a fixed order with `type` first.
impl Serialize for Meta {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let shape = self.shape();
        let len = match shape {
            Shape::Array(_) | Shape::Map { .. } | Shape::Object(_) => 2,
            _ => 1,
        };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("type", shape.json_type())?;
        match shape {
            Shape::Array(items) => map.serialize_entry("items", items)?,
            Shape::Map { value, .. } => map.serialize_entry("additionalProperties", value)?,
            Shape::Object(fields) => map.serialize_entry("properties", fields)?,
            _ => (),
        }
        map.end()
    }
}

impl Meta {
    /// Compact JSON Schema text for this descriptor.
    pub fn to_json_schema(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// JSON Schema for this descriptor as a `serde_json` tree.
    pub fn json_schema(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

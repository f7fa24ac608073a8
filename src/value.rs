// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use core::fmt;
use std::borrow::Cow;
use std::collections::BTreeMap;

use anyhow::Result;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use self::error::ValueError;

mod compare;
mod display;
pub mod error;

pub use compare::compare;

/// A dynamically typed value.
///
/// Maps are keyed by `Value` itself and kept sorted under the total order
/// implemented by [`compare`]. Every value owns its children; `clone` is a
/// deep copy.
///
/// The variant declaration order is the tag order used when comparing values
/// of different kinds: `Null < Bool < Int < Float < String < Map < Array`.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Map(BTreeMap<Value, Value>),
    Array(Vec<Value>),
}

/// The discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    String,
    Map,
    Array,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Map => "map",
            ValueKind::Array => "array",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::Error;
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(a) => a.serialize(serializer),
            Value::Map(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (k, v) in fields.iter() {
                    match k {
                        Value::String(_) => map.serialize_entry(k, v)?,
                        _ => {
                            // JSON keys must be strings; use the key's own JSON text.
                            let key_str = serde_json::to_string(k).map_err(Error::custom)?;
                            map.serialize_entry(&key_str, v)?
                        }
                    }
                }
                map.end()
            }
        }
    }
}

impl Value {
    pub fn new_map() -> Value {
        Value::Map(BTreeMap::new())
    }

    pub fn new_array() -> Value {
        Value::Array(vec![])
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_str(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Map(_) => ValueKind::Map,
            Value::Array(_) => ValueKind::Array,
        }
    }

    /// Replace the active case with `value`.
    pub fn assign(&mut self, value: impl Into<Value>) {
        *self = value.into();
    }

    /// Move the value out, leaving `Null` behind.
    pub fn take(&mut self) -> Value {
        core::mem::take(self)
    }

    fn mismatch(&self, expected: ValueKind) -> ValueError {
        ValueError::type_mismatch(expected, self.kind())
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn as_bool(&self) -> Result<&bool, ValueError> {
        match self {
            Value::Bool(b) => Ok(b),
            _ => Err(self.mismatch(ValueKind::Bool)),
        }
    }

    pub fn as_bool_mut(&mut self) -> Result<&mut bool, ValueError> {
        match self {
            Value::Bool(b) => Ok(b),
            _ => Err(self.mismatch(ValueKind::Bool)),
        }
    }

    pub fn as_int(&self) -> Result<&i64, ValueError> {
        match self {
            Value::Int(i) => Ok(i),
            _ => Err(self.mismatch(ValueKind::Int)),
        }
    }

    pub fn as_int_mut(&mut self) -> Result<&mut i64, ValueError> {
        match self {
            Value::Int(i) => Ok(i),
            _ => Err(self.mismatch(ValueKind::Int)),
        }
    }

    pub fn as_float(&self) -> Result<&f64, ValueError> {
        match self {
            Value::Float(f) => Ok(f),
            _ => Err(self.mismatch(ValueKind::Float)),
        }
    }

    pub fn as_float_mut(&mut self) -> Result<&mut f64, ValueError> {
        match self {
            Value::Float(f) => Ok(f),
            _ => Err(self.mismatch(ValueKind::Float)),
        }
    }

    pub fn as_string(&self) -> Result<&String, ValueError> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch(ValueKind::String)),
        }
    }

    pub fn as_string_mut(&mut self) -> Result<&mut String, ValueError> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch(ValueKind::String)),
        }
    }

    pub fn as_map(&self) -> Result<&BTreeMap<Value, Value>, ValueError> {
        match self {
            Value::Map(m) => Ok(m),
            _ => Err(self.mismatch(ValueKind::Map)),
        }
    }

    pub fn as_map_mut(&mut self) -> Result<&mut BTreeMap<Value, Value>, ValueError> {
        match self {
            Value::Map(m) => Ok(m),
            _ => Err(self.mismatch(ValueKind::Map)),
        }
    }

    pub fn as_array(&self) -> Result<&Vec<Value>, ValueError> {
        match self {
            Value::Array(a) => Ok(a),
            _ => Err(self.mismatch(ValueKind::Array)),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Vec<Value>, ValueError> {
        match self {
            Value::Array(a) => Ok(a),
            _ => Err(self.mismatch(ValueKind::Array)),
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(s: Cow<'_, str>) -> Self {
        Value::String(s.into_owned())
    }
}

impl From<Vec<Value>> for Value {
    fn from(a: Vec<Value>) -> Self {
        Value::Array(a)
    }
}

impl From<BTreeMap<Value, Value>> for Value {
    fn from(m: BTreeMap<Value, Value>) -> Self {
        Value::Map(m)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(Value, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().collect())
    }
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use core::cmp::Ordering;

use super::Value;

/// Total order over all values.
///
/// Values of different kinds are ordered by [`ValueKind`](super::ValueKind).
/// Values of the same kind compare by payload: booleans with `false < true`,
/// numbers numerically, strings lexicographically, and arrays and maps
/// lexicographically over their elements and sorted `(key, value)` entries.
///
/// Floats have no numeric order for NaN; those are placed using the IEEE-754
/// total order so that the result stays a total order.
pub fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::Float(a), Value::Float(b)) => compare_f64(*a, *b),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Map(a), Value::Map(b)) => a.iter().cmp(b.iter()),
        (Value::Array(a), Value::Array(b)) => a.iter().cmp(b.iter()),
        _ => a.kind().cmp(&b.kind()),
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for Value {}

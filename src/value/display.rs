// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use core::fmt;

use super::Value;

/// Debug text form of a value.
///
/// Arrays separate elements with `", "` while maps separate entries with a bare
/// `","`. Map keys are always quoted: string keys by their contents, any other
/// key by its own rendered text.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(n) => write!(f, "{n:.6}"),
            Value::String(s) => write_quoted(f, s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
            Value::Map(fields) => {
                f.write_str("{")?;
                for (idx, (k, v)) in fields.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    match k {
                        Value::String(s) => write_quoted(f, s)?,
                        _ => write_quoted(f, &k.to_string())?,
                    }
                    f.write_str(":")?;
                    fmt::Display::fmt(v, f)?;
                }
                f.write_str("}")
            }
        }
    }
}

// Quotes and escapes like a JSON string literal.
fn write_quoted(f: &mut fmt::Formatter, s: &str) -> fmt::Result {
    match serde_json::to_string(s) {
        Ok(quoted) => f.write_str(&quoted),
        Err(_e) => Err(fmt::Error),
    }
}

//! Bindable parameter values.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::fmt::Write;
use uuid::Uuid;

/// A value bound as a query parameter.
///
/// `Null` is a real SQL `NULL` and is bound like any other value; it is not
/// the same thing as a missing value (see [`crate::Statement::new`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    /// Unsigned integers wider than `i32` (`u64`, `usize`). Range-checked
    /// against the column type when bound.
    UInt(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Json(serde_json::Value),
    Uuid(Uuid),
    Timestamp(DateTime<Utc>),
    Date(NaiveDate),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Append the diagnostic literal form: strings quoted, numbers bare,
    /// `null` for `Null`. No escaping is performed.
    pub(crate) fn write_debug(&self, out: &mut String) {
        match self {
            Value::Null => out.push_str("null"),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Int(n) => {
                let _ = write!(out, "{n}");
            }
            Value::UInt(n) => {
                let _ = write!(out, "{n}");
            }
            Value::Float(n) => {
                let _ = write!(out, "{n}");
            }
            Value::Bytes(bytes) => {
                out.push_str("'\\x");
                for b in bytes {
                    let _ = write!(out, "{b:02x}");
                }
                out.push('\'');
            }
            other => {
                out.push('\'');
                other.write_inline(out);
                out.push('\'');
            }
        }
    }

    /// Append the bare text form used by unsafe inlining: no quotes,
    /// and `Null` contributes nothing.
    pub(crate) fn write_inline(&self, out: &mut String) {
        match self {
            Value::Null => {}
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Int(n) => {
                let _ = write!(out, "{n}");
            }
            Value::UInt(n) => {
                let _ = write!(out, "{n}");
            }
            Value::Float(n) => {
                let _ = write!(out, "{n}");
            }
            Value::Text(s) => out.push_str(s),
            Value::Bytes(bytes) => {
                out.push_str("\\x");
                for b in bytes {
                    let _ = write!(out, "{b:02x}");
                }
            }
            Value::Json(v) => {
                let _ = write!(out, "{v}");
            }
            Value::Uuid(v) => {
                let _ = write!(out, "{v}");
            }
            Value::Timestamp(v) => out.push_str(&v.to_rfc3339()),
            Value::Date(v) => {
                let _ = write!(out, "{v}");
            }
        }
    }

    pub(crate) fn inline_text(&self) -> String {
        let mut out = String::new();
        self.write_inline(&mut out);
        out
    }
}

macro_rules! impl_from_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::UInt(v)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        // usize is at most 64 bits on every supported target.
        Value::UInt(v as u64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Timestamp(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

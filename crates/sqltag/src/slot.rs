//! The value positions of a statement.

use crate::statement::Statement;
use crate::value::Value;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// What sits between two literal fragments of a [`Statement`].
///
/// Only [`Slot::Bind`] becomes a bound parameter. The other variants are
/// spliced into the text when the statement is rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// A parameter: rendered as a placeholder, pushed onto the value list.
    Bind(Value),
    /// Raw text spliced verbatim. Never escaped; see [`unsafe_raw`].
    Unsafe(String),
    /// An identifier quoted for the target dialect; see [`quote_ident`].
    Ident(String),
    /// A statement rendered in place, contributing its own values.
    Nested(Statement),
}

impl Slot {
    /// Number of bound values this slot contributes when rendered.
    pub fn placeholder_count(&self) -> usize {
        match self {
            Slot::Bind(_) => 1,
            Slot::Unsafe(_) | Slot::Ident(_) => 0,
            Slot::Nested(stmt) => stmt.placeholder_count(),
        }
    }

    /// `true` when the slot renders to whitespace only.
    pub fn is_blank(&self) -> bool {
        match self {
            Slot::Bind(_) | Slot::Ident(_) => false,
            Slot::Unsafe(raw) => raw.trim().is_empty(),
            Slot::Nested(stmt) => stmt.is_blank(),
        }
    }

    pub fn is_statement(&self) -> bool {
        matches!(self, Slot::Nested(_))
    }
}

/// Splice `text` into the statement verbatim, bypassing parameter binding.
///
/// **This reintroduces SQL injection risk.** Only pass text that is not
/// controlled by users, such as a table name chosen from a fixed set.
///
/// ```ignore
/// use sqltag::{sql, unsafe_raw};
///
/// let table = "users";
/// let q = sql!("SELECT * FROM {} LIMIT {}", unsafe_raw(table), 10);
/// assert_eq!(q.text(), "SELECT * FROM users LIMIT $1");
/// ```
pub fn unsafe_raw(text: impl Into<String>) -> Slot {
    Slot::Unsafe(text.into())
}

/// Splice `name` as an identifier quoted for the target dialect.
///
/// Embedded quote characters are doubled, so any input is safe.
///
/// ```ignore
/// use sqltag::{sql, quote_ident};
///
/// let q = sql!("DROP TABLE {}", quote_ident("my table"));
/// assert_eq!(q.text(), r#"DROP TABLE "my table""#);
/// assert_eq!(q.sql(), "DROP TABLE `my table`");
/// ```
pub fn quote_ident(name: impl Into<String>) -> Slot {
    Slot::Ident(name.into())
}

macro_rules! impl_slot_from_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Slot {
                fn from(v: $t) -> Self {
                    Slot::Bind(Value::from(v))
                }
            }
        )*
    };
}

impl_slot_from_value!(
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    usize,
    bool,
    f32,
    f64,
    &str,
    String,
    &String,
    Vec<u8>,
    &[u8],
    serde_json::Value,
    Uuid,
    DateTime<Utc>,
    NaiveDate,
);

impl<T: Into<Value>> From<Option<T>> for Slot {
    fn from(v: Option<T>) -> Self {
        Slot::Bind(Value::from(v))
    }
}

impl From<Value> for Slot {
    fn from(v: Value) -> Self {
        Slot::Bind(v)
    }
}

impl From<Statement> for Slot {
    fn from(stmt: Statement) -> Self {
        Slot::Nested(stmt)
    }
}

impl From<&Statement> for Slot {
    fn from(stmt: &Statement) -> Self {
        Slot::Nested(stmt.clone())
    }
}

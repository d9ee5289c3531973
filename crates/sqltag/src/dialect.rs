//! Placeholder syntax and identifier quoting per target database.
//!
//! Every dialect shares one renderer; a [`Dialect`] only decides two things:
//!
//! - the bound-parameter token for a 1-based position (`$1`, `?`, `:1`)
//! - the character used to quote identifiers (`"` or `` ` ``)

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A target SQL engine's placeholder and identifier-quoting convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `$1, $2, ...` placeholders, `"ident"` quoting.
    #[default]
    Postgres,
    /// `?` placeholders, `` `ident` `` quoting.
    MySql,
    /// `:1, :2, ...` placeholders, `"ident"` quoting.
    Oracle,
    /// `?` placeholders, `"ident"` quoting (SQLite and most ODBC-style drivers).
    Generic,
}

impl Dialect {
    /// Render the placeholder for the given 1-based position.
    ///
    /// Positional-only dialects return a borrowed `?` without allocating.
    #[inline]
    pub fn placeholder(&self, index: usize) -> Cow<'static, str> {
        match self {
            Dialect::Postgres => Cow::Owned(format!("${index}")),
            Dialect::Oracle => Cow::Owned(format!(":{index}")),
            Dialect::MySql | Dialect::Generic => Cow::Borrowed("?"),
        }
    }

    /// The identifier quote character.
    #[inline]
    pub fn quote_char(&self) -> char {
        match self {
            Dialect::MySql => '`',
            Dialect::Postgres | Dialect::Oracle | Dialect::Generic => '"',
        }
    }

    /// Short lowercase name, used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::MySql => "mysql",
            Dialect::Oracle => "oracle",
            Dialect::Generic => "generic",
        }
    }

    pub(crate) fn write_quoted(&self, name: &str, out: &mut String) {
        let quote = self.quote_char();
        out.push(quote);
        for ch in name.chars() {
            if ch == quote {
                out.push(quote);
                out.push(quote);
            } else {
                out.push(ch);
            }
        }
        out.push(quote);
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Quote an identifier for `dialect`, doubling embedded quote characters.
///
/// Only the dialect's own quote character is escaped: a backtick inside a
/// postgres identifier is left alone, and vice versa.
///
/// ```ignore
/// use sqltag::{Dialect, quote_identifier};
///
/// assert_eq!(quote_identifier(r#"a"b"#, Dialect::Postgres), r#""a""b""#);
/// assert_eq!(quote_identifier("a`b", Dialect::MySql), "`a``b`");
/// ```
pub fn quote_identifier(name: &str, dialect: Dialect) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    dialect.write_quoted(name, &mut out);
    out
}

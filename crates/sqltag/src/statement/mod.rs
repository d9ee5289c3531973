//! The statement builder.
//!
//! A [`Statement`] is an ordered list of literal fragments interleaved with
//! [`Slot`]s. There is always exactly one more fragment than there are slots:
//! `fragments[0]` precedes the first slot, `fragments[i]` sits between
//! `slots[i - 1]` and `slots[i]`, and the last fragment follows every slot.
//!
//! # Example
//!
//! ```ignore
//! use sqltag::sql;
//!
//! let name = "Team 5";
//! let mut q = sql!("UPDATE teams SET name = {name} ");
//! q.append(sql!("WHERE id = {}", 7));
//!
//! assert_eq!(q.text(), "UPDATE teams SET name = $1 WHERE id = $2");
//! assert_eq!(q.sql(), "UPDATE teams SET name = ? WHERE id = ?");
//! ```

mod template;


use crate::combinators;
use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use crate::render::{self, RenderOptions, Rendered};
use crate::slot::Slot;
use crate::value::Value;
use std::fmt;

/// Options for [`Statement::append_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppendOptions {
    /// Inline the appended statement's values as raw text instead of binding
    /// them. **Reintroduces SQL injection risk**; only for trusted input.
    pub unsafe_inline: bool,
}

impl AppendOptions {
    /// Options that inline values instead of binding them.
    pub fn inline() -> Self {
        Self {
            unsafe_inline: true,
        }
    }
}

/// A parameter-safe SQL statement under construction.
///
/// Build one with [`sql!`](crate::sql), combine with [`append`](Self::append),
/// [`glue`](crate::glue) or by nesting, then read the rendered text and values
/// through an accessor such as [`text`](Self::text) or
/// [`render`](Self::render).
#[must_use]
#[derive(Clone, PartialEq)]
pub struct Statement {
    fragments: Vec<String>,
    slots: Vec<Slot>,
}

impl Statement {
    /// Build a statement from literal fragments and the slots between them.
    ///
    /// Fails with [`SqlError::InvalidValue`] unless there is exactly one more
    /// fragment than there are slots; a hole without a value would render to
    /// SQL nobody intended.
    pub fn new<I, S>(fragments: I, slots: impl IntoIterator<Item = Slot>) -> SqlResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fragments: Vec<String> = fragments.into_iter().map(Into::into).collect();
        let slots: Vec<Slot> = slots.into_iter().collect();

        if fragments.len() != slots.len() + 1 {
            return Err(SqlError::invalid_value(format!(
                "statement has {} holes but {} values",
                fragments.len().saturating_sub(1),
                slots.len()
            )));
        }

        Ok(Self { fragments, slots })
    }

    /// Build a statement from a runtime template where each `{}` is a hole.
    ///
    /// `{{` and `}}` are literal braces. Fails with [`SqlError::Template`] on a
    /// stray brace and [`SqlError::InvalidValue`] when holes and values differ
    /// in number.
    pub fn from_template(template: &str, slots: impl IntoIterator<Item = Slot>) -> SqlResult<Self> {
        Self::new(template::split(template)?, slots)
    }

    /// A statement with literal text and no values.
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            fragments: vec![text.into()],
            slots: Vec::new(),
        }
    }

    /// An empty statement.
    pub fn empty() -> Self {
        Self::raw(String::new())
    }

    #[doc(hidden)]
    pub fn __from_macro(fragments: &[&str], slots: Vec<Slot>) -> Self {
        debug_assert_eq!(fragments.len(), slots.len() + 1);
        Self {
            fragments: fragments.iter().map(|s| (*s).to_string()).collect(),
            slots,
        }
    }

    pub(crate) fn from_parts_unchecked(fragments: Vec<String>, slots: Vec<Slot>) -> Self {
        debug_assert_eq!(fragments.len(), slots.len() + 1);
        Self { fragments, slots }
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<Slot>) {
        (self.fragments, self.slots)
    }

    /// Literal text fragments (always `slots().len() + 1` of them).
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Value slots between the fragments.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// `true` when the statement renders to whitespace only, in any dialect.
    ///
    /// Nested statements and raw text count when they are blank themselves;
    /// a bound value or an identifier never is.
    pub fn is_blank(&self) -> bool {
        self.fragments.iter().all(|f| f.trim().is_empty()) && self.slots.iter().all(Slot::is_blank)
    }

    /// Number of bound values this statement renders, counting nested ones.
    pub fn placeholder_count(&self) -> usize {
        self.slots.iter().map(Slot::placeholder_count).sum()
    }

    /// Bound values in placeholder order, flattened through nested statements.
    pub fn values(&self) -> Vec<Value> {
        let mut out = Vec::with_capacity(self.placeholder_count());
        self.collect_values(&mut out);
        out
    }

    fn collect_values(&self, out: &mut Vec<Value>) {
        for slot in &self.slots {
            match slot {
                Slot::Bind(v) => out.push(v.clone()),
                Slot::Nested(inner) => inner.collect_values(out),
                Slot::Unsafe(_) | Slot::Ident(_) => {}
            }
        }
    }

    // ==================== Append ====================

    /// Append another statement onto this one, keeping every value bound.
    ///
    /// The last fragment of `self` and the first fragment of `other` are
    /// joined directly, so include whatever whitespace you need. Passing
    /// `None` is a no-op.
    pub fn append(&mut self, other: impl Into<Option<Statement>>) -> &mut Self {
        self.append_with(other, AppendOptions::default())
    }

    /// Consuming counterpart of [`append`](Self::append), convenient for
    /// chaining on temporaries.
    pub fn appended(mut self, other: impl Into<Option<Statement>>) -> Self {
        self.append(other);
        self
    }

    /// Append with explicit [`AppendOptions`].
    ///
    /// With `unsafe_inline`, the values of `other` are spliced in as raw text
    /// and never reach the bound value list. Identifiers wrapped with
    /// [`quote_ident`](crate::quote_ident) are still quoted at render time.
    pub fn append_with(
        &mut self,
        other: impl Into<Option<Statement>>,
        options: AppendOptions,
    ) -> &mut Self {
        let Some(other) = other.into() else {
            return self;
        };

        let other = if options.unsafe_inline {
            other.into_inline()
        } else {
            other
        };
        self.merge(other);
        self
    }

    /// Append a dynamically produced slot, which must hold a statement.
    ///
    /// Fails with [`SqlError::Misuse`] for any other kind of slot.
    pub fn try_append(&mut self, slot: Slot, options: AppendOptions) -> SqlResult<&mut Self> {
        match slot {
            Slot::Nested(other) => Ok(self.append_with(other, options)),
            _ => Err(SqlError::misuse("append accepts only a tagged statement")),
        }
    }

    fn merge(&mut self, other: Statement) {
        let mut rest = other.fragments.into_iter();
        if let Some(first) = rest.next() {
            match self.fragments.last_mut() {
                Some(last) => last.push_str(&first),
                None => self.fragments.push(first),
            }
        }
        self.fragments.extend(rest);
        self.slots.extend(other.slots);
    }

    /// Replace every bound value with its raw text, recursively.
    fn into_inline(self) -> Statement {
        let slots = self
            .slots
            .into_iter()
            .map(|slot| match slot {
                Slot::Bind(v) => Slot::Unsafe(v.inline_text()),
                Slot::Nested(inner) => Slot::Nested(inner.into_inline()),
                other => other,
            })
            .collect();
        Statement {
            fragments: self.fragments,
            slots,
        }
    }

    /// Join `pieces` with `separator`; see [`glue`](crate::glue).
    pub fn glue<I>(pieces: I, separator: &str) -> Statement
    where
        I: IntoIterator<Item = Statement>,
    {
        combinators::glue(pieces, separator)
    }

    // ==================== Rendering ====================

    /// Render for `dialect` with default options.
    pub fn render(&self, dialect: Dialect) -> Rendered {
        self.render_with(&RenderOptions::new(dialect))
    }

    /// Render with explicit [`RenderOptions`].
    pub fn render_with(&self, options: &RenderOptions) -> Rendered {
        render::render(self, options)
    }

    /// Postgres rendering (`$1, $2, ...`).
    pub fn postgres(&self) -> Rendered {
        self.render(Dialect::Postgres)
    }

    /// MySQL rendering (`?`).
    pub fn mysql(&self) -> Rendered {
        self.render(Dialect::MySql)
    }

    /// Oracle rendering (`:1, :2, ...`).
    pub fn oracle(&self) -> Rendered {
        self.render(Dialect::Oracle)
    }

    /// Postgres query text.
    pub fn text(&self) -> String {
        self.postgres().into_parts().0
    }

    /// MySQL query text.
    pub fn sql(&self) -> String {
        self.mysql().into_parts().0
    }

    /// Text with every value inlined as a literal, for logs only.
    ///
    /// Values are not escaped: never send this to a database.
    pub fn debug(&self) -> String {
        self.debug_for(Dialect::Postgres)
    }

    /// Like [`debug`](Self::debug) with identifiers quoted for `dialect`.
    pub fn debug_for(&self, dialect: Dialect) -> String {
        render::render_debug(self, dialect)
    }
}

impl Default for Statement {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SQL << {} >>", self.debug())
    }
}

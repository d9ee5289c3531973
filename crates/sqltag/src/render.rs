//! Flattening a statement tree into dialect text plus an ordered value list.
//!
//! There is exactly one renderer. It walks the fragments and slots left to
//! right, recursing into nested statements with a single shared position
//! counter, so placeholder numbers stay contiguous and strictly increasing no
//! matter how deep the nesting goes. Debug rendering reuses the same walk and
//! only differs in what it emits for a bound value.

use crate::dialect::Dialect;
use crate::slot::Slot;
use crate::statement::Statement;
use crate::value::Value;
use serde::Serialize;
use std::fmt;

/// How the outermost rendered text is post-processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Whitespace {
    /// Trim every line, drop blank lines, join the rest with `\n`.
    ///
    /// Runs of spaces inside a line are kept as written.
    #[default]
    Normalize,
    /// Leave the text exactly as assembled.
    Preserve,
}

/// Options for [`Statement::render_with`].
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Target dialect (placeholder syntax and identifier quoting).
    pub dialect: Dialect,
    /// Number of placeholders already used before this statement.
    ///
    /// The first placeholder rendered is `offset + 1`.
    pub offset: usize,
    /// Whitespace policy applied to the final text.
    pub whitespace: Whitespace,
}

impl RenderOptions {
    /// Options for `dialect` with defaults otherwise.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    /// Start numbering after `offset` existing placeholders.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Override the whitespace policy.
    pub fn whitespace(mut self, whitespace: Whitespace) -> Self {
        self.whitespace = whitespace;
        self
    }

    /// Keep the assembled text verbatim.
    pub fn preserve_whitespace(self) -> Self {
        self.whitespace(Whitespace::Preserve)
    }
}

/// A rendered statement: the text to send to a driver and its bound values.
///
/// Unlike [`Statement`], this is frozen; it is the hand-off format for a
/// driver's parameterized query API (`query(text, values)`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rendered {
    text: String,
    values: Vec<Value>,
}

impl Rendered {
    /// The query text with dialect placeholders.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bound values in placeholder order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of bound values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.text, self.values)
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Bound values become placeholders and are collected.
    Bind,
    /// Bound values are inlined as literals; nothing is collected.
    Debug,
}

struct Renderer {
    dialect: Dialect,
    mode: Mode,
    position: usize,
    text: String,
    values: Vec<Value>,
}

impl Renderer {
    fn new(dialect: Dialect, mode: Mode, offset: usize) -> Self {
        Self {
            dialect,
            mode,
            position: offset,
            text: String::new(),
            values: Vec::new(),
        }
    }

    fn walk(&mut self, stmt: &Statement) {
        let fragments = stmt.fragments();
        if let Some(first) = fragments.first() {
            self.text.push_str(first);
        }

        for (slot, fragment) in stmt.slots().iter().zip(fragments.iter().skip(1)) {
            match slot {
                Slot::Bind(value) => match self.mode {
                    Mode::Bind => {
                        self.position += 1;
                        self.text.push_str(&self.dialect.placeholder(self.position));
                        self.values.push(value.clone());
                    }
                    Mode::Debug => value.write_debug(&mut self.text),
                },
                Slot::Unsafe(raw) => self.text.push_str(raw),
                Slot::Ident(name) => self.dialect.write_quoted(name, &mut self.text),
                Slot::Nested(inner) => self.walk(inner),
            }
            self.text.push_str(fragment);
        }
    }
}

pub(crate) fn render(stmt: &Statement, options: &RenderOptions) -> Rendered {
    let mut renderer = Renderer::new(options.dialect, Mode::Bind, options.offset);
    renderer.walk(stmt);
    Rendered {
        text: finish(renderer.text, options.whitespace),
        values: renderer.values,
    }
}

pub(crate) fn render_debug(stmt: &Statement, dialect: Dialect) -> String {
    let mut renderer = Renderer::new(dialect, Mode::Debug, 0);
    renderer.walk(stmt);
    finish(renderer.text, Whitespace::Normalize)
}

fn finish(text: String, whitespace: Whitespace) -> String {
    match whitespace {
        Whitespace::Normalize => normalize_whitespace(&text),
        Whitespace::Preserve => text,
    }
}

/// Trim each line, drop blank lines, and join what is left with `\n`.
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(line);
    }
    out
}

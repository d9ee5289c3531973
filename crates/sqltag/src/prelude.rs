//! Convenient glob import: `use sqltag::prelude::*;`

pub use crate::{
    AppendOptions, Dialect, RenderOptions, Rendered, Slot, SqlError, SqlResult, Statement, Value,
    Whitespace, glue, map, quote_ident, quote_identifier, sql, unsafe_raw,
};

#[cfg(feature = "tracing")]
pub use crate::SqlLogger;

#[cfg(all(feature = "tracing", feature = "postgres"))]
pub use crate::LoggedClient;

//! # sqltag
//!
//! Composable, injection-safe SQL statements.
//!
//! ## Features
//!
//! - **Template first**: `sql!("... {} ...", value)` keeps values out of the SQL text
//! - **Composable**: `append`, `glue`, `map` and nesting never break placeholder numbering
//! - **Multi-dialect**: one statement renders to `$1` (Postgres), `?` (MySQL) or `:1` (Oracle)
//! - **Explicit escape hatches**: `unsafe_raw` and `quote_ident` for text that cannot be bound
//! - **Driver hand-off**: `tokio-postgres` binding and execution helpers (feature `postgres`)
//!
//! ```ignore
//! use sqltag::{glue, sql};
//!
//! let team_id = 7;
//! let mut q = sql!("UPDATE teams SET ");
//! q.append(glue([sql!("name = {}", "Team 5"), sql!("description = {}", "d")], " , "));
//! q.append(sql!("WHERE id = {team_id}"));
//!
//! assert_eq!(q.text(), "UPDATE teams SET name = $1 , description = $2 WHERE id = $3");
//! assert_eq!(q.sql(), "UPDATE teams SET name = ? , description = ? WHERE id = ?");
//! assert_eq!(q.values().len(), 3);
//! ```

extern crate self as sqltag;

pub mod combinators;
pub mod dialect;
pub mod error;
pub mod prelude;
pub mod render;
pub mod slot;
pub mod statement;
pub mod value;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "tracing")]
pub mod log;

pub use combinators::{glue, map};
pub use dialect::{Dialect, quote_identifier};
pub use error::{SqlError, SqlResult};
pub use render::{RenderOptions, Rendered, Whitespace, normalize_whitespace};
pub use slot::{Slot, quote_ident, unsafe_raw};
pub use statement::{AppendOptions, Statement};
pub use value::Value;

pub use sqltag_macros::sql;

#[cfg(feature = "tracing")]
pub use log::SqlLogger;

#[cfg(all(feature = "tracing", feature = "postgres"))]
pub use log::LoggedClient;

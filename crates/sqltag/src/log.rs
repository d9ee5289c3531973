use crate::dialect::Dialect;
use crate::render::{RenderOptions, Rendered};
use crate::statement::Statement;
use tracing::Level;

#[cfg(feature = "postgres")]
use crate::error::SqlResult;
#[cfg(feature = "postgres")]
use tokio_postgres::{GenericClient, Row};

/// A `tracing`-based logger for rendered statements.
///
/// Emits one event per statement at target `sqltag.sql` with the dialect, the
/// bound parameter count and the rendered SQL. With
/// [`inline_values`](Self::inline_values) it also emits the debug form with
/// values inlined; keep that off wherever values may be sensitive.
///
/// Enable via the crate feature: `sqltag = { features = ["tracing"] }`.
#[derive(Debug, Clone)]
pub struct SqlLogger {
    /// Tracing event level to emit at.
    pub level: Level,
    /// Truncate long SQL strings (in bytes, on a char boundary). `None` means no truncation.
    pub max_sql_length: Option<usize>,
    /// Also emit the statement with values inlined.
    pub inline_values: bool,
}

impl Default for SqlLogger {
    fn default() -> Self {
        Self {
            level: Level::DEBUG,
            max_sql_length: Some(200),
            inline_values: false,
        }
    }
}

impl SqlLogger {
    /// Create a new logger with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the tracing event level.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set maximum SQL length to display.
    pub fn max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }

    /// Include the debug form with values inlined.
    pub fn inline_values(mut self, yes: bool) -> Self {
        self.inline_values = yes;
        self
    }

    /// Render `stmt` for `dialect` and log it.
    pub fn log(&self, stmt: &Statement, dialect: Dialect) {
        self.log_with(stmt, &RenderOptions::new(dialect));
    }

    /// Render `stmt` with `options` and log it.
    pub fn log_with(&self, stmt: &Statement, options: &RenderOptions) {
        let rendered = stmt.render_with(options);
        let sql = self.truncate_sql(rendered.text());
        let debug_sql = self
            .inline_values
            .then(|| self.truncate_sql(&stmt.debug_for(options.dialect)));
        self.emit(options.dialect, rendered.len(), &sql, debug_sql.as_deref());
    }

    /// Log an already rendered statement. Values are never inlined here.
    pub fn log_rendered(&self, rendered: &Rendered, dialect: Dialect) {
        let sql = self.truncate_sql(rendered.text());
        self.emit(dialect, rendered.len(), &sql, None);
    }

    pub(crate) fn truncate_sql(&self, sql: &str) -> String {
        match self.max_sql_length {
            Some(max) if sql.len() > max => format!("{}...", truncate_bytes(sql, max)),
            _ => sql.to_string(),
        }
    }

    fn emit(&self, dialect: Dialect, param_count: usize, sql: &str, debug_sql: Option<&str>) {
        /// Dispatch a tracing event at a runtime-determined level.
        macro_rules! emit_at_level {
            ($level:expr, $($field:tt)*) => {
                match $level {
                    Level::ERROR => tracing::error!($($field)*),
                    Level::WARN  => tracing::warn!($($field)*),
                    Level::INFO  => tracing::info!($($field)*),
                    Level::DEBUG => tracing::debug!($($field)*),
                    Level::TRACE => tracing::trace!($($field)*),
                }
            };
        }

        let dialect = dialect.name();
        match debug_sql {
            Some(debug_sql) => emit_at_level!(
                self.level,
                target: "sqltag.sql",
                dialect,
                param_count,
                sql = %sql,
                debug_sql = %debug_sql,
            ),
            None => emit_at_level!(
                self.level,
                target: "sqltag.sql",
                dialect,
                param_count,
                sql = %sql,
            ),
        }
    }
}

/// A `tokio-postgres` client that logs every statement it executes.
///
/// ```ignore
/// let client = LoggedClient::new(client).with_logger(SqlLogger::new().level(Level::INFO));
/// let rows = client.fetch_all(&sql!("SELECT * FROM users WHERE id = {}", 7)).await?;
/// ```
#[cfg(feature = "postgres")]
pub struct LoggedClient<C> {
    client: C,
    logger: SqlLogger,
}

#[cfg(feature = "postgres")]
impl<C: GenericClient> LoggedClient<C> {
    /// Wrap `client` with the default logger.
    pub fn new(client: C) -> Self {
        Self {
            client,
            logger: SqlLogger::default(),
        }
    }

    /// Replace the logger.
    pub fn with_logger(mut self, logger: SqlLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn logger(&self) -> &SqlLogger {
        &self.logger
    }

    pub fn inner(&self) -> &C {
        &self.client
    }

    pub fn into_inner(self) -> C {
        self.client
    }

    /// Log, then [`Statement::fetch_all`].
    pub async fn fetch_all(&self, stmt: &Statement) -> SqlResult<Vec<Row>> {
        self.logger.log(stmt, Dialect::Postgres);
        stmt.fetch_all(&self.client).await
    }

    /// Log, then [`Statement::fetch_one`].
    pub async fn fetch_one(&self, stmt: &Statement) -> SqlResult<Row> {
        self.logger.log(stmt, Dialect::Postgres);
        stmt.fetch_one(&self.client).await
    }

    /// Log, then [`Statement::fetch_opt`].
    pub async fn fetch_opt(&self, stmt: &Statement) -> SqlResult<Option<Row>> {
        self.logger.log(stmt, Dialect::Postgres);
        stmt.fetch_opt(&self.client).await
    }

    /// Log, then [`Statement::execute`].
    pub async fn execute(&self, stmt: &Statement) -> SqlResult<u64> {
        self.logger.log(stmt, Dialect::Postgres);
        stmt.execute(&self.client).await
    }
}

/// Longest prefix of `s` that is at most `max` bytes and ends on a char boundary.
fn truncate_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

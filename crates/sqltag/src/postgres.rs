//! Handing statements to `tokio-postgres`.
//!
//! [`Value`] implements [`ToSql`], so a [`Rendered`] statement can be passed
//! straight to any `tokio_postgres` query method:
//!
//! ```ignore
//! let rendered = sql!("SELECT * FROM users WHERE id = {}", 7).postgres();
//! let rows = client.query(rendered.text(), &rendered.params_ref()).await?;
//! ```
//!
//! or executed through the helpers on [`Statement`]. With the `tracing`
//! feature, wrap the client in a `LoggedClient` to log each statement.

use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use crate::render::Rendered;
use crate::statement::Statement;
use crate::value::Value;
use bytes::BytesMut;
use std::error::Error;
use tokio_postgres::types::{IsNull, ToSql, Type};
use tokio_postgres::{GenericClient, Row};

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(v) => v.to_sql_checked(ty, out),
            // Integers are stored as i64; narrow to the declared column width.
            Value::Int(v) => match *ty {
                Type::INT2 => i16::try_from(*v)?.to_sql_checked(ty, out),
                Type::INT4 => i32::try_from(*v)?.to_sql_checked(ty, out),
                Type::OID => u32::try_from(*v)?.to_sql_checked(ty, out),
                Type::FLOAT8 => (*v as f64).to_sql_checked(ty, out),
                _ => v.to_sql_checked(ty, out),
            },
            Value::UInt(v) => match *ty {
                Type::INT2 => i16::try_from(*v)?.to_sql_checked(ty, out),
                Type::INT4 => i32::try_from(*v)?.to_sql_checked(ty, out),
                Type::OID => u32::try_from(*v)?.to_sql_checked(ty, out),
                Type::FLOAT8 => (*v as f64).to_sql_checked(ty, out),
                _ => i64::try_from(*v)?.to_sql_checked(ty, out),
            },
            Value::Float(v) => match *ty {
                Type::FLOAT4 => (*v as f32).to_sql_checked(ty, out),
                _ => v.to_sql_checked(ty, out),
            },
            Value::Text(v) => v.to_sql_checked(ty, out),
            Value::Bytes(v) => v.to_sql_checked(ty, out),
            Value::Json(v) => v.to_sql_checked(ty, out),
            Value::Uuid(v) => v.to_sql_checked(ty, out),
            Value::Timestamp(v) => v.to_sql_checked(ty, out),
            Value::Date(v) => v.to_sql_checked(ty, out),
        }
    }

    // The variant decides; the inner `to_sql_checked` rejects mismatches.
    fn accepts(_ty: &Type) -> bool {
        true
    }

    tokio_postgres::types::to_sql_checked!();
}

impl Rendered {
    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.values()
            .iter()
            .map(|v| v as &(dyn ToSql + Sync))
            .collect()
    }
}

impl Statement {
    fn prepare(&self) -> Rendered {
        self.render(Dialect::Postgres)
    }

    /// Execute and return all rows.
    pub async fn fetch_all(&self, conn: &impl GenericClient) -> SqlResult<Vec<Row>> {
        let rendered = self.prepare();
        Ok(conn.query(rendered.text(), &rendered.params_ref()).await?)
    }

    /// Execute and return exactly one row.
    ///
    /// Returns [`SqlError::NotFound`] when the query yields no rows.
    pub async fn fetch_one(&self, conn: &impl GenericClient) -> SqlResult<Row> {
        self.fetch_opt(conn)
            .await?
            .ok_or_else(|| SqlError::NotFound("query returned no rows".to_string()))
    }

    /// Execute and return at most one row.
    pub async fn fetch_opt(&self, conn: &impl GenericClient) -> SqlResult<Option<Row>> {
        let rendered = self.prepare();
        Ok(conn.query_opt(rendered.text(), &rendered.params_ref()).await?)
    }

    /// Execute and return the affected row count.
    pub async fn execute(&self, conn: &impl GenericClient) -> SqlResult<u64> {
        let rendered = self.prepare();
        Ok(conn.execute(rendered.text(), &rendered.params_ref()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: Value, ty: &Type) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        let mut buf = BytesMut::new();
        value.to_sql_checked(ty, &mut buf)
    }

    #[test]
    fn null_binds_as_null() {
        assert!(matches!(encode(Value::Null, &Type::TEXT), Ok(IsNull::Yes)));
    }

    #[test]
    fn int_narrows_to_column_width() {
        let mut buf = BytesMut::new();
        Value::Int(7).to_sql_checked(&Type::INT4, &mut buf).unwrap();
        assert_eq!(&buf[..], &7i32.to_be_bytes());

        assert!(encode(Value::Int(i64::from(i32::MAX) + 1), &Type::INT4).is_err());
    }

    #[test]
    fn unsigned_is_range_checked() {
        let mut buf = BytesMut::new();
        Value::from(5usize).to_sql_checked(&Type::INT8, &mut buf).unwrap();
        assert_eq!(&buf[..], &5i64.to_be_bytes());

        assert!(encode(Value::UInt(u64::MAX), &Type::INT8).is_err());
    }

    #[test]
    fn mismatched_type_is_rejected() {
        assert!(encode(Value::Text("x".into()), &Type::INT8).is_err());
    }

    #[test]
    fn params_ref_matches_values() {
        let rendered = crate::sql!("a = {} AND b = {}", 1, "x").postgres();
        assert_eq!(rendered.params_ref().len(), 2);
    }
}

//! Round trips against a real PostgreSQL server.
//!
//! Skipped unless `DATABASE_URL` is set (a `.env` file is honoured).

#![cfg(feature = "postgres")]

use sqltag::{SqlError, SqlResult, glue, map, quote_ident, sql};
use tokio_postgres::{Client, NoTls};

async fn try_connect() -> SqlResult<Option<Client>> {
    dotenvy::dotenv().ok();
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(v) => v,
        Err(_) => {
            eprintln!("DATABASE_URL is not set; skipping");
            return Ok(None);
        }
    };

    let (client, connection) = tokio_postgres::connect(&database_url, NoTls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            eprintln!("connection error: {e}");
        }
    });
    Ok(Some(client))
}

#[tokio::test]
async fn bound_values_round_trip() -> SqlResult<()> {
    let Some(client) = try_connect().await? else {
        return Ok(());
    };

    let row = sql!(
        "SELECT {}::int4 AS n, {}::text AS s, {}::bool AS b, {}::text IS NULL AS missing",
        7,
        "it's",
        true,
        None::<String>
    )
    .fetch_one(&client)
    .await?;

    assert_eq!(row.get::<_, i32>("n"), 7);
    assert_eq!(row.get::<_, String>("s"), "it's");
    assert!(row.get::<_, bool>("b"));
    assert!(row.get::<_, bool>("missing"));
    Ok(())
}

#[tokio::test]
async fn composed_statement_executes() -> SqlResult<()> {
    let Some(client) = try_connect().await? else {
        return Ok(());
    };

    let table = format!("sqltag_live_{}", std::process::id());
    client
        .batch_execute(&format!("CREATE TEMP TABLE {table} (id int8, name text)"))
        .await?;

    let rows = [(1i64, "a"), (2, "b"), (3, "c")];
    let mut insert = sql!("INSERT INTO {} (id, name) VALUES ", quote_ident(table.clone()));
    insert.append(map(rows, |(id, name)| sql!("({}, {})", id, name)));
    assert_eq!(insert.execute(&client).await?, 3);

    let mut select = sql!("SELECT name FROM {} WHERE ", quote_ident(table.clone()));
    select.append(glue([sql!("id >= {}", 2), sql!("name <> {}", "z")], " AND "));
    select.append(sql!("ORDER BY id"));
    let names: Vec<String> = select
        .fetch_all(&client)
        .await?
        .iter()
        .map(|row| row.get(0))
        .collect();
    assert_eq!(names, vec!["b", "c"]);

    let none = sql!("SELECT 1 FROM {} WHERE id = {}", quote_ident(table), 42)
        .fetch_one(&client)
        .await;
    assert!(matches!(none, Err(SqlError::NotFound(_))));
    Ok(())
}

//! Connection pool setup and schema bootstrap.
//!
//! Handlers and resolvers share the pool and check a connection out per
//! query, so no request ever holds a session for its whole lifetime.

use crate::error::AppError;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Opens the connection pool and makes sure the schema exists.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    // A `:memory:` database exists per connection, so the pool must stay at
    // a single connection for the data to be visible everywhere.
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    init_schema(&pool).await?;
    Ok(pool)
}

async fn init_schema(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             username TEXT NOT NULL UNIQUE,
             password TEXT NOT NULL
         )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS posts (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             title TEXT NOT NULL,
             content TEXT NOT NULL
         )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

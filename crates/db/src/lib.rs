//! Postgres persistence for tracks, groups and students.
//!
//! Repositories are zero-sized structs with async methods taking `&PgPool`.
//! Multi-statement operations that must not interleave with concurrent
//! requests (registration, moves, track creation) run in a transaction.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Tables the portal reads and writes.
pub const SCHEMA_TABLES: [&str; 3] = ["eixos", "grupos", "alunos"];

/// Whether every portal table exists in the current search path.
///
/// False on a fresh database until `/setup-db` or startup migrations run.
pub async fn schema_ready(pool: &DbPool) -> Result<bool, sqlx::Error> {
    let missing: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM UNNEST($1::TEXT[]) AS t(name) WHERE to_regclass(t.name) IS NULL",
    )
    .bind(SCHEMA_TABLES.to_vec())
    .fetch_one(pool)
    .await?;
    Ok(missing == 0)
}

/// Apply pending migrations. Safe to call repeatedly.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await?;
    tracing::debug!("Schema migrations up to date");
    Ok(())
}

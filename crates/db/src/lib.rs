//! Database access for the frases service: pool construction, startup
//! health check, models and the repository layer.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
///
/// `max_connections` bounds the number of simultaneous connections;
/// acquire waits when the pool is exhausted.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Acquire and immediately release one connection.
///
/// Run once at boot; an unreachable database is fatal and the caller
/// turns the error into a process exit.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    let conn = pool.acquire().await?;
    drop(conn);
    tracing::debug!("database health check passed");
    Ok(())
}

//! Boot sequence, isolated from the request-handling code paths.
//!
//! Every failure before the server is accepting traffic is a
//! [`StartupError`]; `main` translates it into a nonzero process exit.
//! There is no retry and no degraded mode: an unreachable database
//! aborts the boot.

use std::net::SocketAddr;

use crate::config::ServerConfig;
use crate::router::build_app_router;
use crate::state::AppState;

/// A fatal error during the startup phase.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Pool creation or the boot-time health check failed.
    #[error("database unreachable: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(std::io::Error),
}

/// Load config, connect to the database, verify it, bind and serve.
pub async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    tracing::info!(host = %config.host, port = %config.port, "loaded server configuration");

    let pool = frases_db::create_pool(&config.database.url(), config.database.pool_max).await?;
    tracing::info!(
        max_connections = config.database.pool_max,
        "database connection pool created"
    );

    frases_db::health_check(&pool).await?;
    tracing::info!("database health check passed");

    let app = build_app_router(AppState { pool });

    let ip = config
        .host
        .parse()
        .map_err(|e| StartupError::Config(format!("HOST must be a valid IP address: {e}")))?;
    let addr = SocketAddr::new(ip, config.port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    tracing::info!("listening on {addr}");

    axum::serve(listener, app).await.map_err(StartupError::Serve)
}

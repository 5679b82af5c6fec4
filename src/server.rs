//! HTTP server initialization and runtime setup.
//!
//! Selects the storage backend, starts the session sweeper, and runs the
//! Axum server until a shutdown signal arrives.

use crate::api::middleware::session::SessionCookie;
use crate::config::{Config, DatabaseSettings, StorageBackend};
use crate::domain::repositories::Storage;
use crate::infrastructure::persistence::{MemoryStorage, MySqlStorage};
use crate::infrastructure::session::SessionStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens a MySQL pool sized and timed from `config`.
///
/// # Errors
///
/// Returns an error if the database cannot be reached within the acquire
/// timeout.
pub async fn connect_pool(config: &Config, database: &DatabaseSettings) -> Result<MySqlPool> {
    MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect_with(database.connect_options())
        .await
        .with_context(|| format!("Failed to connect to {database}"))
}

/// Builds the storage backend selected by `config.storage_backend`.
///
/// For MySQL the pending migrations are applied before the pool is handed
/// out. The in-memory backend is seeded with the sample catalog.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn build_storage(
    config: &Config,
    sessions: Arc<SessionStore>,
) -> Result<Arc<dyn Storage>> {
    match (config.storage_backend, &config.database) {
        (StorageBackend::MySql, Some(database)) => {
            let pool = connect_pool(config, database).await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to apply migrations")?;
            tracing::info!("Migrations applied");

            Ok(Arc::new(
                MySqlStorage::new(Arc::new(pool)).with_session_store(sessions),
            ))
        }
        (StorageBackend::MySql, None) => {
            anyhow::bail!("MySQL backend selected but no database is configured")
        }
        (StorageBackend::Memory, _) => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            Ok(Arc::new(MemoryStorage::new().with_session_store(sessions)))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Session store and its periodic sweeper
/// - Storage backend (MySQL with migrations, or in-memory)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Storage initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let sessions = Arc::new(SessionStore::new(Duration::from_secs(
        config.session_ttl_seconds,
    )));
    let sweeper = sessions.spawn_sweeper(Duration::from_secs(config.session_sweep_seconds));
    tracing::info!("Session sweeper started");

    let storage = build_storage(&config, sessions).await?;

    let state = AppState::new(
        storage,
        SessionCookie {
            max_age_secs: config.session_ttl_seconds,
            secure: config.cookie_secure,
        },
    );

    let app = app_router(state, config.body_limit_bytes);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    sweeper.abort();
    tracing::info!("Graceful shutdown complete");

    Ok(())
}

/// Waits for SIGINT or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

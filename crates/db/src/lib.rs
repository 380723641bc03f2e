//! Note persistence backed by a single SQLite file.
//!
//! [`Store`] owns the connection pool and the schema bootstrap. Row-level
//! operations live in [`repositories::NoteRepo`] and accept `&DbPool`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Schema applied by [`ensure_schema`]. Every statement is idempotent.
const SCHEMA: &str = include_str!("../schema/notes.sql");

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Options for opening the backing file.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path of the SQLite file. Created if it does not exist.
    pub path: PathBuf,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

/// Fatal startup failures. The store cannot serve requests after any of these.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to open database at {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },

    #[error("Failed to create schema: {0}")]
    Schema(#[source] sqlx::Error),
}

/// Handle to the notes database.
///
/// Cheaply cloneable; clones share the same pool.
#[derive(Debug, Clone)]
pub struct Store {
    pool: DbPool,
}

impl Store {
    /// Open (creating if absent) the backing file and ensure the schema exists.
    ///
    /// Safe to call on every startup.
    pub async fn initialize(config: &StoreConfig) -> Result<Self, StoreError> {
        let pool = create_pool(&config.path, config.max_connections)
            .await
            .map_err(|source| StoreError::Open {
                path: config.path.clone(),
                source,
            })?;
        tracing::info!(path = %config.path.display(), "Database opened");

        ensure_schema(&pool).await.map_err(StoreError::Schema)?;
        tracing::info!("Notes table is ready");

        Ok(Self { pool })
    }

    /// The underlying connection pool.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Close every pooled connection, waiting for in-flight statements.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database closed");
    }
}

/// Create a connection pool for the SQLite file at `path`.
pub async fn create_pool(path: &Path, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Create the notes table (and its index) if absent.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

/// Check that the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

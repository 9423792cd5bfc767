// ABOUTME: SQLite pool construction and storage error taxonomy
// ABOUTME: Shared by the address repository and the HTTP server

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sqlx::error::ErrorKind;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{debug, info};

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Constraint violation: {0}")]
    Constraint(String),
    #[error("Database error: {0}")]
    Sqlx(sqlx::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => {
                    return StorageError::Constraint(db_err.message().to_string());
                }
                _ => {}
            }
        }
        StorageError::Sqlx(err)
    }
}

/// Storage configuration
///
/// The database location is explicit configuration: tests pass
/// `path: None` to get an isolated in-memory database instead of
/// toggling a process-wide flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Database file path; `None` selects an in-memory database.
    pub path: Option<PathBuf>,
    pub max_connections: u32,
    pub busy_timeout_seconds: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: Some(PathBuf::from("addrbook.db")),
            max_connections: 10,
            busy_timeout_seconds: 30,
        }
    }
}

impl StorageConfig {
    /// Configuration for an isolated in-memory database.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            ..Self::default()
        }
    }
}

/// Open a SQLite pool for the given configuration.
///
/// Creates the database file (and parent directory) if missing and
/// applies the connection PRAGMAs. Migrations are run by the caller
/// that owns the schema.
pub async fn connect(config: &StorageConfig) -> StorageResult<SqlitePool> {
    let options = match &config.path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            debug!("Connecting to database: {}", path.display());
            SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
        }
        None => {
            debug!("Connecting to in-memory database");
            SqliteConnectOptions::new().in_memory(true)
        }
    }
    .busy_timeout(Duration::from_secs(config.busy_timeout_seconds))
    .foreign_keys(true);

    // An in-memory database exists per connection, so the pool must
    // not hand out more than one.
    let max_connections = match config.path {
        Some(_) => config.max_connections,
        None => 1,
    };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(options)
        .await
        .map_err(StorageError::from)?;

    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await
        .map_err(StorageError::from)?;

    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&pool)
        .await
        .map_err(StorageError::from)?;

    info!("Database connection established");

    Ok(pool)
}

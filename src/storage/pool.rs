//! Database connection pool management.
//!
//! The export only reads, so the pool opens an existing SQLite file in
//! read-only mode. A missing file is reported instead of silently creating an
//! empty database.

use std::path::Path;
use std::sync::Arc;

use log::{debug, error};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

/// Shared handle to the SQLite pool.
pub type DbPool = Arc<SqlitePool>;

/// Opens a read-only connection pool on an existing database file.
///
/// # Errors
///
/// Returns `DatabaseError::MissingDatabase` if `db_path` does not exist and
/// `DatabaseError::SqlError` if the connection fails.
pub async fn init_read_only_pool(db_path: &Path) -> Result<DbPool, DatabaseError> {
    if !db_path.is_file() {
        error!("Database file not found: {}", db_path.display());
        return Err(DatabaseError::MissingDatabase(db_path.to_path_buf()));
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true);

    // Rows are streamed by a single reader
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {e}");
            DatabaseError::SqlError(e)
        })?;

    debug!("Opened {} read-only", db_path.display());
    Ok(Arc::new(pool))
}

// Shared test helpers for database setup and test data creation.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use std::path::Path;

/// One measurement row of the `networkmonitor` test table.
pub struct TestRow<'a> {
    pub timestamp: i64,
    pub network_type: Option<&'a str>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub connection_test: Option<&'a str>,
    pub signal_dbm: Option<i64>,
}

impl Default for TestRow<'_> {
    fn default() -> Self {
        Self {
            timestamp: 1704067200000,
            network_type: Some("WIFI"),
            latitude: Some(45.5),
            longitude: Some(-73.25),
            connection_test: Some("PASS"),
            signal_dbm: Some(-80),
        }
    }
}

/// Creates a database file with an empty `networkmonitor` table.
pub async fn create_test_db(db_path: &Path) -> SqlitePool {
    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await
    .expect("Failed to create test database");

    sqlx::query(
        "CREATE TABLE networkmonitor (
            _id INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp INTEGER NOT NULL,
            network_type TEXT,
            device_latitude REAL,
            device_longitude REAL,
            google_connection_test TEXT,
            cell_signal_strength_dbm INTEGER
        )",
    )
    .execute(&pool)
    .await
    .expect("Failed to create networkmonitor table");

    pool
}

/// Inserts one row and returns its id.
pub async fn insert_row(pool: &SqlitePool, row: TestRow<'_>) -> i64 {
    sqlx::query(
        "INSERT INTO networkmonitor (
            timestamp, network_type, device_latitude, device_longitude,
            google_connection_test, cell_signal_strength_dbm
        ) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(row.timestamp)
    .bind(row.network_type)
    .bind(row.latitude)
    .bind(row.longitude)
    .bind(row.connection_test)
    .bind(row.signal_dbm)
    .execute(pool)
    .await
    .expect("Failed to insert row")
    .last_insert_rowid()
}

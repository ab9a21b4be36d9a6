//! Turning measurement table rows into KML records.
//!
//! The table layout is not fixed: any column can be the label, and every
//! column that is not a coordinate or the timestamp becomes an attribute.
//! Values are read as text, whatever their SQLite storage class.

use std::sync::OnceLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, QueryBuilder, Row, Sqlite, SqlitePool};

use crate::config::{DEFAULT_LATITUDE_COLUMN, DEFAULT_LONGITUDE_COLUMN, DEFAULT_TIMESTAMP_COLUMN};
use crate::error_handling::DatabaseError;
use crate::kml::Record;

/// Which columns play which role in a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Column whose value is the placemark name
    pub label: String,
    pub latitude: String,
    pub longitude: String,
    pub timestamp: String,
}

impl ColumnMapping {
    /// Mapping with the default coordinate and timestamp columns.
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            latitude: DEFAULT_LATITUDE_COLUMN.to_string(),
            longitude: DEFAULT_LONGITUDE_COLUMN.to_string(),
            timestamp: DEFAULT_TIMESTAMP_COLUMN.to_string(),
        }
    }

    fn names(&self) -> [&str; 4] {
        [
            self.label.as_str(),
            self.latitude.as_str(),
            self.longitude.as_str(),
            self.timestamp.as_str(),
        ]
    }

    fn validate(&self) -> Result<(), DatabaseError> {
        for column in self.names() {
            validate_identifier(column)?;
        }
        Ok(())
    }

    /// Checks that every mapped column, plus any `extra` ones, is one of
    /// `existing`.
    ///
    /// SQLite reads a quoted name that matches no column as a string literal,
    /// so a misspelled column would otherwise go unnoticed.
    pub fn check_exists(
        &self,
        table: &str,
        existing: &[String],
        extra: &[&str],
    ) -> Result<(), DatabaseError> {
        if existing.is_empty() {
            return Err(DatabaseError::UnknownTable(table.to_string()));
        }
        for column in self.names().into_iter().chain(extra.iter().copied()) {
            if !existing.iter().any(|name| name == column) {
                return Err(DatabaseError::UnknownColumn {
                    table: table.to_string(),
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Lists the columns of `table`, in table order.
///
/// Returns an empty list when the table does not exist.
pub async fn table_columns(pool: &SqlitePool, table: &str) -> Result<Vec<String>, DatabaseError> {
    let names = sqlx::query_scalar::<_, String>("SELECT name FROM pragma_table_info(?)")
        .bind(table)
        .fetch_all(pool)
        .await?;
    Ok(names)
}

fn identifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier regex"))
}

/// Checks that a table or column name is a plain SQL identifier.
///
/// Names are interpolated into the query, so anything else is rejected.
pub fn validate_identifier(name: &str) -> Result<(), DatabaseError> {
    if identifier_re().is_match(name) {
        Ok(())
    } else {
        Err(DatabaseError::InvalidIdentifier(name.to_string()))
    }
}

/// Builds the row query, oldest rows first.
///
/// With `since`, only rows whose timestamp is at or after it are selected.
pub fn build_select(
    table: &str,
    mapping: &ColumnMapping,
    since: Option<i64>,
) -> Result<QueryBuilder<'static, Sqlite>, DatabaseError> {
    validate_identifier(table)?;
    mapping.validate()?;

    let mut query_builder = QueryBuilder::new(format!("SELECT * FROM \"{}\"", table));
    if let Some(since) = since {
        query_builder.push(format!(" WHERE \"{}\" >= ", mapping.timestamp));
        query_builder.push_bind(since);
    }
    query_builder.push(format!(" ORDER BY \"{}\" ASC", mapping.timestamp));
    Ok(query_builder)
}

/// Reads every column of a row as optional text, in table order.
///
/// Bytes that are not valid UTF-8 (BLOBs, mis-encoded TEXT) are replaced
/// with U+FFFD instead of failing the row.
pub fn row_columns(row: &SqliteRow) -> Result<Vec<(String, Option<String>)>, sqlx::Error> {
    row.columns()
        .iter()
        .map(|column| {
            // SQLite converts integers and reals to their text form
            let bytes: Option<Vec<u8>> = row.try_get_unchecked(column.ordinal())?;
            let value = bytes.map(|b| String::from_utf8_lossy(&b).into_owned());
            Ok((column.name().to_string(), value))
        })
        .collect()
}

/// Builds a record from a row's columns.
///
/// Returns `None` when the row has no usable coordinates.
pub fn record_from_columns(
    columns: Vec<(String, Option<String>)>,
    mapping: &ColumnMapping,
) -> Option<Record> {
    let mut record = Record::default();
    let mut latitude = None;
    let mut longitude = None;

    for (name, value) in columns {
        let value = value.unwrap_or_default();
        if name == mapping.label {
            record.label = value.clone();
        }
        if name == mapping.latitude {
            latitude = Some(value);
        } else if name == mapping.longitude {
            longitude = Some(value);
        } else if name == mapping.timestamp {
            record.timestamp = format_timestamp(&value);
        } else {
            record.attributes.push(name, value);
        }
    }

    record.latitude = latitude.filter(|v| !v.trim().is_empty())?;
    record.longitude = longitude.filter(|v| !v.trim().is_empty())?;
    Some(record)
}

/// Formats an epoch-milliseconds timestamp as RFC 3339 UTC.
///
/// Anything that is not an integer is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| raw.to_string())
}

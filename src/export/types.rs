//! Export types and options.

use std::path::PathBuf;

use serde::Serialize;

use crate::classify::ClassifierKind;
use crate::config::{
    Opt, DEFAULT_EMPTY_LABEL, DEFAULT_GREEN_THRESHOLD_DBM, DEFAULT_RED_THRESHOLD_DBM,
    DEFAULT_TABLE,
};
use crate::kml::StyleKind;
use crate::storage::ColumnMapping;

/// Options for exporting data (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use kml_export::export::ExportOptions;
/// use std::path::PathBuf;
///
/// let mut opts = ExportOptions::new(PathBuf::from("monitor.db"), "network_type");
/// opts.output = Some(PathBuf::from("monitor.kml"));
/// ```
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Database path
    pub db_path: PathBuf,
    /// Output file path (or stdout if None)
    pub output: Option<PathBuf>,
    /// Table holding the measurement rows
    pub table: String,
    /// Label, coordinate and timestamp columns
    pub columns: ColumnMapping,
    /// Only export rows with a timestamp at or after this value (epoch milliseconds)
    pub since: Option<i64>,
    /// Placemark name for rows whose label column is empty
    pub empty_label: String,
    /// Classification policy
    pub classifier: ClassifierKind,
    /// Column the classifier reads (policy default if None)
    pub classifier_column: Option<String>,
    /// Signal strength (dBm) at or above which a placemark is green
    pub green_threshold: f64,
    /// Signal strength (dBm) at or below which a placemark is red
    pub red_threshold: f64,
}

impl ExportOptions {
    /// Options with defaults for everything but the database and label column.
    pub fn new(db_path: PathBuf, label_column: &str) -> Self {
        Self {
            db_path,
            output: None,
            table: DEFAULT_TABLE.to_string(),
            columns: ColumnMapping::with_label(label_column),
            since: None,
            empty_label: DEFAULT_EMPTY_LABEL.to_string(),
            classifier: ClassifierKind::ConnectionTest,
            classifier_column: None,
            green_threshold: DEFAULT_GREEN_THRESHOLD_DBM,
            red_threshold: DEFAULT_RED_THRESHOLD_DBM,
        }
    }
}

impl From<Opt> for ExportOptions {
    fn from(opt: Opt) -> Self {
        Self {
            db_path: opt.db,
            output: opt.output,
            table: opt.table,
            columns: ColumnMapping {
                label: opt.label_column,
                latitude: opt.latitude_column,
                longitude: opt.longitude_column,
                timestamp: opt.timestamp_column,
            },
            since: opt.since,
            empty_label: opt.empty_label,
            classifier: opt.classifier,
            classifier_column: opt.classifier_column,
            green_threshold: opt.green_threshold,
            red_threshold: opt.red_threshold,
        }
    }
}

/// Summary of a completed export.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ExportReport {
    /// Output file (None when written to stdout)
    pub output: Option<PathBuf>,
    /// Placemarks written
    pub exported: usize,
    /// Rows skipped for lack of coordinates
    pub skipped: usize,
    /// Green placemarks
    pub pass: usize,
    /// Yellow placemarks
    pub slow: usize,
    /// Red placemarks
    pub fail: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl ExportReport {
    pub(crate) fn count(&mut self, style: StyleKind) {
        self.exported += 1;
        match style {
            StyleKind::Pass => self.pass += 1,
            StyleKind::Slow => self.slow += 1,
            StyleKind::Fail => self.fail += 1,
        }
    }
}

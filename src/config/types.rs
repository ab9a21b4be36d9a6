//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use strum::VariantNames;
use strum_macros::{Display, EnumString, VariantNames};
use structopt::StructOpt;

use crate::classify::ClassifierKind;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, Display, EnumString, VariantNames)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, Display, EnumString, VariantNames)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
#[derive(Debug, Clone, StructOpt)]
#[structopt(
    name = "kml_export",
    about = "Exports recorded network measurements as a styled KML document."
)]
pub struct Opt {
    /// SQLite database holding the recorded measurements
    #[structopt(long, parse(from_os_str))]
    pub db: PathBuf,

    /// Output KML file (stdout if omitted)
    #[structopt(short, long, parse(from_os_str))]
    pub output: Option<PathBuf>,

    /// Table to read rows from
    #[structopt(long, default_value = "networkmonitor")]
    pub table: String,

    /// Column whose value becomes each placemark's name
    #[structopt(long)]
    pub label_column: String,

    /// Column holding the latitude
    #[structopt(long, default_value = "device_latitude")]
    pub latitude_column: String,

    /// Column holding the longitude
    #[structopt(long, default_value = "device_longitude")]
    pub longitude_column: String,

    /// Column holding the measurement time
    #[structopt(long, default_value = "timestamp")]
    pub timestamp_column: String,

    /// Only export rows whose timestamp is at or after this value (epoch milliseconds)
    #[structopt(long)]
    pub since: Option<i64>,

    /// Placemark name used when the label column is empty
    #[structopt(long, default_value = "(empty)")]
    pub empty_label: String,

    /// Policy that colors each placemark
    #[structopt(
        long,
        default_value = "connection-test",
        possible_values = ClassifierKind::VARIANTS,
        case_insensitive = true
    )]
    pub classifier: ClassifierKind,

    /// Column the classifier reads (defaults depend on the classifier)
    #[structopt(long)]
    pub classifier_column: Option<String>,

    /// Signal strength (dBm) at or above which a placemark is green
    #[structopt(long, default_value = "-85", allow_hyphen_values = true)]
    pub green_threshold: f64,

    /// Signal strength (dBm) at or below which a placemark is red
    #[structopt(long, default_value = "-105", allow_hyphen_values = true)]
    pub red_threshold: f64,

    /// Log level
    #[structopt(
        long,
        default_value = "info",
        possible_values = LogLevel::VARIANTS,
        case_insensitive = true
    )]
    pub log_level: LogLevel,

    /// Log format
    #[structopt(
        long,
        default_value = "plain",
        possible_values = LogFormat::VARIANTS,
        case_insensitive = true
    )]
    pub log_format: LogFormat,
}

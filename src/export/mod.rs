//! Export functionality for recorded measurements.
//!
//! This module reads rows from the SQLite measurement table and writes them
//! as a KML document, one styled placemark per located row.

mod kml;
mod sink;
mod types;

pub use kml::export_kml;
pub use types::{ExportOptions, ExportReport};

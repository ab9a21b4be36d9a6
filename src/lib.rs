//! kml_export library: KML export of recorded network measurements
//!
//! This library turns rows of a measurement database into a KML document that
//! mapping tools can display. Each located row becomes a placemark whose
//! marker color (green, yellow or red) is chosen by a pluggable classifier.
//!
//! # Example
//!
//! ```no_run
//! use kml_export::export::{export_kml, ExportOptions};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut opts = ExportOptions::new(PathBuf::from("networkmonitor.db"), "network_type");
//! opts.output = Some(PathBuf::from("networkmonitor.kml"));
//!
//! let report = export_kml(&opts).await?;
//! println!("Exported {} placemarks", report.exported);
//! # Ok(())
//! # }
//! ```
//!
//! The document writer itself is synchronous and works on any `Write` sink:
//!
//! ```
//! use kml_export::kml::{select_style, Attributes, KmlWriter, Record, Verdict};
//!
//! let record = Record {
//!     label: "Home".to_string(),
//!     attributes: Attributes::from(vec![("signal", "-80")]),
//!     latitude: "1.0".to_string(),
//!     longitude: "2.0".to_string(),
//!     timestamp: "2024-01-01T00:00:00Z".to_string(),
//! };
//! let classifier = |_: &Attributes| Verdict::Green;
//!
//! let mut writer = KmlWriter::new(Vec::new(), "(empty)");
//! writer.write_header()?;
//! let style = select_style(&record.label, &record.attributes, &classifier);
//! writer.write_placemark(&record, style)?;
//! writer.write_footer()?;
//! let kml = String::from_utf8(writer.into_inner()).unwrap();
//! assert!(kml.contains("<styleUrl>#stylemap_green</styleUrl>"));
//! # Ok::<(), kml_export::ExportError>(())
//! ```

pub mod classify;
pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod kml;
pub mod storage;

// Re-export public API
pub use config::{LogFormat, LogLevel, Opt};
pub use error_handling::{DatabaseError, ExportError, InitializationError};
pub use export::{export_kml, ExportOptions, ExportReport};

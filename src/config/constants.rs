//! Configuration constants.
//!
//! This module defines the fixed KML document constants and the defaults used
//! when reading rows from the measurement database.

// KML document
/// XML declaration written on the first line of every document
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>";
/// Namespace of the root `<kml>` element
pub const KML_NAMESPACE: &str = "http://earth.google.com/kml/2.1";
/// Icon shared by all three styles; only its tint differs.
/// Referenced by URL, never fetched.
pub const ICON_URL: &str = "http://maps.google.com/mapfiles/kml/shapes/placemark_circle.png";
/// Label scale of every style
pub const LABEL_SCALE: &str = "1.0";

/// Name written for records whose label column is empty
pub const DEFAULT_EMPTY_LABEL: &str = "(empty)";

// Database source
/// Table the measurement rows are read from
pub const DEFAULT_TABLE: &str = "networkmonitor";
pub const DEFAULT_LATITUDE_COLUMN: &str = "device_latitude";
pub const DEFAULT_LONGITUDE_COLUMN: &str = "device_longitude";
/// Column holding the measurement time (epoch milliseconds)
pub const DEFAULT_TIMESTAMP_COLUMN: &str = "timestamp";

// Classification
/// Column holding the connection test result (PASS / FAIL / SLOW)
pub const DEFAULT_CONNECTION_TEST_COLUMN: &str = "google_connection_test";
/// Column holding the cell signal strength in dBm
pub const DEFAULT_SIGNAL_STRENGTH_COLUMN: &str = "cell_signal_strength_dbm";
/// Signal strength (dBm) at or above which a record is green
pub const DEFAULT_GREEN_THRESHOLD_DBM: f64 = -85.0;
/// Signal strength (dBm) at or below which a record is red
pub const DEFAULT_RED_THRESHOLD_DBM: f64 = -105.0;

//! KML document assembly.
//!
//! This module provides:
//! - Records and their placemark markup
//! - The fixed style table and its StyleMap/Style blocks
//! - Style selection from a pluggable color classifier
//! - A writer that sequences header, placemarks and footer on a sink

mod escape;
mod placemark;
mod selector;
mod style;
mod writer;

// Re-export public API
pub use escape::{escape_attribute, escape_text};
pub use placemark::{render_placemark, Attributes, Record};
pub use selector::{select_style, ColorClassifier, Verdict};
pub use style::{render_styles, StyleDefinition, StyleKind, STYLE_TABLE};
pub use writer::KmlWriter;

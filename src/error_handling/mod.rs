//! Error handling.
//!
//! This module provides the error types for:
//! - Logger initialization
//! - KML document writing (open, I/O, sequencing)
//! - Reading rows from the measurement database
//!
//! Library functions return these typed errors; the export orchestration
//! wraps them with `anyhow` context.

mod types;

// Re-export public API
pub use types::{DatabaseError, ExportError, InitializationError};

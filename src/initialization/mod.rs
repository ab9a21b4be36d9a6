//! Application initialization.
//!
//! Sets up process-wide resources before an export runs. Today that is only
//! the logger; the database pool is opened per export by the storage module.

mod logger;

// Re-export public API
pub use logger::init_logger_with;

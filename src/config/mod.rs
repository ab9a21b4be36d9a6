//! Application configuration and constants.
//!
//! This module provides:
//! - KML document constants and source defaults
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{LogFormat, LogLevel, Opt};

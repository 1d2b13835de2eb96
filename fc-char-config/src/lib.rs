//! Configuration system for the fc-char glyph finder.
//!
//! This crate provides configuration loading, validation, and default values:
//!
//! - Preview window geometry (padding, label band, borders, refresh cadence)
//! - Fonts used for the window chrome and family labels
//! - Location of the Unicode `NamesList.txt` used for name/annotation lookup

pub mod config;
pub mod defaults;
pub mod error;

// Re-export main types for convenience
pub use config::{Config, MAX_INSET};
pub use error::ConfigError;

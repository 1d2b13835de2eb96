//! Typed error variants for the fc-char-config crate.
//!
//! Loading is the only I/O this crate performs; callers that use `anyhow`
//! get these through the blanket `From<std::error::Error>` conversion and can
//! still `downcast_ref::<ConfigError>()` when they need the variant.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("I/O error reading config {path:?}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file contained invalid YAML or unknown value types.
    #[error("YAML parse error in config {path:?}: {source}")]
    Parse {
        /// Path that was being parsed.
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// A field value failed semantic validation.
    ///
    /// The inner string names the field and the accepted range.
    #[error("Config validation error: {0}")]
    Validation(String),
}

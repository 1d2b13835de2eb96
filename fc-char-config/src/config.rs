//! The `Config` struct and its loading/validation methods.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::defaults;
use crate::error::ConfigError;

/// Upper bound for padding and border widths, in pixels.
pub const MAX_INSET: u32 = 4096;

/// User-tunable settings for the preview window and lookups.
///
/// Every field has a default, so an empty (or missing) YAML file is valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Font family used for the quit button, title line and family labels
    #[serde(default = "defaults::title_font_family")]
    pub title_font_family: String,

    /// Point size of the quit button and title line
    #[serde(default = "defaults::title_font_size")]
    pub title_font_size: f32,

    /// Baseline point size the family label scale is computed from
    #[serde(default = "defaults::label_base_size")]
    pub label_base_size: f32,

    /// Horizontal inset in pixels
    #[serde(default = "defaults::h_padding")]
    pub h_padding: u32,

    /// Vertical inset in pixels
    #[serde(default = "defaults::v_padding")]
    pub v_padding: u32,

    /// Fraction of each cell's height reserved for the family label
    #[serde(default = "defaults::name_band_fraction")]
    pub name_band_fraction: f32,

    /// Border width in pixels for cells and the quit button
    #[serde(default = "defaults::border_width")]
    pub border_width: u32,

    /// Event wait timeout and minimum interval between repaints
    #[serde(default = "defaults::refresh_interval_ms")]
    pub refresh_interval_ms: u64,

    /// Initial window width in logical pixels
    #[serde(default = "defaults::window_width")]
    pub window_width: u32,

    /// Initial window height in logical pixels
    #[serde(default = "defaults::window_height")]
    pub window_height: u32,

    /// Default font cap when `--maxfonts` is not given (0 = unlimited)
    #[serde(default)]
    pub max_fonts: usize,

    /// Include fixed-size fonts without needing `--fixed`
    #[serde(default)]
    pub include_fixed: bool,

    /// Explicit path to a Unicode `NamesList.txt`
    #[serde(default)]
    pub names_list_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title_font_family: defaults::title_font_family(),
            title_font_size: defaults::title_font_size(),
            label_base_size: defaults::label_base_size(),
            h_padding: defaults::h_padding(),
            v_padding: defaults::v_padding(),
            name_band_fraction: defaults::name_band_fraction(),
            border_width: defaults::border_width(),
            refresh_interval_ms: defaults::refresh_interval_ms(),
            window_width: defaults::window_width(),
            window_height: defaults::window_height(),
            max_fonts: 0,
            include_fixed: false,
            names_list_path: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location, or defaults if absent.
    ///
    /// The file is never created; fc-char keeps no state between runs.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("Config path: {:?}", path);

        if !path.exists() {
            log::debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&contents).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty mapping
        let config: Config = if contents.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml_ng::from_str(contents).map_err(|source| ConfigError::Parse {
                path: PathBuf::new(),
                source,
            })?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that the type system cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.name_band_fraction > 0.0 && self.name_band_fraction < 1.0) {
            return Err(ConfigError::Validation(format!(
                "name_band_fraction must be between 0 and 1 (exclusive), got {}",
                self.name_band_fraction
            )));
        }
        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "refresh_interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Validation(format!(
                "window size must be non-zero, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        for (name, size) in [
            ("title_font_size", self.title_font_size),
            ("label_base_size", self.label_base_size),
        ] {
            if !(size.is_finite() && size > 0.0) {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a positive finite size, got {size}"
                )));
            }
        }
        for (name, inset) in [
            ("h_padding", self.h_padding),
            ("v_padding", self.v_padding),
            ("border_width", self.border_width),
        ] {
            if inset > MAX_INSET {
                return Err(ConfigError::Validation(format!(
                    "{name} must be at most {MAX_INSET}, got {inset}"
                )));
            }
        }
        if self.title_font_family.trim().is_empty() {
            return Err(ConfigError::Validation(
                "title_font_family must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Refresh interval as a `Duration`.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    /// Font cap from config, `None` when unlimited.
    pub fn max_fonts(&self) -> Option<usize> {
        (self.max_fonts > 0).then_some(self.max_fonts)
    }

    /// Resolve the `NamesList.txt` to read: the configured path if set,
    /// otherwise the first standard location that exists.
    pub fn resolve_names_list(&self) -> Option<PathBuf> {
        if let Some(path) = &self.names_list_path {
            return Some(path.clone());
        }
        defaults::names_list_candidates()
            .iter()
            .map(PathBuf::from)
            .find(|p| p.is_file())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("fc-char")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("fc-char")
            } else {
                PathBuf::from(".")
            }
        }
    }
}

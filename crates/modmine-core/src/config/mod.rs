//! Configuration management for modmine.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `modmine.toml` file
//! 3. User config `~/.config/modmine/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where module files live.
    pub layout: LayoutConfig,

    /// Extraction strictness.
    pub extraction: ExtractionConfig,

    /// JSON output formatting.
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./modmine.toml` (project local)
    /// 2. `~/.config/modmine/config.toml` (user config)
    /// 3. Falls back to defaults
    ///
    /// Environment overrides apply in every case.
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(LOCAL_CONFIG_FILE).exists() {
            return Self::from_file(LOCAL_CONFIG_FILE);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE);
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from TOML text without environment overrides.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(dir) = std::env::var("MODMINE_TYPES_DIR") {
            self.layout.types_dir = dir;
        }
        if let Ok(dir) = std::env::var("MODMINE_PROVIDERS_DIR") {
            self.layout.providers_dir = dir;
        }
        if let Ok(file) = std::env::var("MODMINE_MANIFEST_FILE") {
            self.layout.manifest_file = file;
        }
        if let Ok(value) = std::env::var("MODMINE_STRICT_ANCHORS") {
            self.extraction.strict_anchors = parse_bool("MODMINE_STRICT_ANCHORS", &value)?;
        }
        if let Ok(value) = std::env::var("MODMINE_PRETTY") {
            self.output.pretty = parse_bool("MODMINE_PRETTY", &value)?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("layout.types_dir", &self.layout.types_dir),
            ("layout.providers_dir", &self.layout.providers_dir),
            ("layout.manifest_file", &self.layout.manifest_file),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", key)));
            }
        }
        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}

/// Module layout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Type directory relative to the module root.
    pub types_dir: String,

    /// Provider directory relative to the module root.
    pub providers_dir: String,

    /// Manifest file relative to the module root.
    pub manifest_file: String,

    /// File extensions to include (without leading dot). Empty includes all.
    pub extensions: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            types_dir: DEFAULT_TYPES_DIR.to_string(),
            providers_dir: DEFAULT_PROVIDERS_DIR.to_string(),
            manifest_file: DEFAULT_MANIFEST_FILE.to_string(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Abort on a missing declaration anchor instead of skipping the file.
    pub strict_anchors: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            strict_anchors: DEFAULT_STRICT_ANCHORS,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: DEFAULT_PRETTY,
        }
    }
}

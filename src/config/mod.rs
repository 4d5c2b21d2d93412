//! Configuration management for recap.
//!
//! Configuration is read from `~/.config/recap/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod colors;

pub use colors::{ColorConfig, Palette};

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Environment variable overriding `[api] base_url`.
pub const API_URL_ENV: &str = "RECAP_API_URL";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub colors: ColorConfig,
}

/// Settings for the summarization API endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// Missing fields in the config file use default values. The
    /// `RECAP_API_URL` environment variable overrides `[api] base_url`.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        let mut config = if config_path.exists() {
            let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
                path: config_path.clone(),
                source: e,
            })?;

            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: config_path,
                source: e,
            })?
        } else {
            Self::create_default_config(&config_path)?;
            Self::default()
        };

        if let Ok(base_url) = std::env::var(API_URL_ENV) {
            config.api.base_url = base_url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject base URLs that reqwest would choke on later.
    fn validate(&self) -> Result<(), ConfigError> {
        url::Url::parse(&self.api.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            value: self.api.base_url.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Get the default config file path: `~/.config/recap/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("recap").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let default_config = Self::default_config_content();

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        file.write_all(default_config.as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# recap configuration
#
# Colors can be specified as:
# - Named colors: Black, Red, Green, Yellow, Blue, Magenta, Cyan, Gray,
#   DarkGray, LightRed, LightGreen, LightYellow, LightBlue, LightMagenta,
#   LightCyan, White, Reset
# - Hex colors: "#RRGGBB" or "#RGB"
#
# The active palette ([colors.light] or [colors.dark]) follows the theme
# toggle (Ctrl+T in the TUI, `recap theme --toggle` on the command line).

[api]
# Base URL of the summarization backend. The RECAP_API_URL environment
# variable takes precedence over this value.
base_url = "http://localhost:5000/api"

[colors.light]
border_active = "Magenta"
border_inactive = "Gray"
accent = "Magenta"
text = "Black"
muted = "DarkGray"
error = "Red"
success = "Green"
status_fg = "Black"
status_bg = "Gray"

[colors.dark]
border_active = "Cyan"
border_inactive = "DarkGray"
accent = "Cyan"
text = "White"
muted = "DarkGray"
error = "LightRed"
success = "LightGreen"
status_fg = "White"
status_bg = "DarkGray"
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid API base URL {value:?}: {source}")]
    InvalidBaseUrl {
        value: String,
        source: url::ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.colors.dark.border_active, Color::Cyan);
        assert_eq!(config.colors.light.text, Color::Black);
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[api]
base_url = "http://summaries.internal:8080/api"

[colors.dark]
accent = "#FF0000"
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        // Custom values
        assert_eq!(config.api.base_url, "http://summaries.internal:8080/api");
        assert_eq!(config.colors.dark.accent, Color::Rgb(255, 0, 0));
        // Defaults fill the rest
        assert_eq!(config.colors.dark.border_active, Color::Cyan);
        assert_eq!(config.colors.light.accent, Color::Magenta);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");

        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.colors.light.border_active, Color::Magenta);
    }

    #[test]
    fn test_validate_rejects_garbage_base_url() {
        let mut config = Config::default();
        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }
}

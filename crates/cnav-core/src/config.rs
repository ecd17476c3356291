// ABOUTME: Application configuration handling.
// ABOUTME: Loads and saves display and driver settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How the tree is labeled when displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Repeated once per depth level in front of each label
    pub indent_marker: String,

    /// Label nodes by their concrete kind ("Panel", "Button", ...).
    /// When false, leaves print "Component" and containers print "Container".
    pub kind_labels: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            indent_marker: "-".to_string(),
            kind_labels: true,
        }
    }
}

impl DisplaySettings {
    /// Indent prefix for the given depth
    pub fn indent(&self, level: usize) -> String {
        self.indent_marker.repeat(level)
    }
}

/// What the driver does with "current" when a navigation query finds nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissPolicy {
    /// Keep the current component and report the miss
    #[default]
    Stay,
    /// Replace the current component with nothing
    Clear,
}

impl MissPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            MissPolicy::Stay => "stay",
            MissPolicy::Clear => "clear",
        }
    }
}

/// Interactive driver preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DriverSettings {
    pub on_miss: MissPolicy,

    /// Print the whole tree once before the first menu
    pub show_tree_on_start: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Tree labeling
    pub display: DisplaySettings,

    /// Menu loop behavior
    pub driver: DriverSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl Config {
    /// Get the default config file path (~/.config/component-nav/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("component-nav").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global configuration (stored in ~/.config/kanban/)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// UI theme/colors
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Diagnostic log settings
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// Theme configuration with hex colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Border color for the focused column and active input (hex, e.g. "#6C5FC7")
    #[serde(default = "default_color_focused")]
    pub color_focused: String,

    /// Border color for unfocused columns (hex, e.g. "#4E4E4E")
    #[serde(default = "default_color_normal")]
    pub color_normal: String,

    /// Text color for task titles (hex, e.g. "#F2ECE6")
    #[serde(default = "default_color_text")]
    pub color_text: String,

    /// Color for task descriptions (hex, e.g. "#9C9991")
    #[serde(default = "default_color_description")]
    pub color_description: String,

    /// Color for the help footer (hex, e.g. "#626262")
    #[serde(default = "default_color_help")]
    pub color_help: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            color_focused: default_color_focused(),
            color_normal: default_color_normal(),
            color_text: default_color_text(),
            color_description: default_color_description(),
            color_help: default_color_help(),
        }
    }
}

fn default_color_focused() -> String {
    "#5f5fd7".to_string() // Slate blue
}

fn default_color_normal() -> String {
    "#4e4e4e".to_string() // Dark Gray
}

fn default_color_text() -> String {
    "#f2ece6".to_string() // Light Rose
}

fn default_color_description() -> String {
    "#9c9991".to_string() // Warm Gray
}

fn default_color_help() -> String {
    "#626262".to_string() // Gray
}

impl ThemeConfig {
    /// Parse a hex color string to RGB tuple
    pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }
}

/// Log configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive when RUST_LOG is unset (e.g. "info", "kanban=debug")
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl GlobalConfig {
    /// Load global config from default location, writing the defaults
    /// there on first run
    pub fn load() -> Result<Self> {
        Self::load_or_init(&Self::config_path()?)
    }

    /// Load config from `config_path`; a missing file is created with the
    /// defaults so users have something to edit
    pub fn load_or_init(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            return Self::load_from(config_path);
        }
        let config = Self::default();
        config
            .save_to(config_path)
            .with_context(|| format!("Failed to write default config to {:?}", config_path))?;
        Ok(config)
    }

    /// Load config from an explicit path; a missing file yields defaults
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;
            toml::from_str(&content).context("Failed to parse global config")
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;

        Ok(())
    }

    /// Get the path to the global config file
    /// Always uses ~/.config/kanban/ on all platforms
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").context("Could not determine home directory")?;
        Ok(PathBuf::from(home).join(".config").join("kanban").join("config.toml"))
    }

    /// Get the path to the global data directory (log files live here)
    pub fn data_dir() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "kanban")
            .context("Could not determine data directory")?;
        Ok(dirs.data_dir().to_path_buf())
    }
}

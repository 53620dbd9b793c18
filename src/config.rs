//! Configuration for linestack programs.
//!
//! Loaded from `~/.linestack/config.toml`. Every field is optional:
//!
//! ```toml
//! # Hide the terminal cursor while the stack is on screen
//! hide_cursor = true
//!
//! # tracing level for the log file (error, warn, info, debug, trace)
//! log_level = "info"
//!
//! [input]
//! cursor = "|"
//!
//! [select]
//! not_selected = "[ ]"
//! hover = "> <"
//! selected = "[X]"
//! hover_selected = ">X<"
//!
//! [progress]
//! width = 30
//! start = "["
//! end = "]"
//! filled = "#"
//! not_filled = " "
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ui::{InputStyle, ProgressStyle, SelectStyle};

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hide_cursor: bool,
    pub log_level: String,
    pub input: InputStyle,
    pub select: SelectStyle,
    pub progress: ProgressStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hide_cursor: true,
            log_level: "info".to_string(),
            input: InputStyle::default(),
            select: SelectStyle::default(),
            progress: ProgressStyle::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`, falling back to defaults if it is missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match Self::from_toml_str(&content) {
                    Ok(config) => return config,
                    Err(e) => warn!("Ignoring malformed {}: {}", path.display(), e),
                },
                Err(e) => warn!("Failed to read {}: {}", path.display(), e),
            }
        }
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path().ok_or_else(|| "Could not determine config path".to_string())?;
        self.save_to(&path)
    }

    /// Write to `path`, creating its parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| format!("Failed to create config dir: {}", e))?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        fs::write(path, content).map_err(|e| format!("Failed to write config: {}", e))?;
        Ok(())
    }

    /// `~/.linestack`
    pub fn config_dir() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".linestack"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }
}

// Get home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

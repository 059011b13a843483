//! Generator configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Container formats treated as video when no configuration overrides them
pub const DEFAULT_VIDEO_EXTENSIONS: [&str; 11] = [
    ".3gp", ".avi", ".m4v", ".mkv", ".mov", ".mp4", ".mpeg", ".mpg", ".ogv", ".webm", ".wmv",
];

/// Environment variable naming the configuration file
pub const CONFIG_ENV_VAR: &str = "VLC_PLAYLIST_CONFIG";

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "vlc-playlist.toml";

/// Generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// File extensions considered video, matched case-insensitively.
    /// The leading dot is optional.
    pub video_extensions: Vec<String>,

    /// Log level used when RUST_LOG is not set (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            video_extensions: DEFAULT_VIDEO_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            log_level: "warn".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: GeneratorConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Path of the configuration file: `VLC_PLAYLIST_CONFIG` if set,
    /// else `vlc-playlist.toml` in the working directory
    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }
}

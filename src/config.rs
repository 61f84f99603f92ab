//! Configuration file handling

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use directories::ProjectDirs;
use hid_relay_core::{BoardError, RelayBoard};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::detection::BoardKind;

/// Errors raised while loading or saving the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub device: DeviceConfig,
    pub transport: TransportConfig,
}

impl Config {
    /// Get the config file path for this platform
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "hid-relay").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load config from file, or create default if it doesn't exist
    pub fn load_or_create() -> Result<Self, ConfigError> {
        let path = Self::path().ok_or(ConfigError::NoConfigDir)?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            let config = Config::default();
            config.save_with_header_to(&path)?;
            info!(path = %path.display(), "created default config");
            Ok(config)
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        contents.parse()
    }

    /// Save config to file
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Save config with header comments for new files
    pub fn save_with_header(&self) -> Result<(), ConfigError> {
        let path = Self::path().ok_or(ConfigError::NoConfigDir)?;
        self.save_with_header_to(&path)
    }

    fn save_with_header_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let header = r#"# hid-relay configuration file
#
# [device]
# board = "auto" | "sainsmart16"
# path = "/dev/hidraw3"       # open this device instead of searching by id
#
# [transport]
# read_timeout = "500ms"      # omit to block until the board answers

"#;
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, format!("{header}{contents}"))?;
        Ok(())
    }

    /// Reload config from file
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        let path = Self::path().ok_or(ConfigError::NoConfigDir)?;
        *self = Self::load_from(&path)?;
        Ok(())
    }

    /// Open, reset and clear the configured board
    pub fn open_board(&self) -> Result<Box<dyn RelayBoard>, BoardError> {
        self.device.board.open(&self.device, &self.transport)
    }
}

impl FromStr for Config {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Board selection
    pub board: BoardKind,
    /// Explicit hid device path. Empty or missing searches by vendor/product id
    pub path: Option<String>,
    /// USB vendor id to search for
    pub vendor_id: u16,
    /// USB product id to search for
    pub product_id: u16,
}

impl DeviceConfig {
    /// Configured path, ignoring empty strings
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.is_empty())
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            board: BoardKind::Auto,
            path: None,
            vendor_id: sainsmart16::INFO.vendor_id,
            product_id: sainsmart16::INFO.product_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Upper bound on how long a relay read waits for the board
    #[serde(with = "humantime_serde")]
    pub read_timeout: Option<Duration>,
}

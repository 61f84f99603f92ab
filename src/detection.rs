//! Board detection and selection logic.

use std::str::FromStr;

use hid_relay_core::{BoardError, HidapiChannel, RelayBoard, Result};
use hidapi::HidApi;
use sainsmart16::{Sainsmart16, INFO as SAINSMART16_INFO};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{DeviceConfig, TransportConfig};

/// Supported board types
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardKind {
    /// Auto-detect connected board (default)
    #[default]
    Auto,
    /// SainSmart 16 channel relay
    Sainsmart16,
}

impl FromStr for BoardKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "sainsmart16" => Ok(Self::Sainsmart16),
            _ => Err(format!(
                "unknown board: {s}. Available: {}",
                Self::supported_boards().join(", ")
            )),
        }
    }
}

impl std::fmt::Display for BoardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Sainsmart16 => write!(f, "sainsmart16"),
        }
    }
}

/// Check if a HID device carries the configured vendor and product id
fn matches(device: &hidapi::DeviceInfo, config: &DeviceConfig) -> bool {
    device.vendor_id() == config.vendor_id && device.product_id() == config.product_id
}

fn open_api() -> Result<HidApi> {
    HidApi::new().map_err(|source| BoardError::DeviceOpen {
        target: "hidapi".into(),
        source,
    })
}

impl BoardKind {
    /// Open, reset and clear the specified board, or auto-detect if Auto.
    ///
    /// A configured path always wins over searching by id.
    pub fn open(
        &self,
        device: &DeviceConfig,
        transport: &TransportConfig,
    ) -> Result<Box<dyn RelayBoard>> {
        let channel = match (device.path(), self) {
            (Some(path), _) => HidapiChannel::open_path(path)?,
            (None, BoardKind::Auto) => {
                // Single HID iteration, first matching device wins.
                // Add more boards here as they're implemented
                let api = open_api()?;
                let found = api
                    .device_list()
                    .find(|d| matches(d, device))
                    .ok_or(BoardError::DeviceNotFound)?;
                info!(
                    board = SAINSMART16_INFO.name,
                    path = %found.path().to_string_lossy(),
                    "detected board"
                );
                let hid = found
                    .open_device(&api)
                    .map_err(|source| BoardError::DeviceOpen {
                        target: found.path().to_string_lossy().into_owned(),
                        source,
                    })?;
                HidapiChannel::from_device(hid)
            },
            (None, BoardKind::Sainsmart16) => {
                HidapiChannel::open(device.vendor_id, device.product_id)?
            },
        };
        let channel = channel.with_read_timeout(transport.read_timeout);
        Ok(Box::new(Sainsmart16::new(channel)?))
    }

    /// List all supported board CLI names
    pub fn supported_boards() -> &'static [&'static str] {
        &["auto", "sainsmart16"]
    }
}

/// Paths of every attached device matching the configured ids
pub fn list_devices(device: &DeviceConfig) -> Result<Vec<String>> {
    let api = open_api()?;
    Ok(api
        .device_list()
        .filter(|d| matches(d, device))
        .map(|d| d.path().to_string_lossy().into_owned())
        .collect())
}

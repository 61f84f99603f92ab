//! Control 16 channel USB HID relay boards.
//!
//! ```no_run
//! use hid_relay::Config;
//!
//! let config = Config::load_or_create()?;
//! let mut board = config.open_board()?;
//! board.set(3, true)?;
//! println!("relays: {:016b}", board.read()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod detection;

pub use config::{Config, ConfigError, DeviceConfig, TransportConfig};
pub use detection::{list_devices, BoardKind};
pub use hid_relay_core::{
    BoardError, BoardInfo, HidChannel, HidapiChannel, RelayBoard, Result, RELAY_COUNT,
};
pub use sainsmart16::{RelayState, Sainsmart16};

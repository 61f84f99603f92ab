//! Core traits and types for hid-relay board abstraction.
//!
//! This crate provides:
//! - The `RelayBoard` trait implemented by every supported relay board
//! - The `HidChannel` seam between boards and the USB HID transport
//! - Common types like `BoardInfo` and the shared `BoardError`

mod board;
mod channel;
mod error;

pub use board::{BoardInfo, RelayBoard, RELAY_COUNT};
pub use channel::{HidChannel, HidapiChannel};
pub use error::{BoardError, Result};

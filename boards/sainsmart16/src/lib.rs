//! High level hidapi abstraction for SainSmart 16 channel USB HID relay boards.
//!
//! The board speaks a fixed 16-byte frame protocol (see [`abi`]). Writes are
//! fire-and-forget, reads return the relay bitmap in a scrambled physical order
//! which is translated back with [`bitmap`].
//!
//! The controller keeps a local mirror of the relay state so single relays can be
//! toggled without a round trip. The mirror is only reconciled with the hardware by
//! [`Sainsmart16::read`].

use hid_relay_core::{
    BoardError, BoardInfo, HidChannel, HidapiChannel, RelayBoard, Result, RELAY_COUNT,
};
use tracing::{debug, info, warn};

pub mod abi;
pub mod bitmap;
pub mod checksum;
pub mod types;

pub use bitmap::{physical_to_logical, BitMapping};
pub use types::RelayState;

pub mod consts {
    pub const SAINSMART16_VENDOR_ID: u16 = 0x0416;
    pub const SAINSMART16_PRODUCT_ID: u16 = 0x5020;
}

/// Static board info for detection
pub static INFO: BoardInfo = BoardInfo {
    name: "SainSmart 16 Channel Relay",
    cli_name: "sainsmart16",
    vendor_id: consts::SAINSMART16_VENDOR_ID,
    product_id: consts::SAINSMART16_PRODUCT_ID,
};

/// High level abstraction for managing a 16 channel relay board
pub struct Sainsmart16<C = HidapiChannel> {
    channel: C,
    mapping: BitMapping,
    state: RelayState,
    states: [bool; RELAY_COUNT],
}

impl Sainsmart16<HidapiChannel> {
    /// Find the board by vendor and product id, reset it and switch every relay off
    pub fn open() -> Result<Self> {
        Self::new(HidapiChannel::open(
            consts::SAINSMART16_VENDOR_ID,
            consts::SAINSMART16_PRODUCT_ID,
        )?)
    }

    /// Open the board at a specific hid path, reset it and switch every relay off
    pub fn open_path(path: &str) -> Result<Self> {
        Self::new(HidapiChannel::open_path(path)?)
    }

    /// Open by path when one is given, otherwise by vendor and product id.
    /// An empty path counts as no path.
    pub fn open_maybe_path(path: Option<&str>) -> Result<Self> {
        match path.filter(|p| !p.is_empty()) {
            Some(path) => Self::open_path(path),
            None => Self::open(),
        }
    }
}

impl<C: HidChannel> Sainsmart16<C> {
    /// Take ownership of an open channel, reset the board and switch every relay off
    pub fn new(channel: C) -> Result<Self> {
        Self::with_mapping(channel, BitMapping::default())
    }

    /// Like [`Sainsmart16::new`] for board variants reporting a different bit order
    pub fn with_mapping(channel: C, mapping: BitMapping) -> Result<Self> {
        let mut this = Self {
            channel,
            mapping,
            state: RelayState::ALL_OFF,
            states: [false; RELAY_COUNT],
        };
        this.reset()?;
        this.write(RelayState::ALL_OFF.bits())?;
        Ok(this)
    }

    /// Internal method to send a frame over the channel
    fn send(&mut self, frame: &[u8]) -> Result<()> {
        debug!(frame = ?frame, "write");
        self.channel.write(frame)?;
        Ok(())
    }

    fn set_state(&mut self, state: RelayState) {
        if state != self.state {
            debug!(old = %self.state, new = %state, "relay state changed");
        }
        self.state = state;
        self.states = state.to_array();
    }

    /// Send the initialization sequence. No response is expected.
    pub fn reset(&mut self) -> Result<()> {
        info!("resetting relay board");
        self.send(&abi::reset())
    }

    /// Replace the whole relay bitmap.
    ///
    /// The local state is updated before the frame is sent and is not rolled back
    /// if sending fails. The board does not acknowledge writes.
    pub fn write(&mut self, state: u16) -> Result<()> {
        self.set_state(RelayState(state));
        self.send(&abi::write_request(state))
    }

    /// Like [`Sainsmart16::write`] for values coming from a wider integer.
    /// Anything outside 0..=65535 is rejected before touching the device.
    pub fn write_value(&mut self, value: u32) -> Result<()> {
        let state = RelayState::try_from(value)?;
        self.write(state.bits())
    }

    /// Switch a single relay (0-15).
    ///
    /// The new bitmap is derived from the cached state, no read is issued first.
    pub fn set(&mut self, relay: u8, on: bool) -> Result<()> {
        let state = self.state.with(relay, on)?;
        self.write(state.bits())
    }

    /// Query the board and return the logical relay bitmap.
    ///
    /// Blocks until the board answers (or the channel read timeout expires). The
    /// cached state is only updated when a response was received.
    pub fn read(&mut self) -> Result<u16> {
        self.send(&abi::read_request())?;

        let mut buf = [0u8; abi::FRAME_LEN];
        let len = self.channel.read(&mut buf)?;
        let response = &buf[..len];
        debug!(response = ?response, "read");

        let Some(physical) = abi::physical_bitmap(response) else {
            warn!(len, "short response from relay board");
            return Err(BoardError::ShortResponse { len });
        };
        let logical = self.mapping.to_logical(physical);
        self.set_state(RelayState(logical));
        Ok(logical)
    }

    /// Cached logical relay bitmap
    pub fn state(&self) -> RelayState {
        self.state
    }

    /// Cached state of each relay, indexed by logical relay number
    pub fn states(&self) -> [bool; RELAY_COUNT] {
        self.states
    }

    /// Cached state of a single relay. Out of range indices are never on.
    pub fn is_on(&self, relay: u8) -> bool {
        self.state.is_on(relay)
    }

    /// Release the board, handing back the underlying channel
    pub fn close(self) -> C {
        self.channel
    }
}

// === Trait Implementations ===

impl<C: HidChannel> RelayBoard for Sainsmart16<C> {
    fn info(&self) -> &'static BoardInfo {
        &INFO
    }

    fn read(&mut self) -> Result<u16> {
        Sainsmart16::read(self)
    }

    fn write(&mut self, state: u16) -> Result<()> {
        Sainsmart16::write(self, state)
    }

    fn set(&mut self, relay: u8, on: bool) -> Result<()> {
        Sainsmart16::set(self, relay, on)
    }

    fn reset(&mut self) -> Result<()> {
        Sainsmart16::reset(self)
    }

    fn state(&self) -> u16 {
        self.state.bits()
    }

    fn states(&self) -> [bool; RELAY_COUNT] {
        self.states
    }
}

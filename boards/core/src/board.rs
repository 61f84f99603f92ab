//! Core RelayBoard trait and related types.

use crate::error::Result;

/// Number of relay channels addressable through [`RelayBoard`]
pub const RELAY_COUNT: usize = 16;

/// Static information about a board type for detection
#[derive(Debug, Clone, Copy)]
pub struct BoardInfo {
    pub name: &'static str,
    pub cli_name: &'static str,
    pub vendor_id: u16,
    pub product_id: u16,
}

/// Core board trait - object-safe for `dyn RelayBoard`
///
/// The cached state is a best-effort mirror of the hardware. Only [`RelayBoard::read`]
/// reconciles it against the device; everything else trusts the cache.
/// Boards should provide a static `INFO` constant and `open()` method separately.
pub trait RelayBoard: Send {
    /// Get board info (instance method for object safety)
    fn info(&self) -> &'static BoardInfo;

    /// Query the device and return the logical relay bitmap
    fn read(&mut self) -> Result<u16>;

    /// Replace the whole relay bitmap
    fn write(&mut self, state: u16) -> Result<()>;

    /// Switch a single relay, derived from the cached bitmap
    fn set(&mut self, relay: u8, on: bool) -> Result<()>;

    /// Send the board initialization sequence
    fn reset(&mut self) -> Result<()>;

    /// Last known logical relay bitmap
    fn state(&self) -> u16;

    /// Last known state of each relay, indexed by logical relay number
    fn states(&self) -> [bool; RELAY_COUNT] {
        let state = self.state();
        std::array::from_fn(|i| state & (1 << i) != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u16);

    static INFO: BoardInfo = BoardInfo {
        name: "Fixed",
        cli_name: "fixed",
        vendor_id: 0,
        product_id: 0,
    };

    impl RelayBoard for Fixed {
        fn info(&self) -> &'static BoardInfo {
            &INFO
        }
        fn read(&mut self) -> Result<u16> {
            Ok(self.0)
        }
        fn write(&mut self, state: u16) -> Result<()> {
            self.0 = state;
            Ok(())
        }
        fn set(&mut self, _relay: u8, _on: bool) -> Result<()> {
            Ok(())
        }
        fn reset(&mut self) -> Result<()> {
            Ok(())
        }
        fn state(&self) -> u16 {
            self.0
        }
    }

    #[test]
    fn states_follow_bitmap() {
        let states = Fixed(0b1000_0000_0000_0101).states();
        assert_eq!(
            states.iter().enumerate().filter(|(_, on)| **on).map(|(i, _)| i).collect::<Vec<_>>(),
            vec![0, 2, 15]
        );
    }
}

use std::fmt;

use hid_relay_core::{BoardError, RELAY_COUNT};

/// Logical relay bitmap. Bit `i` set means relay `i` is energized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RelayState(pub u16);

impl RelayState {
    pub const ALL_OFF: Self = Self(0);
    pub const ALL_ON: Self = Self(u16::MAX);

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Whether relay `index` is on. Out of range indices are never on.
    pub const fn is_on(self, index: u8) -> bool {
        (index as usize) < RELAY_COUNT && self.0 & (1 << index) != 0
    }

    /// Copy of this state with one relay switched
    pub fn with(self, index: u8, on: bool) -> Result<Self, BoardError> {
        let mask = relay_mask(index)?;
        Ok(if on {
            Self(self.0 | mask)
        } else {
            Self(self.0 & !mask)
        })
    }

    /// Per-relay view, indexed by logical relay number
    pub fn to_array(self) -> [bool; RELAY_COUNT] {
        std::array::from_fn(|i| self.0 & (1 << i) != 0)
    }
}

/// Bit mask selecting relay `index`, validating the range 0..=15
pub fn relay_mask(index: u8) -> Result<u16, BoardError> {
    if (index as usize) < RELAY_COUNT {
        Ok(1 << index)
    } else {
        Err(BoardError::InvalidArgument(format!(
            "relay index {index} out of range, must be 0-15"
        )))
    }
}

impl From<u16> for RelayState {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<RelayState> for u16 {
    fn from(value: RelayState) -> Self {
        value.0
    }
}

impl TryFrom<u32> for RelayState {
    type Error = BoardError;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u16::try_from(value).map(Self).map_err(|_| out_of_range(value))
    }
}

impl TryFrom<i64> for RelayState {
    type Error = BoardError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u16::try_from(value).map(Self).map_err(|_| out_of_range(value))
    }
}

fn out_of_range(value: impl fmt::Display) -> BoardError {
    BoardError::InvalidArgument(format!(
        "relay state {value} out of range, must be an integer between 0 and 65535"
    ))
}

impl fmt::Display for RelayState {
    /// Relay 15 first, matching how the board is labelled
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016b}", self.0)
    }
}

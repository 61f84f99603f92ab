//! Bit order translation between the device's physical relay bitmap and
//! logical relay indices.
//!
//! Read responses report relay state in an interleaved physical order, while write
//! requests take the bitmap in plain logical order. Only the read path is remapped.

/// Ordered physical bit weights. Entry `p` is the physical bit holding logical
/// relay `15 - p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitMapping(pub [u16; 16]);

/// Physical weights used by the SainSmart 16 channel board
pub const SAINSMART16: BitMapping = BitMapping([
    128, 256, 64, 512, 32, 1024, 16, 2048, 8, 4096, 4, 8192, 2, 16384, 1, 32768,
]);

impl BitMapping {
    /// Convert a physical bitmap into a logical bitmap (bit i = relay i)
    pub const fn to_logical(&self, physical: u16) -> u16 {
        let mut logical = 0u16;
        let mut p = 0;
        while p < 16 {
            logical <<= 1;
            if physical & self.0[p] != 0 {
                logical |= 1;
            }
            p += 1;
        }
        logical
    }
}

impl Default for BitMapping {
    fn default() -> Self {
        SAINSMART16
    }
}

/// Convert a physical bitmap using the SainSmart table
#[inline(always)]
pub const fn physical_to_logical(physical: u16) -> u16 {
    SAINSMART16.to_logical(physical)
}

//! HID frame protocol implementation for SainSmart 16 channel relay boards.
//!
//! Request frame structure (16 bytes):
//! - Byte 0: Command byte
//! - Byte 1: Payload length, excluding the checksum (always 14)
//! - Bytes 2-9: Command body
//! - Bytes 10-13: Signature, ascii "HIDC"
//! - Bytes 14-15: Checksum (sum of bytes 0-13, little-endian)
//!
//! Response frame structure (16 bytes):
//! - Bytes 0-1: Unknown
//! - Bytes 2-3: Physical relay bitmap (little-endian)
//! - Bytes 4-15: Unknown

use crate::checksum::append_checksum;

/// Size of every request and response frame
pub const FRAME_LEN: usize = 16;
/// Bytes covered by the checksum
pub const PAYLOAD_LEN: usize = 14;
/// Trailing signature of every request frame
pub const SIGNATURE: [u8; 4] = *b"HIDC";

/// A complete request frame, checksum included
pub type Frame = [u8; FRAME_LEN];

/// Command identifiers
pub mod cmd {
    /// Relay state query
    pub const READ: u8 = 0xD2;
    /// Relay state update
    pub const WRITE: u8 = 0xC3;
}

/// Initialization sequence. Sent verbatim, it carries no checksum. Clears up a
/// board left in an inconsistent state by a reconnect or a misbehaving host.
pub const RESET: [u8; 13] = [
    0x71, 0x0E, 0x71, 0x00, 0x00, 0x00, 0x11, 0x11, 0x00, 0x00, b'H', b'I', b'D',
];

/// Build a 16-byte frame with header, signature and checksum.
pub fn build_frame(command: u8, body: [u8; 8]) -> Frame {
    let mut frame = [0u8; FRAME_LEN];
    frame[0] = command;
    frame[1] = PAYLOAD_LEN as u8;
    frame[2..10].copy_from_slice(&body);
    frame[10..14].copy_from_slice(&SIGNATURE);
    append_checksum(&mut frame);
    frame
}

/// Build a relay state query. The body is a fixed 0x11 filler.
pub fn read_request() -> Frame {
    build_frame(cmd::READ, [0x11; 8])
}

/// Build a relay state update.
///
/// Body structure (8 bytes):
/// - Bytes 0-1: Relay bitmap in logical order (little-endian)
/// - Bytes 2-7: Zero filler
pub fn write_request(state: u16) -> Frame {
    let [lo, hi] = state.to_le_bytes();
    build_frame(cmd::WRITE, [lo, hi, 0, 0, 0, 0, 0, 0])
}

/// Build the initialization sequence
pub const fn reset() -> [u8; 13] {
    RESET
}

/// Extract the physical relay bitmap from a response frame.
///
/// The remaining bytes are not validated, a corrupt response is parsed as-is.
/// Returns `None` when the response is too short to hold the bitmap.
pub fn physical_bitmap(response: &[u8]) -> Option<u16> {
    match response {
        [_, _, lo, hi, ..] => Some(u16::from_le_bytes([*lo, *hi])),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_request_layout() {
        assert_eq!(
            read_request(),
            [
                0xD2, 0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, b'H', b'I', b'D',
                b'C', 0x80, 0x02
            ]
        );
    }

    #[test]
    fn write_request_layout() {
        // all off
        assert_eq!(
            write_request(0),
            [0xC3, 0x0E, 0, 0, 0, 0, 0, 0, 0, 0, b'H', b'I', b'D', b'C', 0xE9, 0x01]
        );
        // relays 0 and 15
        let frame = write_request(0x8001);
        assert_eq!(frame[2..4], [0x01, 0x80]);
        assert_eq!(frame[4..10], [0; 6]);
        assert_eq!(frame[14..], [0x6A, 0x02]);
    }

    #[test]
    fn reset_is_verbatim() {
        assert_eq!(reset().len(), 13);
        assert_eq!(reset(), [113, 14, 113, 0, 0, 0, 17, 17, 0, 0, 72, 73, 68]);
    }

    #[test]
    fn bitmap_from_response() {
        let mut response = [0xAAu8; FRAME_LEN];
        response[2] = 0x34;
        response[3] = 0x12;
        assert_eq!(physical_bitmap(&response), Some(0x1234));
        assert_eq!(physical_bitmap(&response[..4]), Some(0x1234));
        assert_eq!(physical_bitmap(&response[..3]), None);
        assert_eq!(physical_bitmap(&[]), None);
    }
}

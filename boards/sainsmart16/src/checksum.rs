//! Frame checksum: plain unsigned sum of the payload bytes.

use crate::abi::{Frame, FRAME_LEN, PAYLOAD_LEN};

/// Sum of the first 14 bytes of a frame. Cannot overflow (14 * 255 = 3570).
pub fn checksum(payload: &[u8; PAYLOAD_LEN]) -> u16 {
    payload.iter().map(|&b| b as u16).sum()
}

/// Write the checksum of `frame[..14]` little-endian into `frame[14..16]`
pub fn append_checksum(frame: &mut Frame) {
    let mut payload = [0u8; PAYLOAD_LEN];
    payload.copy_from_slice(&frame[..PAYLOAD_LEN]);
    frame[PAYLOAD_LEN..FRAME_LEN].copy_from_slice(&checksum(&payload).to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_test() {
        // read request payload
        let payload = [
            0xD2, 0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, b'H', b'I', b'D', b'C',
        ];
        assert_eq!(checksum(&payload), 0x0280);
    }

    #[test]
    fn checksum_of_saturated_payload() {
        assert_eq!(checksum(&[0xFF; PAYLOAD_LEN]), 3570);
    }

    #[test]
    fn append_writes_little_endian() {
        let mut frame = [0u8; FRAME_LEN];
        frame[0] = 0xFF;
        frame[1] = 0xFF;
        frame[2] = 0x02;
        append_checksum(&mut frame);
        assert_eq!(frame[14..], [0x00, 0x02]);
    }
}

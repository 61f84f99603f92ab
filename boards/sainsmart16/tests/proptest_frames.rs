//! Property-based tests for frame encoding, checksums and the read-path bit order.

use proptest::prelude::*;
use sainsmart16::abi::{self, FRAME_LEN, PAYLOAD_LEN};
use sainsmart16::bitmap::{physical_to_logical, SAINSMART16};
use sainsmart16::checksum::checksum;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Bytes 2–3 of a write request carry the relay bitmap little-endian.
    #[test]
    fn prop_write_bitmap_round_trip(state in 0u16..=u16::MAX) {
        let frame = abi::write_request(state);
        prop_assert_eq!(u16::from_le_bytes([frame[2], frame[3]]), state);
    }

    /// Every request frame ends with the checksum of its first 14 bytes.
    #[test]
    fn prop_write_checksum_trailer(state in 0u16..=u16::MAX) {
        let frame = abi::write_request(state);
        let sum: u32 = frame[..PAYLOAD_LEN].iter().map(|&b| b as u32).sum();
        prop_assert_eq!(u16::from_le_bytes([frame[14], frame[15]]) as u32, sum);
    }

    /// The fixed parts of a write request never depend on the state.
    #[test]
    fn prop_write_fixed_fields(state in 0u16..=u16::MAX) {
        let frame = abi::write_request(state);
        prop_assert_eq!(frame.len(), FRAME_LEN);
        prop_assert_eq!(frame[0], abi::cmd::WRITE);
        prop_assert_eq!(frame[1], 14);
        prop_assert_eq!(&frame[4..10], &[0u8; 6][..]);
        prop_assert_eq!(&frame[10..14], b"HIDC");
    }

    /// The checksum is the plain unsigned sum and never wraps.
    #[test]
    fn prop_checksum_is_byte_sum(payload in proptest::array::uniform14(any::<u8>())) {
        let sum: u32 = payload.iter().map(|&b| b as u32).sum();
        prop_assert!(sum <= 3570);
        prop_assert_eq!(checksum(&payload) as u32, sum);
    }

    /// Each physical bit lands on exactly one logical bit.
    #[test]
    fn prop_remap_preserves_popcount(physical in 0u16..=u16::MAX) {
        prop_assert_eq!(physical_to_logical(physical).count_ones(), physical.count_ones());
    }

    /// Remapping distributes over bitwise or.
    #[test]
    fn prop_remap_is_bitwise(a in 0u16..=u16::MAX, b in 0u16..=u16::MAX) {
        prop_assert_eq!(
            physical_to_logical(a | b),
            physical_to_logical(a) | physical_to_logical(b)
        );
    }

    /// The response parser only looks at bytes 2–3.
    #[test]
    fn prop_response_ignores_other_bytes(
        mut response in proptest::array::uniform16(any::<u8>()),
        physical in 0u16..=u16::MAX,
    ) {
        response[2..4].copy_from_slice(&physical.to_le_bytes());
        prop_assert_eq!(abi::physical_bitmap(&response), Some(physical));
    }
}

#[test]
fn remap_is_a_bijection() {
    let mut seen = vec![false; 1 << 16];
    for physical in 0..=u16::MAX {
        let logical = physical_to_logical(physical) as usize;
        assert!(!seen[logical], "logical value {logical:#06x} produced twice");
        seen[logical] = true;
    }
}

#[test]
fn weight_table_is_a_permutation() {
    let combined = SAINSMART16.0.iter().fold(0u16, |acc, w| {
        assert_eq!(w.count_ones(), 1, "weight {w} is not a single bit");
        assert_eq!(acc & w, 0, "weight {w} repeated");
        acc | w
    });
    assert_eq!(combined, u16::MAX);
}

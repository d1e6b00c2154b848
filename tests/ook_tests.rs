//! # Legacy OOK Encoder Tests
//!
//! Frame layout for the HS1527 symbol stream and the radio-side behavior
//! of a legacy socket switch.

use energenie_rs::ook::{encode_msg, switch_to_k, DEFAULT_ADDRESS};
use energenie_rs::radio::registers::{REG_FRMID, REG_OPMODE, OPMODE_STANDBY};
use energenie_rs::{EnergenieRadio, LegacySocket, MockPort};
use proptest::prelude::*;

#[test]
fn test_known_frame_layout() {
    let k = switch_to_k(1, false).unwrap();
    assert_eq!(k, 0x0E);

    let msg = encode_msg(DEFAULT_ADDRESS, 0x0D);
    assert_eq!(
        msg,
        [
            0x80, 0x00, 0x00, 0x00, // preamble
            0xE8, 0xE8, 0x88, 0x88, 0x88, 0x8E, 0x8E, 0xEE, 0x88, 0x88, // address 0xA0170
            0xEE, 0x8E, // k-code 0x0D
        ]
    );
}

#[test]
fn test_frame_is_always_16_bytes() {
    for channel in 0..=4u8 {
        for state in [false, true] {
            let k = switch_to_k(channel, state).unwrap();
            assert_eq!(encode_msg(DEFAULT_ADDRESS, k).len(), 16);
        }
    }
}

/// A legacy switch drives the radio: OOK table active, 8 burst repeats by
/// default, standby restored after the release gap.
#[test]
fn test_legacy_socket_drives_radio() {
    let mut radio = EnergenieRadio::new(MockPort::new());
    let socket = LegacySocket::new(2).unwrap();

    socket.set(&mut radio, true, 2).unwrap();

    assert!(radio.is_on());
    let writes = radio.port().reg_writes();
    // OOK carrier is 433.92 MHz (FRMID 0x7A)
    assert!(writes.contains(&(REG_FRMID, 0x7A)));
    assert_eq!(writes.last(), Some(&(REG_OPMODE, OPMODE_STANDBY)));
    assert_eq!(radio.port().fifo_burst_count(), 2);
}

proptest! {
    /// Every symbol byte after the preamble packs exactly two of the two
    /// chip patterns.
    #[test]
    fn prop_symbol_alphabet(address in 0u32..(1 << 20), k in 0u8..16) {
        let msg = encode_msg(address, k);
        prop_assert_eq!(&msg[..4], &[0x80, 0x00, 0x00, 0x00]);
        for &b in &msg[4..] {
            prop_assert!(matches!(b, 0x88 | 0x8E | 0xE8 | 0xEE));
        }
    }

    /// ON and OFF k-codes differ by exactly one for every channel.
    #[test]
    fn prop_k_codes_adjacent(channel in 0u8..5) {
        let off = switch_to_k(channel, false).unwrap();
        let on = switch_to_k(channel, true).unwrap();
        prop_assert_eq!(on - off, 1);
    }
}

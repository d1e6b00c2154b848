//! # OpenThings Codec Tests
//!
//! Golden captured frames from real MiHome devices, the switch command
//! round trip, and the property laws of the CRC and the stream cipher.

use energenie_rs::openthings::params::P_SWITCH_STATE;
use energenie_rs::openthings::{crc, crypt::Crypt, decode, make_switch_message};
use energenie_rs::util::hex::hex_to_bytes;
use energenie_rs::Value;
use proptest::prelude::*;

/// Adaptor-plus switch report, captured off air.
const MSG1: &str = "0D 04 02 4B A8 98 36 EF 9C C0 3D E2 25 72";
/// A second capture of the same adaptor with a different PIP.
const MSG2: &str = "0D 04 02 B9 28 0C 8D 78 8F 65 BA ED 7B 84";
/// House monitor report.
const MSG3: &str = "16 04 05 C9 8C FB D7 5A 44 8E EE 83 21 CC CB CF 4A B8 64 66 2C 64 AF";
/// Adaptor-plus multi-record report.
const MSG4: &str =
    "1C 04 02 58 0B 55 24 23 BC D2 AC 50 8D 26 5B A2 CF 74 B7 73 47 4A A9 F1 97 F1 F0 3F 23";

#[test]
fn test_decode_captured_switch_report() {
    let message = decode(&hex_to_bytes(MSG1)).expect("capture decodes");

    assert_eq!(message.mfrid, 0x04);
    assert_eq!(message.productid, 0x02);
    assert_eq!(message.sensorid, Some(0x000373));

    let rec = message.record(P_SWITCH_STATE).expect("switch record");
    assert!(rec.wr);
    assert_eq!(rec.paramname, "SWITCH_STATE");
    assert!(matches!(rec.value, Some(Value::UInt(0)) | Some(Value::UInt(1))));
}

#[test]
fn test_decode_captured_frames_all_pips() {
    // each capture carries its own PIP; all must decrypt and CRC-check
    for capture in [MSG1, MSG2, MSG3, MSG4] {
        assert!(
            decode(&hex_to_bytes(capture)).is_some(),
            "capture failed to decode: {capture}"
        );
    }
}

#[test]
fn test_decode_house_monitor_capture() {
    let message = decode(&hex_to_bytes(MSG3)).expect("capture decodes");
    assert_eq!(message.productid, 0x05);
    assert!(!message.recs.is_empty());
}

#[test]
fn test_make_decode_roundtrip() {
    for (sensor_id, state) in [
        (0x0200_0373u32, true),
        (0x0200_0373, false),
        (0x02FF_FFFF, true),
        (0x0C00_0001, false),
    ] {
        let frame = make_switch_message(sensor_id, state);
        assert_eq!(frame.len(), 14);

        let message = decode(&frame).expect("own frame decodes");
        assert_eq!(message.productid, ((sensor_id >> 24) & 0xFF) as u8);
        assert_eq!(message.sensorid, Some(sensor_id & 0xFF_FFFF));

        let rec = message.record(P_SWITCH_STATE).expect("switch record");
        assert!(rec.wr);
        assert_eq!(rec.value, Some(Value::UInt(state as u64)));
    }
}

#[test]
fn test_truncated_capture_rejected() {
    let bytes = hex_to_bytes(MSG1);
    assert!(decode(&bytes[..10]).is_none());
}

#[test]
fn test_flipped_bit_in_capture_rejected() {
    let mut bytes = hex_to_bytes(MSG1);
    bytes[8] ^= 0x01;
    assert!(decode(&bytes).is_none());
}

proptest! {
    /// Signing then verifying always holds.
    #[test]
    fn prop_crc_sign_verify(body in proptest::collection::vec(any::<u8>(), 0..40)) {
        let mut buf = body;
        buf.extend([0, 0]);
        crc::sign(&mut buf);
        prop_assert!(crc::verify(&buf));
    }

    /// Any single flipped bit in the body breaks verification.
    #[test]
    fn prop_crc_detects_bit_flip(
        body in proptest::collection::vec(any::<u8>(), 1..32),
        pos in any::<proptest::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut buf = body;
        buf.extend([0, 0]);
        crc::sign(&mut buf);

        let idx = pos.index(buf.len() - 2);
        buf[idx] ^= 1 << bit;
        prop_assert!(!crc::verify(&buf));
    }

    /// The cipher is an involution under any seed.
    #[test]
    fn prop_cipher_involution(
        pid in any::<u8>(),
        pip in any::<u16>(),
        body in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut buf = body.clone();
        Crypt::new(pid, pip).block(&mut buf);
        Crypt::new(pid, pip).block(&mut buf);
        prop_assert_eq!(buf, body);
    }

    /// Signed-then-encrypted frames survive the full pipeline regardless of id.
    #[test]
    fn prop_switch_roundtrip(sensor_id in any::<u32>(), state in any::<bool>()) {
        let frame = make_switch_message(sensor_id, state);
        let message = decode(&frame);
        prop_assert!(message.is_some());
        let message = message.unwrap();
        prop_assert_eq!(message.sensorid, Some(sensor_id & 0xFF_FFFF));
    }
}

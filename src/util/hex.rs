//! # Hex Display Utilities
//!
//! Small helpers for rendering radio payloads in log messages and for
//! building byte buffers from hex test vectors.

use thiserror::Error;

/// Errors that can occur when parsing hex strings
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexError {
    #[error("Odd number of hex characters: {0}")]
    OddLength(usize),

    #[error("Hex decoding error: {0}")]
    DecodeError(String),
}

/// Format a run of bytes as a spaced uppercase hex string ("0D 04 02 ...").
///
/// This is the rendering used by the warning logs and the console output.
pub fn hexstr(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode a hex string into bytes, ignoring whitespace.
pub fn decode_hex(hex_str: &str) -> Result<Vec<u8>, HexError> {
    let cleaned: String = hex_str.chars().filter(|c| !c.is_whitespace()).collect();

    if cleaned.len() % 2 != 0 {
        return Err(HexError::OddLength(cleaned.len()));
    }

    hex::decode(&cleaned).map_err(|e| HexError::DecodeError(e.to_string()))
}

/// Helper for creating buffers from hex strings in tests and demos.
///
/// Panics on invalid hex (intended for fixed vectors only).
pub fn hex_to_bytes(hex_str: &str) -> Vec<u8> {
    decode_hex(hex_str).expect("invalid hex in test data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hexstr_format() {
        assert_eq!(hexstr(&[0x0D, 0x04, 0x02]), "0D 04 02");
        assert_eq!(hexstr(&[]), "");
    }

    #[test]
    fn test_decode_with_whitespace() {
        let expected = vec![0x0D, 0x04, 0x02, 0x4B];
        assert_eq!(decode_hex("0D 04 02 4B").unwrap(), expected);
        assert_eq!(decode_hex("0d04024b").unwrap(), expected);
    }

    #[test]
    fn test_roundtrip() {
        let data = vec![0x80, 0x00, 0xE8, 0x8E];
        assert_eq!(hex_to_bytes(&hexstr(&data)), data);
    }

    #[test]
    fn test_odd_length() {
        assert!(matches!(decode_hex("0D 0"), Err(HexError::OddLength(3))));
    }
}

//! # Energenie Error Handling
//!
//! This module defines the EnergenieError enum, which represents the different
//! error types that can occur in the energenie-rs crate.

use crate::radio::hal::HalError;

/// Represents the different error types that can occur in the Energenie crate.
#[derive(Debug, thiserror::Error)]
pub enum EnergenieError {
    /// The RFM69 version register did not read back the expected value.
    /// Raised during configuration and not recovered.
    #[error("Unexpected radio version: want 0x{want:02X} got 0x{got:02X}")]
    UnexpectedVersion { want: u8, got: u8 },

    /// A received payload was shorter than the minimum decodable frame.
    #[error("Short payload: min {min} got {got}")]
    ShortPayload { min: usize, got: usize },

    /// The decrypted body failed its CRC check.
    #[error("Invalid CRC on payload")]
    BadCrc,

    /// An incoming frame was larger than the receive buffer.
    #[error("FIFO overrun: frame wants {want} bytes, buffer holds {have}")]
    FifoOverrun { want: usize, have: usize },

    /// A record carried a type tag the value codec does not understand.
    #[error("Unsupported type id: 0x{0:02X}")]
    BadTypeId(u8),

    /// A caller violated an operation precondition.
    #[error("Invalid parameter: {0}")]
    InvalidParam(String),

    /// A fault in the SPI/GPIO port underneath the driver.
    #[error("Radio port error: {0}")]
    Hal(#[from] HalError),
}

//! # Hardware Abstraction Layer for the RFM69 Port
//!
//! This module defines the port trait the driver talks through and provides
//! the platform implementations: a scripted mock for host testing and an
//! rppal-backed port for the Raspberry Pi.
//!
//! The port is a thin byte pipe: SPI mode 0, MSB first, 8-bit words, with
//! explicit chip-select control so the driver can hold CS across the
//! multi-phase FIFO bursts.

use thiserror::Error;

/// Errors that can occur in the SPI/GPIO port underneath the driver.
#[derive(Debug, Error)]
pub enum HalError {
    #[error("SPI communication error: {0}")]
    Spi(String),

    #[error("GPIO operation error: {0}")]
    Gpio(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// SPI/GPIO port contract for the RFM69.
pub trait RadioPort {
    /// Full-duplex exchange of equal-length slices, chip-select asserted
    /// before and released after.
    fn transfer(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<(), HalError>;

    /// Transmit-only shift. With `select` false the caller owns chip-select,
    /// which is how FIFO burst payloads ride behind the address byte.
    fn write(&mut self, tx: &[u8], select: bool) -> Result<(), HalError>;

    /// Single-byte shift with CS held by the caller.
    fn write_byte(&mut self, b: u8) -> Result<(), HalError>;

    /// Single-byte shift with CS held by the caller, returning the byte
    /// clocked back.
    fn read_byte(&mut self, tx_filler: u8) -> Result<u8, HalError>;

    /// Manual chip-select control for multi-stage FIFO bursts.
    fn select(&mut self) -> Result<(), HalError>;
    fn deselect(&mut self) -> Result<(), HalError>;

    /// Hard reset: RESET high for at least 150 ms, low, then a 100 ms
    /// holdoff before the first register access.
    fn reset(&mut self) -> Result<(), HalError>;

    /// Optional transmit indicator output; no semantic effect.
    fn txing(&mut self, on: bool);

    /// Optional receive indicator output; no semantic effect.
    fn rxing(&mut self, on: bool);

    /// Level of the DIO0 interrupt line, false when not wired.
    fn is_int(&mut self) -> bool;
}

pub mod mock;

#[cfg(feature = "raspberry-pi")]
pub mod raspberry_pi;

pub use mock::{MockPort, Transaction};

#[cfg(feature = "raspberry-pi")]
pub use raspberry_pi::{PiPort, PortConfig};

//! # energenie-rs - Energenie Socket Control over an RFM69 Transceiver
//!
//! The energenie-rs crate drives Energenie-brand mains sockets over a
//! 433 MHz sub-GHz link, through an RFM69(HCW) transceiver on SPI. Two
//! device families coexist on the one radio:
//!
//! - **Legacy OOK sockets** (HS1527-based): one-way transmit of
//!   address + channel + on/off as a user-defined OOK symbol stream.
//! - **MiHome FSK sockets**: bidirectional OpenThings framed packets with
//!   CRC-16/CCITT, an involutive XOR stream cipher, and TLV records.
//!
//! ## Features
//!
//! - Register-level RFM69 driver: mode machine, burst FIFO transmit,
//!   count-byte-prefixed FIFO receive
//! - Dual-configuration radio facade with lazy OOK/FSK table switching
//! - OpenThings codec: frame build, decrypt, CRC check, record decoding
//! - HS1527 OOK symbol encoder for legacy sockets
//! - Scripted mock port for hardware-free testing, rppal port for the
//!   Raspberry Pi behind the `raspberry-pi` feature
//!
//! ## Usage
//!
//! ```rust
//! use energenie_rs::{EnergenieRadio, MockPort, MiHomeSocket};
//!
//! let mut radio = EnergenieRadio::new(MockPort::new());
//! let socket = MiHomeSocket::new(0x02000373);
//! socket.on(&mut radio).unwrap();
//! ```

pub mod error;
pub mod logging;
pub mod ook;
pub mod openthings;
pub mod radio;
pub mod sockets;
pub mod util;

pub use crate::error::EnergenieError;
pub use crate::logging::{init_logger, log_info};

// Radio stack
pub use radio::hal::{HalError, MockPort, RadioPort};
pub use radio::{EnergenieRadio, Mode, RadioConfig, Rfm69, RxMode};

#[cfg(feature = "raspberry-pi")]
pub use radio::hal::{PiPort, PortConfig};

// Protocol codecs
pub use openthings::{decode, make_switch_message, try_decode, Message, Record};
pub use openthings::value::Value;

// Device facades
pub use sockets::{LegacySocket, MiHomeSocket};

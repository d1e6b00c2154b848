//! # Socket Facades
//!
//! Lightweight handles for the two Energenie device families. A socket
//! holds its addressing and, for MiHome, its precomputed command frames;
//! the shared radio is borrowed per call. Packet loss is compensated by
//! the burst repeat count, not by acknowledgements: legacy sockets are
//! transmit-only, and MiHome adaptors do not ack switch commands.

use crate::error::EnergenieError;
use crate::ook;
use crate::radio::hal::RadioPort;
use crate::radio::{EnergenieRadio, RadioConfig};
use std::thread;
use std::time::Duration;

/// A remote legacy Energenie socket, driven over OOK.
pub struct LegacySocket {
    address: u32,
    channel: u8,
}

impl LegacySocket {
    /// Default burst repeat count for a switch command.
    pub const DEFAULT_TIMES: usize = 8;

    /// A socket on the default house address.
    pub fn new(channel: u8) -> Result<Self, EnergenieError> {
        Self::with_address(ook::DEFAULT_ADDRESS, channel)
    }

    /// A socket on an explicit 20-bit house address. Channel is 1..=4;
    /// channel 0 (all sockets) is reached through
    /// [`switch_to_k`](crate::ook::switch_to_k) directly.
    pub fn with_address(address: u32, channel: u8) -> Result<Self, EnergenieError> {
        if !(1..=4).contains(&channel) {
            return Err(EnergenieError::InvalidParam(format!(
                "legacy socket channel out of range: {channel}"
            )));
        }
        Ok(LegacySocket { address, channel })
    }

    /// Switch the socket, repeating the frame `times` times.
    pub fn set<P: RadioPort>(
        &self,
        radio: &mut EnergenieRadio<P>,
        state: bool,
        times: usize,
    ) -> Result<(), EnergenieError> {
        if !radio.is_on() {
            radio.on()?;
        }
        let k = ook::switch_to_k(self.channel, state)?;
        let payload = ook::encode_msg(self.address, k);
        radio.want_cfg(RadioConfig::Ook)?;
        radio.send(&payload, times)?;
        // short silence at end to stop the switch sticking
        thread::sleep(Duration::from_millis(50));
        Ok(())
    }

    pub fn on<P: RadioPort>(&self, radio: &mut EnergenieRadio<P>) -> Result<(), EnergenieError> {
        self.set(radio, true, Self::DEFAULT_TIMES)
    }

    pub fn off<P: RadioPort>(&self, radio: &mut EnergenieRadio<P>) -> Result<(), EnergenieError> {
        self.set(radio, false, Self::DEFAULT_TIMES)
    }
}

/// A MiHome adaptor, driven over FSK with OpenThings switch commands.
pub struct MiHomeSocket {
    sensor_id: u32,
    on_message: [u8; 14],
    off_message: [u8; 14],
}

impl MiHomeSocket {
    /// Default burst repeat count for a switch command.
    pub const DEFAULT_TIMES: usize = 4;

    /// A socket bound to a sensor id (product id in the high byte, 24-bit
    /// serial below). Both command frames are built once here.
    pub fn new(sensor_id: u32) -> Self {
        MiHomeSocket {
            sensor_id,
            on_message: crate::openthings::make_switch_message(sensor_id, true),
            off_message: crate::openthings::make_switch_message(sensor_id, false),
        }
    }

    pub fn sensor_id(&self) -> u32 {
        self.sensor_id
    }

    /// Switch the socket, repeating the frame `times` times.
    pub fn set<P: RadioPort>(
        &self,
        radio: &mut EnergenieRadio<P>,
        state: bool,
        times: usize,
    ) -> Result<(), EnergenieError> {
        if !radio.is_on() {
            radio.on()?;
        }
        radio.want_cfg(RadioConfig::Fsk)?;
        let message = if state {
            &self.on_message
        } else {
            &self.off_message
        };
        radio.send(message, times)
    }

    pub fn on<P: RadioPort>(&self, radio: &mut EnergenieRadio<P>) -> Result<(), EnergenieError> {
        self.set(radio, true, Self::DEFAULT_TIMES)
    }

    pub fn off<P: RadioPort>(&self, radio: &mut EnergenieRadio<P>) -> Result<(), EnergenieError> {
        self.set(radio, false, Self::DEFAULT_TIMES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_channel_bounds() {
        assert!(LegacySocket::new(0).is_err());
        assert!(LegacySocket::new(1).is_ok());
        assert!(LegacySocket::new(4).is_ok());
        assert!(LegacySocket::new(5).is_err());
    }

    #[test]
    fn test_mihome_precomputed_frames_differ() {
        let socket = MiHomeSocket::new(0x0200_0373);
        assert_ne!(socket.on_message, socket.off_message);
        assert_eq!(socket.sensor_id(), 0x0200_0373);
    }
}

//! # Energenie Radio Facade
//!
//! One RFM69 serves both Energenie device families. The facade owns the
//! driver, tracks which register table is loaded, and lazily reconfigures
//! on demand: switching tables costs more than forty register writes, so
//! [`want_cfg`](EnergenieRadio::want_cfg) is a no-op when the requested
//! configuration is already active.
//!
//! `send` and `recv_into` save and restore the entry mode, so a station
//! that normally sits in receive can transmit a command and fall straight
//! back to listening.

pub mod config;
pub mod hal;
pub mod registers;
pub mod rfm69;

pub use config::RadioConfig;
pub use rfm69::{Mode, Rfm69, RxMode};

use crate::error::EnergenieError;
use crate::openthings;
use crate::radio::hal::RadioPort;
use crate::radio::registers::{MTU, REG_VERSION, VERSION_RFM69};
use log::{debug, info};
use std::time::{Duration, Instant};

/// Dual-configuration radio for Energenie sockets.
pub struct EnergenieRadio<P: RadioPort> {
    rfm: Rfm69<P>,
    cfg: Option<RadioConfig>,
    configured: bool,
    is_on: bool,
    rxbuf: [u8; MTU],
}

impl<P: RadioPort> EnergenieRadio<P> {
    /// Wrap a port. The radio stays unpowered and unconfigured until the
    /// first [`on`](Self::on).
    pub fn new(port: P) -> Self {
        EnergenieRadio {
            rfm: Rfm69::new(port),
            cfg: None,
            configured: false,
            is_on: false,
            rxbuf: [0; MTU],
        }
    }

    pub fn port(&self) -> &P {
        self.rfm.port()
    }

    pub fn port_mut(&mut self) -> &mut P {
        self.rfm.port_mut()
    }

    /// Current driver mode.
    pub fn mode(&self) -> Mode {
        self.rfm.mode()
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Read the chip version register.
    pub fn get_version(&mut self) -> Result<u8, EnergenieError> {
        self.rfm.read_reg(REG_VERSION)
    }

    /// Ensure the requested register table is loaded.
    ///
    /// Cheap when the table is already active; otherwise the chip version
    /// is gated and every table entry is written in declared order.
    pub fn want_cfg(&mut self, cfg: RadioConfig) -> Result<(), EnergenieError> {
        if self.cfg != Some(cfg) {
            self.configure(cfg)?;
            self.cfg = Some(cfg);
        }
        Ok(())
    }

    fn configure(&mut self, cfg: RadioConfig) -> Result<(), EnergenieError> {
        let version = self.get_version()?;
        if version != VERSION_RFM69 {
            return Err(EnergenieError::UnexpectedVersion {
                want: VERSION_RFM69,
                got: version,
            });
        }

        for &(reg, value) in cfg.table() {
            self.rfm.write_reg(reg, value)?;
        }
        self.configured = true;
        info!("radio configured for {cfg:?}");
        Ok(())
    }

    /// Power the radio up: reset and load the default OOK table on first
    /// use, then drop to standby.
    pub fn on(&mut self) -> Result<(), EnergenieError> {
        if !self.configured {
            self.rfm.reset()?;
            self.want_cfg(RadioConfig::Ook)?;
        }
        self.rfm.set_mode(Mode::Standby)?;
        self.is_on = true;
        Ok(())
    }

    /// Transmit a payload `times` times, restoring the entry mode after.
    pub fn send(&mut self, payload: &[u8], times: usize) -> Result<(), EnergenieError> {
        let entry_mode = self.rfm.mode();
        if entry_mode != Mode::Transmit {
            self.rfm.set_mode(Mode::Transmit)?;
        }

        self.rfm.transmit(payload, times)?;

        if self.rfm.mode() != entry_mode {
            self.rfm.set_mode(entry_mode)?;
        }
        Ok(())
    }

    /// Leave the radio permanently in receive.
    ///
    /// This reduces the chance of missing payloads. Only FSK receive is
    /// supported, so the FSK table is forced.
    pub fn always_receive(&mut self) -> Result<(), EnergenieError> {
        self.on()?;
        self.want_cfg(RadioConfig::Fsk)?;
        self.rfm.set_mode(Mode::Receive)
    }

    /// Try to receive a single raw payload into `buf`.
    ///
    /// With `wait_ms` zero the ready flag is tested once; otherwise it is
    /// polled until the deadline passes. Returns the number of bytes in
    /// the buffer including the count byte, or 0 when nothing arrived.
    /// The buffer is neither decrypted nor CRC-checked here.
    pub fn recv_into(&mut self, buf: &mut [u8], wait_ms: u64) -> Result<usize, EnergenieError> {
        let entry_mode = self.rfm.mode();
        if entry_mode != Mode::Receive {
            self.rfm.set_mode(Mode::Receive)?;
        }

        let ready = if wait_ms > 0 {
            let deadline = Instant::now() + Duration::from_millis(wait_ms);
            loop {
                if self.rfm.recv_ready()? {
                    break true;
                }
                if Instant::now() > deadline {
                    break false;
                }
            }
        } else {
            self.rfm.recv_ready()?
        };

        let mut total_length = 0;
        if ready {
            total_length = self.rfm.read_fifo_into(buf)?;
            debug!("received {total_length} raw bytes");
        }

        if self.rfm.mode() != entry_mode {
            self.rfm.set_mode(entry_mode)?;
        }

        Ok(total_length)
    }

    /// Receive, decrypt, and decode one OpenThings message.
    ///
    /// Returns `Ok(None)` when nothing arrived or the frame was malformed.
    pub fn ot_recv(&mut self, wait_ms: u64) -> Result<Option<openthings::Message>, EnergenieError> {
        let mut buf = self.rxbuf;
        let nb = self.recv_into(&mut buf, wait_ms)?;
        self.rxbuf = buf;
        if nb == 0 {
            return Ok(None);
        }
        Ok(openthings::decode(&self.rxbuf[..nb]))
    }

    /// Drop to standby and mark the radio off.
    pub fn off(&mut self) -> Result<(), EnergenieError> {
        self.rfm.set_mode(Mode::Standby)?;
        self.is_on = false;
        Ok(())
    }
}

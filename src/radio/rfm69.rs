//! # RFM69 Driver
//!
//! Register-level driver for the HopeRF RFM69(HCW) transceiver: register
//! access over the SPI port, the explicit mode state machine, burst FIFO
//! transmit, and count-byte-prefixed FIFO receive.
//!
//! All waits are synchronous polls of the IRQ flag registers. That is the
//! right shape for this stack: transitions settle in microseconds, the
//! caller owns the thread, and there is no other work to yield to.

use crate::error::EnergenieError;
use crate::radio::hal::RadioPort;
use crate::radio::registers::*;
use log::{debug, warn};

/// Radio operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Standby,
    Transmit,
    Receive,
}

impl Mode {
    /// The OPMODE register value for this mode.
    pub fn opmode(self) -> u8 {
        match self {
            Mode::Standby => OPMODE_STANDBY,
            Mode::Transmit => OPMODE_TRANSMIT,
            Mode::Receive => OPMODE_RECEIVE,
        }
    }
}

/// How receive readiness is detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RxMode {
    /// Poll the PAYLOAD_READY flag over SPI (the authoritative path).
    Poll,
    /// Sample the DIO0 line level instead.
    Interrupt,
}

/// Register-level RFM69 driver over a [`RadioPort`].
pub struct Rfm69<P: RadioPort> {
    port: P,
    mode: Mode,
    rx_mode: RxMode,
}

impl<P: RadioPort> Rfm69<P> {
    pub fn new(port: P) -> Self {
        Rfm69 {
            port,
            mode: Mode::Standby,
            rx_mode: RxMode::Poll,
        }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    pub fn set_rx_mode(&mut self, rx_mode: RxMode) {
        self.rx_mode = rx_mode;
    }

    /// Read a register value.
    pub fn read_reg(&mut self, addr: u8) -> Result<u8, EnergenieError> {
        let tx = [addr & !WRITE_MASK, 0x00];
        let mut rx = [0u8; 2];
        self.port.transfer(&tx, &mut rx)?;
        Ok(rx[1])
    }

    /// Write a register value.
    pub fn write_reg(&mut self, addr: u8, value: u8) -> Result<(), EnergenieError> {
        self.port.write(&[addr | WRITE_MASK, value], true)?;
        Ok(())
    }

    /// Poll a register until `(value & mask) == expected`.
    pub fn wait_reg(&mut self, addr: u8, mask: u8, expected: u8) -> Result<(), EnergenieError> {
        loop {
            if self.read_reg(addr)? & mask == expected {
                return Ok(());
            }
        }
    }

    /// Hard reset the radio. Mode tracking resets to standby.
    pub fn reset(&mut self) -> Result<(), EnergenieError> {
        self.port.txing(false);
        self.port.rxing(false);
        self.port.reset()?;
        self.mode = Mode::Standby;
        Ok(())
    }

    /// Transition to `mode`, waiting for the hardware ready flags.
    ///
    /// The full sequence runs even when `mode` equals the current mode;
    /// callers use that to re-arm a stuck receiver.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), EnergenieError> {
        self.port.txing(false);
        self.port.rxing(false);

        self.write_reg(REG_OPMODE, mode.opmode())?;

        match mode {
            Mode::Transmit => {
                const FLAGS: u8 = IRQ1_MODE_READY | IRQ1_TX_READY;
                self.wait_reg(REG_IRQFLAGS1, FLAGS, FLAGS)?;
                self.port.txing(true);
            }
            Mode::Receive => {
                self.wait_reg(REG_IRQFLAGS1, IRQ1_MODE_READY, IRQ1_MODE_READY)?;
                self.port.rxing(true);
            }
            Mode::Standby => {
                self.wait_reg(REG_IRQFLAGS1, IRQ1_MODE_READY, IRQ1_MODE_READY)?;
            }
        }

        self.mode = mode;
        debug!("RFM69 mode set to {mode:?}");
        Ok(())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Transmit `payload` `times` times back to back.
    ///
    /// Precondition: the radio is in transmit mode. The FIFO threshold is
    /// set to one below the payload length so each freshly loaded payload
    /// starts clocking out immediately, with no per-packet command
    /// round-trip between repeats. That is what meets the repetition timing
    /// legacy OOK receivers need.
    pub fn transmit(&mut self, payload: &[u8], times: usize) -> Result<(), EnergenieError> {
        if payload.is_empty() || payload.len() > MAX_TX_PAYLOAD {
            return Err(EnergenieError::InvalidParam(format!(
                "payload length {} outside 1..={MAX_TX_PAYLOAD}",
                payload.len()
            )));
        }
        if times < 1 {
            return Err(EnergenieError::InvalidParam("times must be at least 1".into()));
        }

        // TX auto-starts when the FIFO count strictly exceeds the threshold,
        // so a full payload load is immediately eligible
        self.write_reg(REG_FIFOTHRESH, (payload.len() - 1) as u8)?;

        for _ in 0..times {
            self.write_fifo(payload)?;
            // wait for the FIFO to drain back below the threshold
            self.wait_reg(REG_IRQFLAGS2, IRQ2_FIFO_LEVEL, 0)?;
        }

        // last byte clocked out
        self.wait_reg(REG_IRQFLAGS2, IRQ2_FIFO_NOT_EMPTY, 0)
    }

    /// Load one payload into the FIFO in a single CS-held burst.
    fn write_fifo(&mut self, payload: &[u8]) -> Result<(), EnergenieError> {
        self.port.select()?;
        self.port.write_byte(REG_FIFO | WRITE_MASK)?;
        self.port.write(payload, false)?;
        self.port.deselect()?;
        Ok(())
    }

    /// Is there something to be received?
    pub fn recv_ready(&mut self) -> Result<bool, EnergenieError> {
        match self.rx_mode {
            RxMode::Interrupt => Ok(self.port.is_int()),
            RxMode::Poll => {
                Ok(self.read_reg(REG_IRQFLAGS2)? & IRQ2_PAYLOAD_READY == IRQ2_PAYLOAD_READY)
            }
        }
    }

    /// Drain one count-byte-prefixed frame from the FIFO.
    ///
    /// On success `rxbuf[0]` holds the count byte, `rxbuf[1..=count]` the
    /// frame, and the return value is `count + 1`. A frame larger than the
    /// buffer drains the FIFO and returns 0; the next poll picks up the
    /// next frame. Only call when [`recv_ready`](Self::recv_ready) reports
    /// true.
    pub fn read_fifo_into(&mut self, rxbuf: &mut [u8]) -> Result<usize, EnergenieError> {
        rxbuf.fill(0);

        self.port.select()?;
        self.port.read_byte(REG_FIFO)?; // prime the burst receiver

        let length = self.port.read_byte(REG_FIFO)? as usize;
        if length + 1 > rxbuf.len() {
            self.port.deselect()?;
            warn!(
                "{}",
                EnergenieError::FifoOverrun {
                    want: length + 1,
                    have: rxbuf.len(),
                }
            );
            self.clear_fifo()?;
            return Ok(0);
        }

        rxbuf[0] = length as u8;
        for slot in rxbuf[1..=length].iter_mut() {
            *slot = self.port.read_byte(REG_FIFO)?;
        }
        self.port.deselect()?;

        Ok(length + 1)
    }

    /// Discard FIFO contents until the not-empty flag clears.
    pub fn clear_fifo(&mut self) -> Result<(), EnergenieError> {
        while self.read_reg(REG_IRQFLAGS2)? & IRQ2_FIFO_NOT_EMPTY != 0 {
            self.read_reg(REG_FIFO)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radio::hal::MockPort;

    #[test]
    fn test_read_reg_framing() {
        let mut rfm = Rfm69::new(MockPort::new());
        assert_eq!(rfm.read_reg(REG_VERSION).unwrap(), VERSION_RFM69);
    }

    #[test]
    fn test_write_reg_sets_write_bit() {
        let mut rfm = Rfm69::new(MockPort::new());
        rfm.write_reg(REG_FIFOTHRESH, 13).unwrap();
        assert_eq!(rfm.port().reg_writes(), vec![(REG_FIFOTHRESH, 13)]);
    }

    #[test]
    fn test_transmit_rejects_bad_lengths() {
        let mut rfm = Rfm69::new(MockPort::new());
        assert!(rfm.transmit(&[], 1).is_err());
        assert!(rfm.transmit(&[0u8; 33], 1).is_err());
        assert!(rfm.transmit(&[0u8; 4], 0).is_err());
    }

    #[test]
    fn test_mode_reruns_when_unchanged() {
        let mut rfm = Rfm69::new(MockPort::new());
        rfm.set_mode(Mode::Standby).unwrap();
        rfm.set_mode(Mode::Standby).unwrap();
        let opmodes: Vec<_> = rfm
            .port()
            .reg_writes()
            .into_iter()
            .filter(|(addr, _)| *addr == REG_OPMODE)
            .collect();
        assert_eq!(opmodes, vec![(REG_OPMODE, 0x04), (REG_OPMODE, 0x04)]);
    }

    #[test]
    fn test_oversize_frame_drains_fifo() {
        let mut rfm = Rfm69::new(MockPort::new());
        let mut frame = vec![70u8]; // longer than any buffer below
        frame.extend(std::iter::repeat(0xAA).take(70));
        rfm.port_mut().queue_fifo(&frame);

        let mut rxbuf = [0u8; 66];
        assert_eq!(rfm.read_fifo_into(&mut rxbuf).unwrap(), 0);
        assert!(rfm.port().fifo_is_empty());
    }
}

//! Mock radio port for testing
//!
//! This module provides a mock SPI/GPIO port that can be used to exercise
//! the RFM69 driver and radio facade without hardware. Register reads are
//! served from a scripted map, FIFO reads from a queued byte stream, and
//! every bus transaction is recorded for later inspection.

use crate::radio::hal::{HalError, RadioPort};
use crate::radio::registers::{
    IRQ2_FIFO_NOT_EMPTY, REG_FIFO, REG_IRQFLAGS1, REG_IRQFLAGS2, REG_VERSION, VERSION_RFM69,
    WRITE_MASK,
};
use crate::util::hex::hexstr;
use log::debug;
use std::collections::{HashMap, VecDeque};

/// One recorded bus event.
#[derive(Debug, Clone, PartialEq)]
pub enum Transaction {
    Select,
    Deselect,
    /// A shift of `tx`, with `rx` what the mock clocked back. `select` is
    /// false for burst continuations where the caller held chip-select.
    Transfer {
        tx: Vec<u8>,
        rx: Vec<u8>,
        select: bool,
    },
    /// Single-byte shift with CS held by the caller.
    Byte { tx: u8, rx: u8 },
    Reset,
}

/// Mock port with scripted reads and a transaction log.
pub struct MockPort {
    /// Scripted register values served to reads (writes land here too).
    regs: HashMap<u8, u8>,
    /// Byte stream served to FIFO reads.
    fifo: VecDeque<u8>,
    /// Every bus event, in order.
    log: Vec<Transaction>,
    /// First shift after select primes the burst and returns status garbage.
    burst_primed: bool,
}

impl Default for MockPort {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPort {
    /// A mock that looks like an idle, ready RFM69: version 0x24, mode and
    /// TX ready flags set, FIFO empty.
    pub fn new() -> Self {
        let mut regs = HashMap::new();
        regs.insert(REG_VERSION, VERSION_RFM69);
        regs.insert(REG_IRQFLAGS1, 0xA0);
        regs.insert(REG_IRQFLAGS2, 0x00);
        MockPort {
            regs,
            fifo: VecDeque::new(),
            log: Vec::new(),
            burst_primed: false,
        }
    }

    /// Script the value a register read returns.
    pub fn set_reg(&mut self, addr: u8, value: u8) {
        self.regs.insert(addr, value);
    }

    /// Queue bytes to be served by FIFO reads. The FIFO-not-empty flag
    /// follows this queue automatically.
    pub fn queue_fifo(&mut self, data: &[u8]) {
        self.fifo.extend(data);
    }

    /// True when every queued FIFO byte has been drained.
    pub fn fifo_is_empty(&self) -> bool {
        self.fifo.is_empty()
    }

    /// The full transaction log, in bus order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.log
    }

    /// Forget recorded traffic (scripted registers and FIFO are kept).
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// The register writes in the log, in order, as `(addr, value)`.
    pub fn reg_writes(&self) -> Vec<(u8, u8)> {
        self.log
            .iter()
            .filter_map(|t| match t {
                Transaction::Transfer { tx, select: true, .. }
                    if tx.len() == 2 && tx[0] & WRITE_MASK != 0 =>
                {
                    Some((tx[0] & !WRITE_MASK, tx[1]))
                }
                _ => None,
            })
            .collect()
    }

    /// Number of CS-held FIFO burst writes in the log.
    pub fn fifo_burst_count(&self) -> usize {
        self.log
            .iter()
            .filter(|t| matches!(t, Transaction::Byte { tx, .. } if *tx == (REG_FIFO | WRITE_MASK)))
            .count()
    }

    fn reg(&self, addr: u8) -> u8 {
        let v = *self.regs.get(&addr).unwrap_or(&0);
        if addr == REG_IRQFLAGS2 && !self.fifo.is_empty() {
            v | IRQ2_FIFO_NOT_EMPTY
        } else {
            v
        }
    }

    fn shift_read(&mut self, addr: u8) -> u8 {
        if addr == REG_FIFO {
            self.fifo.pop_front().unwrap_or(0)
        } else {
            self.reg(addr)
        }
    }
}

impl RadioPort for MockPort {
    fn transfer(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<(), HalError> {
        if tx[0] & WRITE_MASK == 0 {
            // register read: first byte back is status garbage, the rest
            // stream from the addressed register
            let addr = tx[0];
            for slot in rx.iter_mut().skip(1) {
                *slot = self.shift_read(addr);
            }
        } else {
            self.regs.insert(tx[0] & !WRITE_MASK, *tx.last().unwrap_or(&0));
        }
        debug!("spi xfer {} -> {}", hexstr(tx), hexstr(rx));
        self.log.push(Transaction::Transfer {
            tx: tx.to_vec(),
            rx: rx.to_vec(),
            select: true,
        });
        Ok(())
    }

    fn write(&mut self, tx: &[u8], select: bool) -> Result<(), HalError> {
        if select && tx.len() == 2 && tx[0] & WRITE_MASK != 0 {
            self.regs.insert(tx[0] & !WRITE_MASK, tx[1]);
        }
        debug!("spi write {}", hexstr(tx));
        self.log.push(Transaction::Transfer {
            tx: tx.to_vec(),
            rx: Vec::new(),
            select,
        });
        Ok(())
    }

    fn write_byte(&mut self, b: u8) -> Result<(), HalError> {
        self.burst_primed = true;
        self.log.push(Transaction::Byte { tx: b, rx: 0 });
        Ok(())
    }

    fn read_byte(&mut self, tx_filler: u8) -> Result<u8, HalError> {
        // the first shift of a burst returns whatever was in the shift
        // register, not FIFO data
        let rx = if self.burst_primed {
            self.shift_read(tx_filler & !WRITE_MASK)
        } else {
            self.burst_primed = true;
            0
        };
        self.log.push(Transaction::Byte { tx: tx_filler, rx });
        Ok(rx)
    }

    fn select(&mut self) -> Result<(), HalError> {
        self.burst_primed = false;
        self.log.push(Transaction::Select);
        Ok(())
    }

    fn deselect(&mut self) -> Result<(), HalError> {
        self.log.push(Transaction::Deselect);
        Ok(())
    }

    fn reset(&mut self) -> Result<(), HalError> {
        self.log.push(Transaction::Reset);
        Ok(())
    }

    fn txing(&mut self, _on: bool) {}

    fn rxing(&mut self, _on: bool) {}

    fn is_int(&mut self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radio::registers::REG_OPMODE;

    #[test]
    fn test_scripted_register_read() {
        let mut port = MockPort::new();
        port.set_reg(0x27, 0xA0);

        let tx = [0x27, 0x00];
        let mut rx = [0u8; 2];
        port.transfer(&tx, &mut rx).unwrap();
        assert_eq!(rx[1], 0xA0);
    }

    #[test]
    fn test_write_is_logged_and_latched() {
        let mut port = MockPort::new();
        port.write(&[REG_OPMODE | WRITE_MASK, 0x0C], true).unwrap();
        assert_eq!(port.reg_writes(), vec![(REG_OPMODE, 0x0C)]);
        assert_eq!(port.reg(REG_OPMODE), 0x0C);
    }

    #[test]
    fn test_fifo_queue_and_prime() {
        let mut port = MockPort::new();
        port.queue_fifo(&[0x0D, 0x04]);

        port.select().unwrap();
        assert_eq!(port.read_byte(REG_FIFO).unwrap(), 0); // prime shift
        assert_eq!(port.read_byte(REG_FIFO).unwrap(), 0x0D);
        assert_eq!(port.read_byte(REG_FIFO).unwrap(), 0x04);
        assert_eq!(port.read_byte(REG_FIFO).unwrap(), 0); // drained
        port.deselect().unwrap();
    }

    #[test]
    fn test_fifo_not_empty_tracks_queue() {
        let mut port = MockPort::new();
        assert_eq!(port.reg(REG_IRQFLAGS2) & IRQ2_FIFO_NOT_EMPTY, 0);
        port.queue_fifo(&[0xAA]);
        assert_ne!(port.reg(REG_IRQFLAGS2) & IRQ2_FIFO_NOT_EMPTY, 0);
    }
}

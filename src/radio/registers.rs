//! # RFM69 Register Definitions for Energenie Operation
//!
//! Register addresses, flag masks, and the Energenie-specific value
//! constants used by the OOK and FSK configurations. These follow the
//! HopeRF RFM69HCW datasheet; only the registers this stack touches are
//! defined.

// =============================================================================
// Register addresses
// =============================================================================

/// FIFO read/write access register
pub const REG_FIFO: u8 = 0x00;

/// Operating mode selection
pub const REG_OPMODE: u8 = 0x01;

/// Data processing mode and modulation scheme
pub const REG_DATAMODUL: u8 = 0x02;

/// Bit rate setting (MSB/LSB)
pub const REG_BITRATEMSB: u8 = 0x03;
pub const REG_BITRATELSB: u8 = 0x04;

/// Frequency deviation setting (MSB/LSB)
pub const REG_FDEVMSB: u8 = 0x05;
pub const REG_FDEVLSB: u8 = 0x06;

/// RF carrier frequency setting (MSB/MID/LSB)
pub const REG_FRMSB: u8 = 0x07;
pub const REG_FRMID: u8 = 0x08;
pub const REG_FRLSB: u8 = 0x09;

/// AFC control in low modulation index situations
pub const REG_AFCCTRL: u8 = 0x0B;

/// Chip version (read-only)
pub const REG_VERSION: u8 = 0x10;

/// PA selection and output power control
pub const REG_PALEVEL: u8 = 0x11;

/// LNA settings
pub const REG_LNA: u8 = 0x18;

/// Channel filter bandwidth control
pub const REG_RXBW: u8 = 0x19;

/// Mapping of pins DIO0 to DIO3
pub const REG_DIOMAPPING1: u8 = 0x25;

/// Status register: mode ready, TX/RX ready, PLL lock
pub const REG_IRQFLAGS1: u8 = 0x27;

/// Status register: FIFO handling flags
pub const REG_IRQFLAGS2: u8 = 0x28;

/// RSSI trigger level for RSSI interrupt
pub const REG_RSSITHRESH: u8 = 0x29;

/// Preamble length (MSB/LSB)
pub const REG_PREAMBLEMSB: u8 = 0x2C;
pub const REG_PREAMBLELSB: u8 = 0x2D;

/// Sync word recognition control
pub const REG_SYNCCONFIG: u8 = 0x2E;

/// Sync word bytes 1 and 2
pub const REG_SYNCVALUE1: u8 = 0x2F;
pub const REG_SYNCVALUE2: u8 = 0x30;

/// Packet mode settings
pub const REG_PACKETCONFIG1: u8 = 0x37;

/// Payload length (max length in RX for variable-length packets)
pub const REG_PAYLOADLEN: u8 = 0x38;

/// Node address used in address filtering
pub const REG_NODEADRS: u8 = 0x39;

/// FIFO threshold, TX start condition
pub const REG_FIFOTHRESH: u8 = 0x3C;

// =============================================================================
// Register access
// =============================================================================

/// High bit of the address byte selects a register write.
pub const WRITE_MASK: u8 = 0x80;

/// Value the version register must read back.
pub const VERSION_RFM69: u8 = 0x24;

// =============================================================================
// Operating modes (REG_OPMODE)
// =============================================================================

pub const OPMODE_STANDBY: u8 = 0x04;
pub const OPMODE_TRANSMIT: u8 = 0x0C;
pub const OPMODE_RECEIVE: u8 = 0x10;

// =============================================================================
// IRQ flags
// =============================================================================

/// IRQ flags in REG_IRQFLAGS1
pub const IRQ1_MODE_READY: u8 = 0x80;
pub const IRQ1_RX_READY: u8 = 0x40;
pub const IRQ1_TX_READY: u8 = 0x20;

/// IRQ flags in REG_IRQFLAGS2
pub const IRQ2_FIFO_FULL: u8 = 0x80;
pub const IRQ2_FIFO_NOT_EMPTY: u8 = 0x40;
pub const IRQ2_FIFO_LEVEL: u8 = 0x20;
pub const IRQ2_FIFO_OVERRUN: u8 = 0x10;
pub const IRQ2_PACKET_SENT: u8 = 0x08;
pub const IRQ2_PAYLOAD_READY: u8 = 0x04;

// =============================================================================
// Energenie-specific value constants
// =============================================================================

/// Modulation scheme: on-off keyed / FSK
pub const DATAMODUL_OOK: u8 = 0x08;
pub const DATAMODUL_FSK: u8 = 0x00;

/// PA_BOOST via PA1, -18 dBm + 28 = +10 dBm (the UK duty/bandwidth limit)
pub const PALEVEL_PABOOST_10_DBM: u8 = 0x5C;

/// Carrier 433.92 MHz for legacy OOK sockets
pub const FRMSB_433_92: u8 = 0x6C;
pub const FRMID_433_92: u8 = 0x7A;
pub const FRLSB_433_92: u8 = 0xE1;

/// Carrier 434.3 MHz (0x6C9333) for MiHome FSK
pub const FRMSB_434_3: u8 = 0x6C;
pub const FRMID_434_3: u8 = 0x93;
pub const FRLSB_434_3: u8 = 0x33;

/// Frequency deviation 30 kHz (0x01EC) for FSK
pub const FDEVMSB_30: u8 = 0x01;
pub const FDEVLSB_30: u8 = 0xEC;

/// Channel filter bandwidth 60 kHz / 120 kHz
pub const RXBW_60: u8 = 0x43;
pub const RXBW_120: u8 = 0x41;

/// LNA input impedance 50 ohms, gain by AGC loop
pub const LNA_50: u8 = 0x08;

/// Sync word disabled / 2 transmitted sync bytes
pub const SYNCCONFIG_NONE: u8 = 0x00;
pub const SYNCCONFIG_2: u8 = 0x88;

// =============================================================================
// Sizing
// =============================================================================

/// Maximum transmission unit: the receive buffer size for FSK frames.
pub const MTU: usize = 66;

/// Burst transmit payload cap, half the RFM69 FIFO.
pub const MAX_TX_PAYLOAD: usize = 32;

/// SPI bus speed for the port implementations.
pub const SPI_SPEED: u32 = 1_000_000;

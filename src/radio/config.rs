//! # Energenie Radio Configurations
//!
//! Two canonical register tables share the one RFM69: an OOK table for
//! legacy HS1527 sockets and an FSK table for MiHome OpenThings devices.
//! Ordering within a table is significant; the facade applies each table
//! literally in sequence.

use crate::radio::registers::*;

/// Which register table is loaded in the radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioConfig {
    /// Legacy OOK sockets: 433.92 MHz, 4800 b/s, no hardware framing.
    Ook,
    /// MiHome FSK sockets: 434.3 MHz, 30 kHz deviation, 2D D4 sync,
    /// Manchester-coded variable-length packets.
    Fsk,
}

impl RadioConfig {
    /// The register table for this configuration, in apply order.
    pub fn table(self) -> &'static [(u8, u8)] {
        match self {
            RadioConfig::Ook => OOK_ENERGENIE_CFG,
            RadioConfig::Fsk => FSK_ENERGENIE_CFG,
        }
    }
}

/// Legacy OOK transmit configuration.
///
/// No hardware preamble or sync word: the whole bit stream is user-defined
/// payload, so the HS1527 symbol encoder controls everything on air.
static OOK_ENERGENIE_CFG: &[(u8, u8)] = &[
    (REG_PALEVEL, PALEVEL_PABOOST_10_DBM),
    (REG_AFCCTRL, 0x20),            // improved AFC routine
    (REG_LNA, 0x00),                // LNA 50 ohm, set by AGC loop
    (REG_RSSITHRESH, 0xF0),         // 120*2
    (REG_DIOMAPPING1, 0x04),        // DIO2=DATA in TX/RX
    (REG_DATAMODUL, DATAMODUL_OOK),
    (REG_FDEVMSB, 0),               // frequency deviation 0 kHz
    (REG_FDEVLSB, 0),
    (REG_FRMSB, FRMSB_433_92),
    (REG_FRMID, FRMID_433_92),
    (REG_FRLSB, FRLSB_433_92),
    (REG_RXBW, RXBW_120),
    (REG_BITRATEMSB, 0x1A),         // 4800 b/s (4-bit symbols, 1200 b/s effective)
    (REG_BITRATELSB, 0x00),
    (REG_PREAMBLEMSB, 0),
    (REG_PREAMBLELSB, 0),           // no preamble, done in payload
    (REG_SYNCCONFIG, SYNCCONFIG_NONE),
    (REG_PACKETCONFIG1, 0x80),      // TX variable length, no Manchester coding
    (REG_PAYLOADLEN, 0),
];

/// MiHome FSK configuration.
static FSK_ENERGENIE_CFG: &[(u8, u8)] = &[
    (REG_PALEVEL, PALEVEL_PABOOST_10_DBM),
    (REG_DATAMODUL, DATAMODUL_FSK),
    (REG_AFCCTRL, 0x00),            // standard AFC routine
    (REG_LNA, LNA_50),
    (REG_FDEVMSB, FDEVMSB_30),      // deviation 30 kHz
    (REG_FDEVLSB, FDEVLSB_30),
    (REG_FRMSB, FRMSB_434_3),
    (REG_FRMID, FRMID_434_3),
    (REG_FRLSB, FRLSB_434_3),
    (REG_RXBW, RXBW_60),
    (REG_BITRATEMSB, 0x1A),         // 4800 b/s
    (REG_BITRATELSB, 0x0B),
    (REG_SYNCCONFIG, SYNCCONFIG_2),
    (REG_SYNCVALUE1, 0x2D),
    (REG_SYNCVALUE2, 0xD4),
    (REG_PACKETCONFIG1, 0xA0),      // variable length, Manchester coding
    (REG_PAYLOADLEN, MTU as u8),    // max length in RX, unused in TX
    (REG_NODEADRS, 0x06),           // not used, address filtering is off
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_match_spec_order() {
        // mode-sensitive registers must be written before dependent ones;
        // the modulation scheme entry has to precede the bitrate entries
        let ook = RadioConfig::Ook.table();
        let datamodul = ook.iter().position(|e| e.0 == REG_DATAMODUL).unwrap();
        let bitrate = ook.iter().position(|e| e.0 == REG_BITRATEMSB).unwrap();
        assert!(datamodul < bitrate);

        assert_eq!(ook[0], (REG_PALEVEL, PALEVEL_PABOOST_10_DBM));
        assert_eq!(ook.last(), Some(&(REG_PAYLOADLEN, 0)));
    }

    #[test]
    fn test_fsk_sync_word() {
        let fsk = RadioConfig::Fsk.table();
        assert!(fsk.contains(&(REG_SYNCVALUE1, 0x2D)));
        assert!(fsk.contains(&(REG_SYNCVALUE2, 0xD4)));
        assert!(fsk.contains(&(REG_PACKETCONFIG1, 0xA0)));
    }

    #[test]
    fn test_both_carriers() {
        let ook = RadioConfig::Ook.table();
        let fsk = RadioConfig::Fsk.table();
        assert!(ook.contains(&(REG_FRMID, 0x7A))); // 433.92 MHz
        assert!(fsk.contains(&(REG_FRMID, 0x93))); // 434.3 MHz
    }
}

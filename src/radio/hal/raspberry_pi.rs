//! # Raspberry Pi Port Implementation
//!
//! SPI/GPIO port for an RFM69 wired to a Raspberry Pi 4 or 5, built on the
//! rppal crate. The RFM69 burst protocol needs chip-select held across
//! multiple shifts, so CS is driven from a plain GPIO output rather than
//! the controller's hardware slave select.
//!
//! SPI is mode 0, MSB first, 1 MHz. Enable the bus with `dtparam=spi=on`
//! in `/boot/config.txt`.

use crate::radio::hal::{HalError, RadioPort};
use crate::radio::registers::SPI_SPEED;
use log::info;
use rppal::gpio::{Gpio, InputPin, Level, OutputPin};
use rppal::spi::{Bus, Mode, SlaveSelect, Spi};
use serde::{Deserialize, Serialize};
use std::thread;
use std::time::Duration;

/// Pin assignment for the radio, BCM GPIO numbering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortConfig {
    /// SPI bus number (0 for the primary controller)
    pub spi_bus: u8,
    /// Chip select output
    pub cs_pin: u8,
    /// Radio reset output (active high)
    pub reset_pin: Option<u8>,
    /// DIO0 interrupt input
    pub int_pin: Option<u8>,
    /// Transmit indicator LED output
    pub tx_led_pin: Option<u8>,
    /// Receive indicator LED output
    pub rx_led_pin: Option<u8>,
}

impl Default for PortConfig {
    fn default() -> Self {
        Self {
            spi_bus: 0,
            cs_pin: 8,
            reset_pin: Some(25),
            int_pin: Some(24),
            tx_led_pin: None,
            rx_led_pin: None,
        }
    }
}

/// rppal-backed radio port.
pub struct PiPort {
    spi: Spi,
    cs: OutputPin,
    reset: Option<OutputPin>,
    int: Option<InputPin>,
    tx_led: Option<OutputPin>,
    rx_led: Option<OutputPin>,
}

impl PiPort {
    /// Open the SPI bus and claim the configured GPIO pins.
    pub fn new(config: &PortConfig) -> Result<Self, HalError> {
        let bus = match config.spi_bus {
            0 => Bus::Spi0,
            1 => Bus::Spi1,
            n => {
                return Err(HalError::InvalidConfig(format!("unknown SPI bus: {n}")));
            }
        };

        let spi = Spi::new(bus, SlaveSelect::Ss0, SPI_SPEED, Mode::Mode0)
            .map_err(|e| HalError::Spi(format!("failed to open SPI: {e}")))?;

        let gpio = Gpio::new().map_err(|e| HalError::Gpio(format!("failed to open GPIO: {e}")))?;

        let claim_output = |pin: u8| -> Result<OutputPin, HalError> {
            Ok(gpio
                .get(pin)
                .map_err(|e| HalError::Gpio(format!("failed to claim GPIO {pin}: {e}")))?
                .into_output())
        };

        let mut cs = claim_output(config.cs_pin)?;
        cs.set_high(); // idle deselected

        let reset = config.reset_pin.map(&claim_output).transpose()?;
        let tx_led = config.tx_led_pin.map(&claim_output).transpose()?;
        let rx_led = config.rx_led_pin.map(&claim_output).transpose()?;

        let int = config
            .int_pin
            .map(|pin| -> Result<InputPin, HalError> {
                Ok(gpio
                    .get(pin)
                    .map_err(|e| HalError::Gpio(format!("failed to claim GPIO {pin}: {e}")))?
                    .into_input())
            })
            .transpose()?;

        info!(
            "radio port on SPI{} cs={} reset={:?} int={:?}",
            config.spi_bus, config.cs_pin, config.reset_pin, config.int_pin
        );

        Ok(Self {
            spi,
            cs,
            reset,
            int,
            tx_led,
            rx_led,
        })
    }
}

impl RadioPort for PiPort {
    fn transfer(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<(), HalError> {
        self.cs.set_low();
        let result = self
            .spi
            .transfer(rx, tx)
            .map(|_| ())
            .map_err(|e| HalError::Spi(format!("transfer failed: {e}")));
        self.cs.set_high();
        result
    }

    fn write(&mut self, tx: &[u8], select: bool) -> Result<(), HalError> {
        if select {
            self.cs.set_low();
        }
        let result = self
            .spi
            .write(tx)
            .map(|_| ())
            .map_err(|e| HalError::Spi(format!("write failed: {e}")));
        if select {
            self.cs.set_high();
        }
        result
    }

    fn write_byte(&mut self, b: u8) -> Result<(), HalError> {
        self.spi
            .write(&[b])
            .map(|_| ())
            .map_err(|e| HalError::Spi(format!("byte write failed: {e}")))
    }

    fn read_byte(&mut self, tx_filler: u8) -> Result<u8, HalError> {
        let mut rx = [0u8; 1];
        self.spi
            .transfer(&mut rx, &[tx_filler])
            .map_err(|e| HalError::Spi(format!("byte read failed: {e}")))?;
        Ok(rx[0])
    }

    fn select(&mut self) -> Result<(), HalError> {
        self.cs.set_low();
        Ok(())
    }

    fn deselect(&mut self) -> Result<(), HalError> {
        self.cs.set_high();
        Ok(())
    }

    fn reset(&mut self) -> Result<(), HalError> {
        if let Some(ref mut reset) = self.reset {
            reset.set_high();
            thread::sleep(Duration::from_millis(150));
            reset.set_low();
            // long holdoff before the first register access
            thread::sleep(Duration::from_millis(100));
        }
        Ok(())
    }

    fn txing(&mut self, on: bool) {
        if let Some(ref mut led) = self.tx_led {
            if on {
                led.set_high();
            } else {
                led.set_low();
            }
        }
    }

    fn rxing(&mut self, on: bool) {
        if let Some(ref mut led) = self.rx_led {
            if on {
                led.set_high();
            } else {
                led.set_low();
            }
        }
    }

    fn is_int(&mut self) -> bool {
        self.int
            .as_ref()
            .map(|pin| pin.read() == Level::High)
            .unwrap_or(false)
    }
}

//! Byte transports for the two-wire strip bus.
//!
//! The frame encoder in [`crate::strip`] is transport-agnostic: a
//! hardware SPI peripheral and a pair of bit-banged GPIO lines must
//! carry the exact same byte stream. Both backends implement the
//! [`Transport`] trait from the crate root.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{Mode, Phase, Polarity, SpiBus};

use crate::Transport;

/// SPI mode the strip expects: clock idle low, data latched on the
/// rising edge, most significant bit first.
pub const SPI_MODE: Mode = Mode {
    polarity: Polarity::IdleLow,
    phase: Phase::CaptureOnFirstTransition,
};

/// Hardware-clocked transport over an [`SpiBus`].
///
/// Configure the bus with [`SPI_MODE`] when setting up the peripheral.
/// Anything up to roughly 20 MHz clocks APA102 strips reliably; much
/// below 8 MHz and bit-banging is nearly as fast.
pub struct SpiTransport<SPI> {
    spi: SPI,
}

impl<SPI: SpiBus> SpiTransport<SPI> {
    /// Wrap a configured SPI bus.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Shared access to the underlying bus.
    pub const fn bus(&self) -> &SPI {
        &self.spi
    }

    /// Exclusive access to the underlying bus.
    pub const fn bus_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Give the bus back, e.g. to hand it to another device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI: SpiBus> Transport for SpiTransport<SPI> {
    fn activate(&mut self) {}

    fn write_byte(&mut self, byte: u8) {
        // The strip has no feedback channel; bus errors join every
        // other fault in this protocol on the floor.
        let _ = self.spi.write(&[byte]);
    }

    fn flush(&mut self) {
        let _ = self.spi.flush();
    }

    fn deactivate(&mut self) {
        let _ = self.spi.flush();
    }
}

/// Software transport driving data and clock lines directly.
///
/// Each bit sets the data line to the bit value, then pulses the clock
/// high and low. Slower than hardware SPI but runs on any two output
/// pins.
pub struct BitBangTransport<Data, Clk> {
    data: Data,
    clock: Clk,
}

impl<Data: OutputPin, Clk: OutputPin> BitBangTransport<Data, Clk> {
    /// Take ownership of the data and clock lines.
    pub const fn new(data: Data, clock: Clk) -> Self {
        Self { data, clock }
    }

    /// Give the pins back for reuse or reconfiguration.
    pub fn release(self) -> (Data, Clk) {
        (self.data, self.clock)
    }
}

impl<Data: OutputPin, Clk: OutputPin> Transport for BitBangTransport<Data, Clk> {
    fn activate(&mut self) {
        let _ = self.data.set_low();
        let _ = self.clock.set_low();
    }

    fn write_byte(&mut self, byte: u8) {
        let mut bits = byte;
        for _ in 0..8 {
            if bits & 0x80 == 0 {
                let _ = self.data.set_low();
            } else {
                let _ = self.data.set_high();
            }
            let _ = self.clock.set_high();
            let _ = self.clock.set_low();
            bits <<= 1;
        }
    }

    fn deactivate(&mut self) {
        // `OutputPin` cannot float the lines, so park them at the bus
        // idle level. Callers that need true high-impedance take the
        // pins back via `release` and reconfigure them in their HAL.
        let _ = self.data.set_low();
        let _ = self.clock.set_low();
    }
}

/// Either transport, for strips that switch backends at runtime.
pub enum StripTransport<SPI, Data, Clk> {
    /// Hardware-clocked SPI peripheral.
    Spi(SpiTransport<SPI>),
    /// Bit-banged GPIO pair.
    BitBang(BitBangTransport<Data, Clk>),
}

impl<SPI: SpiBus, Data: OutputPin, Clk: OutputPin> Transport for StripTransport<SPI, Data, Clk> {
    fn activate(&mut self) {
        match self {
            Self::Spi(spi) => spi.activate(),
            Self::BitBang(pins) => pins.activate(),
        }
    }

    fn write_byte(&mut self, byte: u8) {
        match self {
            Self::Spi(spi) => spi.write_byte(byte),
            Self::BitBang(pins) => pins.write_byte(byte),
        }
    }

    fn flush(&mut self) {
        match self {
            Self::Spi(spi) => spi.flush(),
            Self::BitBang(pins) => pins.flush(),
        }
    }

    fn deactivate(&mut self) {
        match self {
            Self::Spi(spi) => spi.deactivate(),
            Self::BitBang(pins) => pins.deactivate(),
        }
    }
}

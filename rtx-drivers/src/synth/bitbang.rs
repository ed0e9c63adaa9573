//! GPIO bit-banged synthesizer bus
//!
//! Each bit is set up on the data line and clocked on the rising edge. The
//! data line idles high between bytes and is pulled low once a complete
//! program has been latched. A burst and its latch pulse run inside one
//! critical section so an interrupt cannot stretch a clock phase or delay
//! the enable edge.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use rtx_hal::{FlexPin, OutputPin};

use super::SerialBus;

/// Half clock period in microseconds
pub const DEFAULT_BIT_DELAY_US: u32 = 2;

/// Three-wire bus driven from GPIO
pub struct BitBangBus<P, D> {
    clk: P,
    dat: P,
    le: P,
    delay: D,
    bit_delay_us: u32,
}

impl<P: FlexPin, D: DelayNs> BitBangBus<P, D> {
    pub fn new(clk: P, dat: P, le: P, delay: D) -> Self {
        Self {
            clk,
            dat,
            le,
            delay,
            bit_delay_us: DEFAULT_BIT_DELAY_US,
        }
    }

    /// Override the half clock period
    pub fn with_bit_delay(mut self, us: u32) -> Self {
        self.bit_delay_us = us;
        self
    }

    fn write_byte(&mut self, byte: u8) {
        for bit in (0..8).rev() {
            self.dat.set_state(byte & (1 << bit) != 0);
            self.delay.delay_us(self.bit_delay_us);
            self.clk.set_high();
            self.delay.delay_us(self.bit_delay_us);
            self.clk.set_low();
        }

        self.delay.delay_us(self.bit_delay_us);
        self.dat.set_high();
        self.delay.delay_us(self.bit_delay_us);
    }

    fn pulse_latch(&mut self) {
        self.le.set_high();
        self.delay.delay_us(self.bit_delay_us);
        self.le.set_low();
        self.delay.delay_us(self.bit_delay_us);
    }
}

impl<P: FlexPin, D: DelayNs> SerialBus for BitBangBus<P, D> {
    type Error = Infallible;

    fn init(&mut self) {
        self.clk.set_low();
        self.dat.set_low();
        self.le.set_high();
        self.clk.set_as_output();
        self.dat.set_as_output();
        self.le.set_as_output();
    }

    fn release(&mut self) {
        self.clk.set_as_input();
        self.dat.set_as_input();
        self.le.set_as_input();
    }

    fn write_burst(&mut self, bytes: &[u8]) -> Result<(), Infallible> {
        critical_section::with(|_| {
            for &byte in bytes {
                self.write_byte(byte);
            }
        });
        Ok(())
    }

    fn latch(&mut self) -> Result<(), Infallible> {
        critical_section::with(|_| self.pulse_latch());
        Ok(())
    }

    fn write_latched(&mut self, bytes: &[u8]) -> Result<(), Infallible> {
        critical_section::with(|_| {
            for &byte in bytes {
                self.write_byte(byte);
            }
            self.pulse_latch();
        });
        Ok(())
    }

    fn finish(&mut self) {
        self.dat.set_low();
    }
}

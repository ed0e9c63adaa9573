//! Frequency synthesizer driver and its serial transports
//!
//! The synthesizer is programmed with two latched bursts of bytes. How the
//! bytes reach the chip is the transport's business:
//!
//! - [`BitBangBus`]: clock, data and latch lines toggled from GPIO
//! - [`ShiftRegisterBus`]: a hardware SPI peripheral plus select and latch lines

pub mod bitbang;
pub mod mc145158;
pub mod shift_register;

pub use bitbang::BitBangBus;
pub use mc145158::Mc145158;
pub use shift_register::ShiftRegisterBus;

/// Byte-oriented synchronous bus to the synthesizer
pub trait SerialBus {
    /// Transfer error
    type Error;

    /// Drive the bus lines to their idle levels
    fn init(&mut self);

    /// Return the bus lines to their reset state
    fn release(&mut self);

    /// Clock out `bytes`, MSB first
    fn write_burst(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Pulse the latch line, loading the shifted word into the chip
    fn latch(&mut self) -> Result<(), Self::Error>;

    /// Clock out `bytes` and latch them as one transaction
    fn write_latched(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.write_burst(bytes)?;
        self.latch()
    }

    /// Park the lines after a complete program
    fn finish(&mut self);
}

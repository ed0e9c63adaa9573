//! Synthesizer SPI
//!
//! Boards that route the synthesizer to a hardware SPI peripheral shift the
//! programming bursts through this trait. Clock polarity and rate are fixed
//! when the chip HAL sets the peripheral up.

/// Write-only SPI master
pub trait SpiBus {
    type Error;

    /// Shift out `data`, MSB first
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Wait until the last word has left the shift register
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

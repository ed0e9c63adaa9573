//! Command link serial port
//!
//! Only the transmit half is abstracted. Module responses arrive through the
//! receive interrupt, which feeds the line assembler directly.

/// Transmit half of the module command link
pub trait UartTx {
    type Error;

    /// Send `data`, returning once every byte is queued in the peripheral
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Wait until the last byte has left the shift register
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Baud rate switch after `AT+TURBO`
///
/// The new rate applies from the next byte on; nothing is read back.
pub trait SetBaudRate {
    type Error;

    fn set_baudrate(&mut self, baudrate: u32) -> Result<(), Self::Error>;
}

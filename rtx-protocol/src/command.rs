//! Requests sent to the RF module

/// Commands understood by the module firmware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Query the hardware model string
    Model,
    /// Query the firmware version string
    Version,
    /// Switch the module UART to the high baud rate
    Turbo,
}

impl Command {
    /// Wire encoding, including the `\r\n` terminator
    pub const fn as_bytes(&self) -> &'static [u8] {
        match self {
            Command::Model => b"AT+MODEL\r\n",
            Command::Version => b"AT+VERSION\r\n",
            Command::Turbo => b"AT+TURBO\r\n",
        }
    }
}

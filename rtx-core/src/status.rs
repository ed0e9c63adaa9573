//! Radio operating status
//!
//! Single source of truth for what the RF hardware is doing. A backend starts
//! in [`RadioStatus::Off`] and changes status only through `enable_rx`,
//! `enable_tx` and `disable_rtx`.

/// Current hardware activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioStatus {
    /// Neither receiving nor transmitting
    #[default]
    Off,
    /// Receiver active
    Rx,
    /// Transmitter active
    Tx,
}

impl RadioStatus {
    /// Check if the RF stage is active in either direction
    pub fn is_active(&self) -> bool {
        !matches!(self, RadioStatus::Off)
    }

    /// Check if the transmitter is keyed
    pub fn is_transmitting(&self) -> bool {
        matches!(self, RadioStatus::Tx)
    }
}

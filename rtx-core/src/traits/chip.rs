//! RF transceiver chip capability interface
//!
//! The module backend drives the RF chip through this interface only; the
//! chip's register map stays inside the implementation.

/// Chip modulation setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipOpMode {
    /// Analog FM with audio filtering
    Fm,
    /// Digital mode, RX audio filter bypassed
    Dmr,
}

/// Chip channel filter setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipBandwidth {
    /// 12.5 kHz
    Narrow,
    /// 25 kHz
    Wide,
}

/// Chip functional mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FuncMode {
    Off,
    Rx,
    Tx,
}

/// RF transceiver chip
pub trait RfChip {
    /// Configure the chip with AF output disabled
    fn init(&mut self);

    /// Power the chip down
    fn terminate(&mut self);

    fn set_op_mode(&mut self, mode: ChipOpMode);

    fn set_bandwidth(&mut self, bandwidth: ChipBandwidth);

    /// Tune to `freq` Hz
    fn set_frequency(&mut self, freq: u32);

    fn set_func_mode(&mut self, mode: FuncMode);

    /// Set the transmit output power in watts
    fn set_tx_power(&mut self, watts: f32);

    /// Enable CTCSS detection of `tone` (0.1 Hz units)
    fn enable_rx_ctcss(&mut self, tone: u16);

    /// Enable CTCSS encoding of `tone` (0.1 Hz units)
    fn enable_tx_ctcss(&mut self, tone: u16);

    /// Disable CTCSS encoding and detection
    fn disable_ctcss(&mut self);

    /// Check if the configured CTCSS tone is being received
    fn rx_ctcss_detected(&mut self) -> bool;

    /// Raw RSSI reading
    fn read_rssi(&mut self) -> i16;
}

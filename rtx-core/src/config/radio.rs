//! Operating configuration of the transceiver

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Frequency in Hz
pub type Freq = u32;

/// Modulation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OpMode {
    /// Analog FM
    #[default]
    Fm,
    /// DMR digital voice
    Dmr,
    /// M17 digital voice
    M17,
}

/// Channel bandwidth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Bandwidth {
    /// 12.5 kHz
    Bw12p5,
    /// 20 kHz
    Bw20,
    /// 25 kHz
    #[default]
    Bw25,
}

impl Bandwidth {
    /// Channel width in Hz
    pub const fn hz(&self) -> u32 {
        match self {
            Bandwidth::Bw12p5 => 12_500,
            Bandwidth::Bw20 => 20_000,
            Bandwidth::Bw25 => 25_000,
        }
    }
}

/// Operating configuration snapshot
///
/// Owned by the caller. A backend keeps its own copy, replaced wholesale on
/// `init` and `update_configuration`, and never modifies it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RtxConfig {
    /// Receive frequency in Hz
    pub rx_frequency: Freq,
    /// Transmit frequency in Hz
    pub tx_frequency: Freq,
    /// Requested transmit power in watts
    pub tx_power: f32,
    /// Modulation mode
    pub op_mode: OpMode,
    /// Channel bandwidth
    pub bandwidth: Bandwidth,
    /// Receive tone squelch enabled
    pub rx_tone_enabled: bool,
    /// Receive CTCSS tone, in 0.1 Hz
    pub rx_tone: u16,
    /// Transmit tone encoding enabled
    pub tx_tone_enabled: bool,
    /// Transmit CTCSS tone, in 0.1 Hz
    pub tx_tone: u16,
    /// Hard transmit inhibit
    pub tx_disable: bool,
}

impl Default for RtxConfig {
    fn default() -> Self {
        Self {
            rx_frequency: 430_000_000,
            tx_frequency: 430_000_000,
            tx_power: 1.0,
            op_mode: OpMode::Fm,
            bandwidth: Bandwidth::Bw25,
            rx_tone_enabled: false,
            rx_tone: 885, // 88.5 Hz
            tx_tone_enabled: false,
            tx_tone: 885,
            tx_disable: false,
        }
    }
}

impl RtxConfig {
    /// Simplex configuration on a single frequency
    pub fn simplex(freq: Freq) -> Self {
        Self {
            rx_frequency: freq,
            tx_frequency: freq,
            ..Self::default()
        }
    }

    /// Transmit power clamped into `[min_w, max_w]`
    ///
    /// NaN requests map to the minimum.
    pub fn clamped_tx_power(&self, min_w: f32, max_w: f32) -> f32 {
        if self.tx_power.is_nan() {
            return min_w;
        }
        self.tx_power.max(min_w).min(max_w)
    }
}

//! Frequency band classification

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rtx_protocol::ModuleModel;

use super::radio::Freq;

/// Supported frequency band
///
/// `None` marks a frequency the hardware cannot serve; it gates all
/// hardware programming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Band {
    Vhf,
    Uhf,
    None,
}

impl Band {
    /// Classify `freq` against the hardware's band limits
    pub fn from_frequency(freq: Freq, limits: &BandLimits) -> Self {
        if limits.vhf.is_some_and(|r| r.contains(freq)) {
            Band::Vhf
        } else if limits.uhf.is_some_and(|r| r.contains(freq)) {
            Band::Uhf
        } else {
            Band::None
        }
    }

    /// Check if the band can be served
    pub fn is_servable(&self) -> bool {
        !matches!(self, Band::None)
    }
}

impl From<ModuleModel> for Band {
    fn from(model: ModuleModel) -> Self {
        match model {
            ModuleModel::Sa868sVhf => Band::Vhf,
            ModuleModel::Sa868sUhf => Band::Uhf,
        }
    }
}

/// Inclusive frequency range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FreqRange {
    pub min_hz: Freq,
    pub max_hz: Freq,
}

impl FreqRange {
    pub const fn new(min_hz: Freq, max_hz: Freq) -> Self {
        Self { min_hz, max_hz }
    }

    pub const fn contains(&self, freq: Freq) -> bool {
        freq >= self.min_hz && freq <= self.max_hz
    }
}

/// Frequency ranges the hardware supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BandLimits {
    /// VHF range, if fitted
    pub vhf: Option<FreqRange>,
    /// UHF range, if fitted
    pub uhf: Option<FreqRange>,
}

/// 134-174 MHz
pub const VHF_RANGE: FreqRange = FreqRange::new(134_000_000, 174_000_000);

/// 400-480 MHz
pub const UHF_RANGE: FreqRange = FreqRange::new(400_000_000, 480_000_000);

impl Default for BandLimits {
    fn default() -> Self {
        Self {
            vhf: Some(VHF_RANGE),
            uhf: Some(UHF_RANGE),
        }
    }
}

impl BandLimits {
    /// No band fitted; every frequency classifies as [`Band::None`]
    pub const fn none() -> Self {
        Self {
            vhf: None,
            uhf: None,
        }
    }

    /// Keep only `band`, dropping the other range
    pub fn only(&self, band: Band) -> Self {
        match band {
            Band::Vhf => Self {
                vhf: self.vhf,
                uhf: None,
            },
            Band::Uhf => Self {
                vhf: None,
                uhf: self.uhf,
            },
            Band::None => Self::none(),
        }
    }

    /// Classify a frequency
    pub fn band_of(&self, freq: Freq) -> Band {
        Band::from_frequency(freq, self)
    }

    /// Check if `band` is fitted
    pub fn supports(&self, band: Band) -> bool {
        match band {
            Band::Vhf => self.vhf.is_some(),
            Band::Uhf => self.uhf.is_some(),
            Band::None => false,
        }
    }
}

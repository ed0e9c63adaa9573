//! Board-agnostic core logic for the transceiver firmware
//!
//! This crate contains the radio and audio logic that does not depend on
//! specific hardware implementations:
//!
//! - Radio configuration and band classification
//! - The radio backend contract and the RF chip capability interface
//! - Frequency synthesizer program math
//! - Audio path compatibility matrix and router
//! - Push-to-talk direction switching
//! - Diagnostic values exposed to the UI

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod audio;
pub mod config;
pub mod diagnostics;
pub mod keying;
pub mod status;
pub mod synth;
pub mod traits;

pub use config::{Band, BandLimits, Bandwidth, Freq, FreqRange, OpMode, RtxConfig};
pub use status::RadioStatus;

//! Inter-task communication channels
//!
//! The radio task is the only owner of the backend; everything else talks to
//! it through [`RADIO_CMD`].

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use rtx_core::audio::AudioPath;
use rtx_core::{OpMode, RadioStatus, RtxConfig};

/// Channel capacity for radio commands
const RADIO_CMD_CHANNEL_SIZE: usize = 8;

/// Request for the radio task
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioCommand {
    /// Replace the active configuration
    Configure(RtxConfig),
    /// Switch modulation mode
    SetOpMode(OpMode),
    /// Enter receive
    EnableRx,
    /// Enter transmit
    EnableTx,
    /// Turn the RF stage off
    Disable,
    /// Push-to-talk: key (`true`) or return to receive, moving voice audio
    Transmit(bool),
    /// Open an audio path
    Connect(AudioPath),
    /// Close an audio path
    Disconnect(AudioPath),
}

/// Synthesizer lock sample taken while the RF stage is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LockSample {
    pub locked: bool,
    pub status: RadioStatus,
}

/// Commands for the radio task (PTT task, lock monitor, future UI)
pub static RADIO_CMD: Channel<CriticalSectionRawMutex, RadioCommand, RADIO_CMD_CHANNEL_SIZE> =
    Channel::new();

/// Latest lock sample (updated by the radio task)
pub static PLL_LOCK: Signal<CriticalSectionRawMutex, LockSample> = Signal::new();

//! Push-to-talk direction switching
//!
//! The backend contract does not pass through `Off` between RX and TX, so
//! the switch always disables first. Voice audio follows the RF direction:
//! microphone into the modulator while keyed, receiver into the speaker
//! otherwise. The microphone path is opened only once the transmitter has
//! actually keyed; a refused key (inhibit, out of band) falls back to
//! receive.

use crate::audio::{AudioPath, AudioSink, AudioSource, OpenPaths};
use crate::status::RadioStatus;
use crate::traits::{AudioLines, RadioBackend};

/// Microphone into the modulator
pub const MIC_TO_RTX: AudioPath = AudioPath::new(AudioSource::Mic, AudioSink::Rtx);

/// Receiver audio to the speaker
pub const RTX_TO_SPK: AudioPath = AudioPath::new(AudioSource::Rtx, AudioSink::Spk);

/// Switch to transmit (`true`) or receive and move the voice paths
///
/// Returns the resulting status.
pub fn set_transmit<R>(radio: &mut R, paths: &mut OpenPaths, transmit: bool) -> RadioStatus
where
    R: RadioBackend + AudioLines,
{
    if transmit {
        paths.disconnect(radio, RTX_TO_SPK);
        radio.disable_rtx();
        radio.enable_tx();
        if radio.status().is_transmitting() {
            let _ = paths.connect(radio, MIC_TO_RTX);
            return radio.status();
        }
    } else {
        paths.disconnect(radio, MIC_TO_RTX);
        radio.disable_rtx();
    }

    radio.enable_rx();
    if radio.status() == RadioStatus::Rx {
        let _ = paths.connect(radio, RTX_TO_SPK);
    }
    radio.status()
}

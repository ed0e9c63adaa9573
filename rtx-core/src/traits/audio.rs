//! Analog audio line control

/// Electrical controls behind the audio paths
///
/// Implemented by whatever owns the analog gating lines on a board. The
/// router in [`crate::audio`] decides which control a path needs.
pub trait AudioLines {
    /// Open (`true`) or mute the microphone line into the RF stage
    fn set_mic_line(&mut self, open: bool);

    /// Enable or mute the RF audio output towards the speaker
    fn set_af_output(&mut self, enabled: bool);

    /// Drive the MCU audio output (`true`) or leave it high impedance
    fn set_mcu_output(&mut self, driven: bool);
}


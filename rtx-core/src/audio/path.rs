//! Audio sources, sinks and paths

/// Audio source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AudioSource {
    /// Microphone
    Mic = 0,
    /// RF stage (demodulated receive audio)
    Rtx = 1,
    /// MCU (DAC/PWM output)
    Mcu = 2,
}

/// Audio sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AudioSink {
    /// Speaker
    Spk = 0,
    /// RF stage (modulator input)
    Rtx = 1,
    /// MCU (ADC input)
    Mcu = 2,
}

impl AudioSource {
    pub const ALL: [AudioSource; 3] = [AudioSource::Mic, AudioSource::Rtx, AudioSource::Mcu];
}

impl AudioSink {
    pub const ALL: [AudioSink; 3] = [AudioSink::Spk, AudioSink::Rtx, AudioSink::Mcu];
}

/// Number of distinct paths
pub const PATH_COUNT: usize = 9;

/// A source-to-sink connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AudioPath {
    pub source: AudioSource,
    pub sink: AudioSink,
}

impl AudioPath {
    pub const fn new(source: AudioSource, sink: AudioSink) -> Self {
        Self { source, sink }
    }

    /// Matrix index, `source * 3 + sink`
    pub const fn index(&self) -> usize {
        (self.source as usize) * 3 + (self.sink as usize)
    }

    /// Inverse of [`index`](Self::index)
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= PATH_COUNT {
            return None;
        }
        let source = match index / 3 {
            0 => AudioSource::Mic,
            1 => AudioSource::Rtx,
            _ => AudioSource::Mcu,
        };
        let sink = match index % 3 {
            0 => AudioSink::Spk,
            1 => AudioSink::Rtx,
            _ => AudioSink::Mcu,
        };
        Some(Self::new(source, sink))
    }
}

//! Path side effects
//!
//! Each path needs at most one line change. Paths with no entry here are
//! always connected electrically and need nothing.

use super::path::{AudioSink, AudioSource};
use crate::traits::AudioLines;

/// Put the audio lines in their power-on state: microphone and speaker muted
pub fn init<L: AudioLines>(lines: &mut L) {
    lines.set_mic_line(false);
    lines.set_af_output(false);
}

/// Mute microphone and speaker before shutdown
pub fn terminate<L: AudioLines>(lines: &mut L) {
    lines.set_mic_line(false);
    lines.set_af_output(false);
}

/// Open the path from `source` to `sink`
pub fn connect<L: AudioLines>(lines: &mut L, source: AudioSource, sink: AudioSink) {
    apply(lines, source, sink, true);
}

/// Close the path from `source` to `sink`
pub fn disconnect<L: AudioLines>(lines: &mut L, source: AudioSource, sink: AudioSink) {
    apply(lines, source, sink, false);
}

fn apply<L: AudioLines>(lines: &mut L, source: AudioSource, sink: AudioSink, open: bool) {
    match (source, sink) {
        (AudioSource::Mic, AudioSink::Rtx) => lines.set_mic_line(open),
        (AudioSource::Rtx, AudioSink::Spk) => lines.set_af_output(open),
        (AudioSource::Mcu, AudioSink::Rtx) => lines.set_mcu_output(open),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct MockLines {
        mic: Option<bool>,
        af: Option<bool>,
        mcu: Option<bool>,
        writes: u32,
    }

    impl AudioLines for MockLines {
        fn set_mic_line(&mut self, open: bool) {
            self.mic = Some(open);
            self.writes += 1;
        }

        fn set_af_output(&mut self, enabled: bool) {
            self.af = Some(enabled);
            self.writes += 1;
        }

        fn set_mcu_output(&mut self, driven: bool) {
            self.mcu = Some(driven);
            self.writes += 1;
        }
    }

    #[test]
    fn test_init_mutes() {
        let mut lines = MockLines::default();
        init(&mut lines);
        assert_eq!(lines.mic, Some(false));
        assert_eq!(lines.af, Some(false));
        assert_eq!(lines.mcu, None);
    }

    #[test]
    fn test_terminate_mutes() {
        let mut lines = MockLines::default();
        connect(&mut lines, AudioSource::Mic, AudioSink::Rtx);
        connect(&mut lines, AudioSource::Rtx, AudioSink::Spk);
        terminate(&mut lines);
        assert_eq!(lines.mic, Some(false));
        assert_eq!(lines.af, Some(false));
    }

    #[test]
    fn test_mic_to_rtx() {
        let mut lines = MockLines::default();
        connect(&mut lines, AudioSource::Mic, AudioSink::Rtx);
        assert_eq!(lines.mic, Some(true));
        disconnect(&mut lines, AudioSource::Mic, AudioSink::Rtx);
        assert_eq!(lines.mic, Some(false));
    }

    #[test]
    fn test_rtx_to_spk() {
        let mut lines = MockLines::default();
        connect(&mut lines, AudioSource::Rtx, AudioSink::Spk);
        assert_eq!(lines.af, Some(true));
        disconnect(&mut lines, AudioSource::Rtx, AudioSink::Spk);
        assert_eq!(lines.af, Some(false));
    }

    #[test]
    fn test_mcu_to_rtx() {
        let mut lines = MockLines::default();
        connect(&mut lines, AudioSource::Mcu, AudioSink::Rtx);
        assert_eq!(lines.mcu, Some(true));
        disconnect(&mut lines, AudioSource::Mcu, AudioSink::Rtx);
        assert_eq!(lines.mcu, Some(false));
    }

    #[test]
    fn test_passive_paths_touch_nothing() {
        let passive = [
            (AudioSource::Mic, AudioSink::Spk),
            (AudioSource::Mic, AudioSink::Mcu),
            (AudioSource::Rtx, AudioSink::Rtx),
            (AudioSource::Rtx, AudioSink::Mcu),
            (AudioSource::Mcu, AudioSink::Spk),
            (AudioSource::Mcu, AudioSink::Mcu),
        ];
        let mut lines = MockLines::default();
        for (source, sink) in passive {
            connect(&mut lines, source, sink);
            disconnect(&mut lines, source, sink);
        }
        assert_eq!(lines, MockLines::default());
    }
}

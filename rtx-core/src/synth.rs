//! Frequency synthesizer program math
//!
//! The synthesizer divides the VCO by `N` (with an `A` swallow count on the
//! prescaler) and the reference clock by `R`. The program is recomputed from
//! scratch for every frequency change and sent as five bytes, MSB first, in
//! two latched bursts:
//!
//! ```text
//! burst 1:  0000 00nn | nnnn nnnn | aaaa aaa0
//! burst 2:  rrrr rrrr | rrrr rrr1
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reference clock: 5 MHz
pub const REFERENCE_CLOCK_HZ: u32 = 5_000_000;

/// Channel step: 12.5 kHz
pub const CHANNEL_STEP_HZ: u32 = 12_500;

/// `N` and `R` are 14-bit counters
const COUNTER_MASK: u16 = 0x3FFF;

/// `A` is a 7-bit counter
const SWALLOW_MASK: u8 = 0x7F;

/// How the swallow counter `A` is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SwallowFormula {
    /// `A = N - N * divisor`, wrapping 32-bit arithmetic truncated to 8 bits.
    /// This is what deployed boards have been programmed with.
    #[default]
    Literal,
    /// `A = round(f / step) mod divisor`, the textbook two-modulus split
    Modulus,
}

/// Synthesizer parameters that stay fixed for a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SynthParams {
    /// Reference oscillator frequency in Hz
    pub reference_clock_hz: u32,
    /// Channel step in Hz
    pub step_hz: u32,
    /// Swallow counter derivation
    pub swallow: SwallowFormula,
}

impl Default for SynthParams {
    fn default() -> Self {
        Self {
            reference_clock_hz: REFERENCE_CLOCK_HZ,
            step_hz: CHANNEL_STEP_HZ,
            swallow: SwallowFormula::Literal,
        }
    }
}

/// Divider values for one target frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SynthesizerProgram {
    /// Main divider (14 bits)
    pub n: u16,
    /// Swallow counter (7 bits)
    pub a: u8,
    /// Reference divider (14 bits)
    pub r: u16,
}

impl SynthesizerProgram {
    /// Compute the program for `target_hz` with the given prescaler divisor
    ///
    /// A zero divisor or step is treated as 1 so the math stays defined.
    pub fn compute(target_hz: u32, clock_divisor: u8, params: &SynthParams) -> Self {
        let step = params.step_hz.max(1);
        let divisor = u32::from(clock_divisor.max(1));

        // Round to the nearest channel
        let nt = ((u64::from(target_hz) + u64::from(step / 2)) / u64::from(step)) as u32;
        let n = nt / divisor;

        let a = match params.swallow {
            SwallowFormula::Literal => n.wrapping_sub(n.wrapping_mul(divisor)) as u8,
            SwallowFormula::Modulus => (nt % divisor) as u8,
        };

        let r = params.reference_clock_hz / step;

        Self {
            n: (n as u16) & COUNTER_MASK,
            a: a & SWALLOW_MASK,
            r: (r as u16) & COUNTER_MASK,
        }
    }

    /// Pack into the five wire bytes
    pub fn to_bytes(&self) -> [u8; 5] {
        [
            (self.n >> 8) as u8,
            self.n as u8,
            self.a << 1,
            (self.r >> 7) as u8,
            ((self.r << 1) as u8) | 1,
        ]
    }

    /// First latched burst: `N` and `A`
    pub fn divider_burst(&self) -> [u8; 3] {
        let b = self.to_bytes();
        [b[0], b[1], b[2]]
    }

    /// Second latched burst: `R`
    pub fn reference_burst(&self) -> [u8; 2] {
        let b = self.to_bytes();
        [b[3], b[4]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_uhf_packing() {
        let params = SynthParams::default();
        let prog = SynthesizerProgram::compute(445_100_000, 127, &params);

        // nt = 35608, n = 280, r = 400
        assert_eq!(prog.n, 280);
        assert_eq!(prog.r, 400);
        assert_eq!(prog.a, 48);

        assert_eq!(
            prog.to_bytes(),
            [
                (280u32 >> 8) as u8,
                (280u32 & 0xFF) as u8,
                48 << 1,
                ((400u32 >> 7) & 0xFF) as u8,
                (((400u32 << 1) | 1) & 0xFF) as u8,
            ]
        );
        assert_eq!(prog.to_bytes(), [0x01, 0x18, 0x60, 0x03, 0x21]);
    }

    #[test]
    fn test_uhf_formulas_agree() {
        // For this target both derivations of A land on 48
        let literal = SynthesizerProgram::compute(445_100_000, 127, &SynthParams::default());
        let modulus = SynthesizerProgram::compute(
            445_100_000,
            127,
            &SynthParams {
                swallow: SwallowFormula::Modulus,
                ..SynthParams::default()
            },
        );
        assert_eq!(literal, modulus);
    }

    #[test]
    fn test_vhf_formulas_differ() {
        // nt = 11640, n = 91
        let literal = SynthesizerProgram::compute(145_500_000, 127, &SynthParams::default());
        let modulus = SynthesizerProgram::compute(
            145_500_000,
            127,
            &SynthParams {
                swallow: SwallowFormula::Modulus,
                ..SynthParams::default()
            },
        );

        assert_eq!(literal.n, 91);
        assert_eq!(modulus.n, 91);
        // 91 - 91 * 127 = -11466, truncated to 8 bits = 54
        assert_eq!(literal.a, 54);
        // 11640 mod 127 = 83
        assert_eq!(modulus.a, 83);
    }

    #[test]
    fn test_rounds_to_nearest_channel() {
        let params = SynthParams::default();
        let exact = SynthesizerProgram::compute(445_100_000, 127, &params);

        // 6 kHz below the channel rounds up to it
        let below = SynthesizerProgram::compute(445_094_000, 127, &params);
        assert_eq!(below, exact);

        // 6 kHz above rounds down to it
        let above = SynthesizerProgram::compute(445_106_000, 127, &params);
        assert_eq!(above, exact);
    }

    #[test]
    fn test_bursts_split_program() {
        let prog = SynthesizerProgram::compute(445_100_000, 127, &SynthParams::default());
        let bytes = prog.to_bytes();
        assert_eq!(prog.divider_burst(), [bytes[0], bytes[1], bytes[2]]);
        assert_eq!(prog.reference_burst(), [bytes[3], bytes[4]]);
    }

    #[test]
    fn test_reference_word_terminator() {
        // Last bit of the second burst is always the control bit
        for target in [100_000_000, 145_500_000, 445_100_000] {
            let prog = SynthesizerProgram::compute(target, 127, &SynthParams::default());
            assert_eq!(prog.to_bytes()[4] & 1, 1);
            assert_eq!(prog.to_bytes()[2] & 1, 0);
        }
    }

    #[test]
    fn test_zero_divisor_is_defined() {
        let prog = SynthesizerProgram::compute(445_100_000, 0, &SynthParams::default());
        assert_eq!(prog.n, 35608 & 0x3FFF);
    }

    proptest! {
        #[test]
        fn prop_wire_layout(
            target in 100_000_000u32..500_000_000,
            divisor in 1u8..=255,
            modulus in any::<bool>(),
        ) {
            let params = SynthParams {
                swallow: if modulus { SwallowFormula::Modulus } else { SwallowFormula::Literal },
                ..SynthParams::default()
            };
            let prog = SynthesizerProgram::compute(target, divisor, &params);
            let b = prog.to_bytes();

            prop_assert_eq!(u16::from(b[0]) << 8 | u16::from(b[1]), prog.n);
            prop_assert_eq!(b[2] >> 1, prog.a);
            prop_assert_eq!(b[2] & 1, 0);
            prop_assert_eq!(u16::from(b[3]) << 7 | u16::from(b[4] >> 1), prog.r);
            prop_assert_eq!(b[4] & 1, 1);
            prop_assert_eq!(prog.r, 400);
        }
    }
}

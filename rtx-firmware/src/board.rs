//! Pin map of the STM32F401 board with the discrete synthesizer front end
//!
//! | Signal    | Pin  | Direction               |
//! |-----------|------|-------------------------|
//! | MIC_MUTE  | PA0  | out, high = mic open    |
//! | SPK_MUTE  | PA3  | out, high = speaker on  |
//! | AUDIO_SPK | PA5  | out / hi-Z baseband TX  |
//! | PLL_LE    | PA6  | out                     |
//! | PLL_CLK   | PA7  | out                     |
//! | PLL_DAT   | PA8  | out                     |
//! | PLL_LD    | PA9  | in, high = locked       |
//! | PTT_OUT   | PA10 | out, high = keyed       |
//! | PTT_SW    | PA11 | in, low = pressed       |

use embassy_stm32::gpio::{Flex, Input, Level, Output, Pull, Speed};
use embassy_stm32::Peripherals;
use embassy_time::Delay;

use rtx_drivers::radio::{DiscreteConfig, DiscreteLines, DiscreteSynthesizerBackend};
use rtx_drivers::synth::{BitBangBus, Mc145158};
use rtx_hal_stm32f4::{FlexLine, InputLine, OutputLine};

use rtx_core::synth::SynthParams;

/// Bit-banged synthesizer bus
pub type PllBus = BitBangBus<FlexLine<'static>, Delay>;

/// Radio backend as wired on this board
pub type Radio = DiscreteSynthesizerBackend<
    PllBus,
    InputLine<'static>,
    OutputLine<'static>,
    FlexLine<'static>,
    Delay,
>;

/// Board resources handed to the tasks
pub struct Board {
    pub radio: Radio,
    pub ptt_switch: Input<'static>,
}

impl Board {
    /// Claim the pins and build the radio backend
    ///
    /// Nothing is driven onto the RF hardware until the backend's `init`.
    pub fn new(p: Peripherals) -> Self {
        let le = FlexLine::new(Flex::new(p.PA6), Speed::VeryHigh);
        let clk = FlexLine::new(Flex::new(p.PA7), Speed::VeryHigh);
        let dat = FlexLine::new(Flex::new(p.PA8), Speed::VeryHigh);
        let lock_detect = InputLine::new(Input::new(p.PA9, Pull::None));

        let bus = BitBangBus::new(clk, dat, le, Delay);
        let pll = Mc145158::new(bus, lock_detect, SynthParams::default());

        let lines = DiscreteLines {
            ptt: OutputLine::new(Output::new(p.PA10, Level::Low, Speed::Low)),
            mic_gate: OutputLine::new(Output::new(p.PA0, Level::Low, Speed::Low)),
            spk_gate: OutputLine::new(Output::new(p.PA3, Level::Low, Speed::Low)),
            mcu_out: FlexLine::new(Flex::new(p.PA5), Speed::Medium),
        };

        let radio = DiscreteSynthesizerBackend::new(pll, lines, Delay, DiscreteConfig::default());

        Self {
            radio,
            ptt_switch: Input::new(p.PA11, Pull::Up),
        }
    }
}

//! GPIO line wrappers
//!
//! The embassy pin types are foreign to `rtx-hal`, so each board line goes
//! through a thin newtype.

use embassy_stm32::gpio::{Flex, Input, Output, Pull, Speed};
use rtx_hal::{FlexPin, InputPin, OutputPin};

/// Push-pull control line (PTT, mic and speaker gates)
pub struct OutputLine<'d>(Output<'d>);

impl<'d> OutputLine<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self(pin)
    }
}

impl OutputPin for OutputLine<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Status input (synthesizer lock detect)
pub struct InputLine<'d>(Input<'d>);

impl<'d> InputLine<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self(pin)
    }
}

impl InputPin for InputLine<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// Line that is either driven or floating (PLL bus, MCU audio output)
///
/// Released lines float with no pull. The output level is kept across
/// direction changes, so it can be set before the line is driven.
pub struct FlexLine<'d> {
    pin: Flex<'d>,
    speed: Speed,
    output: bool,
}

impl<'d> FlexLine<'d> {
    /// Wrap `pin`, starting released
    pub fn new(mut pin: Flex<'d>, speed: Speed) -> Self {
        pin.set_as_input(Pull::None);
        Self {
            pin,
            speed,
            output: false,
        }
    }
}

impl OutputPin for FlexLine<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

impl FlexPin for FlexLine<'_> {
    fn set_as_output(&mut self) {
        self.pin.set_as_output(self.speed);
        self.output = true;
    }

    fn set_as_input(&mut self) {
        self.pin.set_as_input(Pull::None);
        self.output = false;
    }

    fn is_output(&self) -> bool {
        self.output
    }
}

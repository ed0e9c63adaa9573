//! Digital control lines
//!
//! The radio hardware is steered through a handful of single-bit lines:
//! transmit enable, the microphone and speaker gates, the module's
//! power-down pin, the synthesizer's clock/data/enable bus and its
//! lock-detect output.

/// Line the MCU drives (PTT, audio gates, module power-down)
pub trait OutputPin {
    fn set_high(&mut self);

    fn set_low(&mut self);

    /// Drive `high`, e.g. a gate from an open/closed flag
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Level last written, not a read-back of the pad
    fn is_set_high(&self) -> bool;

    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Line the MCU samples (synthesizer lock detect)
pub trait InputPin {
    /// Current level, read without debouncing
    fn is_high(&self) -> bool;
}

/// Driven line that can be released to high impedance
///
/// The synthesizer bus lines are released when the driver terminates, and
/// the MCU audio output floats whenever its path is closed so it does not
/// load the modulator input.
pub trait FlexPin: OutputPin {
    /// Start driving at the last written level
    fn set_as_output(&mut self);

    /// Release to a floating input
    fn set_as_input(&mut self);

    /// Check if the line is currently driven
    fn is_output(&self) -> bool;
}

//! MC145158 serial-input PLL frequency synthesizer
//!
//! # Programming sequence
//!
//! ```text
//! N[13:8] | N[7:0] | A<<1      latch
//! R[13:7] | R[6:0]<<1 | 1      latch
//! ```
//!
//! Lock status comes from the chip's lock-detect output and is read as an
//! immediate level with no debouncing. The driver never polls it on its own.

use rtx_core::synth::{SynthParams, SynthesizerProgram};
use rtx_hal::InputPin;

use super::SerialBus;

/// MC145158 driver
pub struct Mc145158<B, LD> {
    bus: B,
    lock_detect: LD,
    params: SynthParams,
    last: Option<SynthesizerProgram>,
}

impl<B: SerialBus, LD: InputPin> Mc145158<B, LD> {
    /// Create a driver; the bus is not touched until [`init`](Self::init)
    pub fn new(bus: B, lock_detect: LD, params: SynthParams) -> Self {
        Self {
            bus,
            lock_detect,
            params,
            last: None,
        }
    }

    /// Bring the bus lines up
    pub fn init(&mut self) {
        self.bus.init();
    }

    /// Release the bus lines to their reset state
    pub fn terminate(&mut self) {
        self.bus.release();
    }

    /// Program the VCO to `target_hz` with the given prescaler divisor
    ///
    /// Returns the program that was sent.
    pub fn set_frequency(
        &mut self,
        target_hz: u32,
        clock_divisor: u8,
    ) -> Result<SynthesizerProgram, B::Error> {
        let program = SynthesizerProgram::compute(target_hz, clock_divisor, &self.params);
        trace!(
            "PLL: {} Hz -> N={} A={} R={}",
            target_hz,
            program.n,
            program.a,
            program.r
        );

        self.bus.write_latched(&program.divider_burst())?;
        self.bus.write_latched(&program.reference_burst())?;
        self.bus.finish();

        self.last = Some(program);
        Ok(program)
    }

    /// Check if the PLL reports lock
    pub fn is_locked(&self) -> bool {
        self.lock_detect.is_high()
    }

    /// Last program successfully sent
    pub fn last_program(&self) -> Option<SynthesizerProgram> {
        self.last
    }

    pub fn params(&self) -> &SynthParams {
        &self.params
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn lock_detect(&self) -> &LD {
        &self.lock_detect
    }
}

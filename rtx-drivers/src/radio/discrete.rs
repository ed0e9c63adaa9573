//! Discrete synthesizer backend
//!
//! Superheterodyne front end whose local oscillator is an MC145158-driven
//! VCO. On receive the VCO sits one intermediate frequency below the carrier;
//! on transmit it runs on the carrier itself. Keying is a single PTT line.
//!
//! The board has no tone squelch, RSSI or reference trim, so those contract
//! operations return their neutral values.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use rtx_core::config::{Band, BandLimits, OpMode, RtxConfig};
use rtx_core::status::RadioStatus;
use rtx_core::traits::{AudioLines, RadioBackend};
use rtx_hal::{FlexPin, InputPin, OutputPin};

use crate::synth::{Mc145158, SerialBus};

/// Intermediate frequency: 45.1 MHz
pub const IF_FREQ_HZ: u32 = 45_100_000;

/// Prescaler divisor fitted on the reference board
pub const PLL_DIVISOR: u8 = 127;

/// Board parameters for the discrete backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DiscreteConfig {
    /// Synthesizer prescaler divisor
    pub clock_divisor: u8,
    /// Receiver intermediate frequency in Hz
    pub if_hz: u32,
    /// Delay between programming the VCO and keying PTT
    pub tx_settle_ms: u32,
    /// Frequency ranges the front end covers
    pub band_limits: BandLimits,
}

impl Default for DiscreteConfig {
    fn default() -> Self {
        Self {
            clock_divisor: PLL_DIVISOR,
            if_hz: IF_FREQ_HZ,
            tx_settle_ms: 50,
            band_limits: BandLimits::default(),
        }
    }
}

/// Control lines of the discrete front end
///
/// The gate lines are active high: a high level opens the path.
pub struct DiscreteLines<P, O> {
    /// Transmit enable
    pub ptt: P,
    /// Microphone into the modulator
    pub mic_gate: P,
    /// Receiver audio towards the speaker
    pub spk_gate: P,
    /// MCU audio output into the modulator, floated when unused
    pub mcu_out: O,
}

/// Radio backend for the discrete synthesizer board
pub struct DiscreteSynthesizerBackend<B, LD, P, O, D> {
    pll: Mc145158<B, LD>,
    lines: DiscreteLines<P, O>,
    delay: D,
    config: DiscreteConfig,
    rtx: RtxConfig,
    status: RadioStatus,
}

impl<B, LD, P, O, D> DiscreteSynthesizerBackend<B, LD, P, O, D>
where
    B: SerialBus,
    LD: InputPin,
    P: OutputPin,
    O: FlexPin,
    D: DelayNs,
{
    pub fn new(
        pll: Mc145158<B, LD>,
        lines: DiscreteLines<P, O>,
        delay: D,
        config: DiscreteConfig,
    ) -> Self {
        Self {
            pll,
            lines,
            delay,
            config,
            rtx: RtxConfig::default(),
            status: RadioStatus::Off,
        }
    }

    /// Check if the synthesizer reports lock
    pub fn is_pll_locked(&self) -> bool {
        self.pll.is_locked()
    }

    pub fn pll(&self) -> &Mc145158<B, LD> {
        &self.pll
    }

    pub fn lines(&self) -> &DiscreteLines<P, O> {
        &self.lines
    }

    pub fn board_config(&self) -> &DiscreteConfig {
        &self.config
    }

    fn band_of(&self, freq: u32) -> Band {
        self.config.band_limits.band_of(freq)
    }

    fn program(&mut self, vco_hz: u32) -> bool {
        match self.pll.set_frequency(vco_hz, self.config.clock_divisor) {
            Ok(_) => true,
            Err(_) => {
                warn!("PLL: programming {} Hz failed", vco_hz);
                false
            }
        }
    }
}

impl<B, LD, P, O, D> RadioBackend for DiscreteSynthesizerBackend<B, LD, P, O, D>
where
    B: SerialBus,
    LD: InputPin,
    P: OutputPin,
    O: FlexPin,
    D: DelayNs,
{
    type Error = Infallible;

    fn init(&mut self, config: &RtxConfig) -> Result<(), Infallible> {
        self.rtx = *config;
        self.status = RadioStatus::Off;

        self.lines.ptt.set_low();
        self.lines.mic_gate.set_low();
        self.lines.spk_gate.set_low();

        self.pll.init();
        info!("Radio: discrete synthesizer ready");
        Ok(())
    }

    fn terminate(&mut self) {
        self.disable_rtx();
        self.pll.terminate();
    }

    fn tune_vcxo(&mut self, _vhf_offset: i16, _uhf_offset: i16) {}

    fn set_opmode(&mut self, mode: OpMode) {
        match mode {
            OpMode::Fm => self.lines.mic_gate.set_high(),
            OpMode::Dmr | OpMode::M17 => {
                self.lines.mic_gate.set_low();
                self.lines.spk_gate.set_low();
            }
        }
    }

    fn check_rx_digital_squelch(&mut self) -> bool {
        false
    }

    fn enable_rx(&mut self) {
        let freq = self.rtx.rx_frequency;
        if !self.band_of(freq).is_servable() {
            debug!("Radio: RX {} Hz out of band", freq);
            return;
        }

        if self.program(freq.saturating_sub(self.config.if_hz)) {
            self.status = RadioStatus::Rx;
            self.lines.ptt.set_low();
        }
    }

    fn enable_tx(&mut self) {
        if self.rtx.tx_disable {
            debug!("Radio: TX inhibited");
            return;
        }
        let freq = self.rtx.tx_frequency;
        if !self.band_of(freq).is_servable() {
            debug!("Radio: TX {} Hz out of band", freq);
            return;
        }

        if self.program(freq) {
            self.delay.delay_ms(self.config.tx_settle_ms);
            self.status = RadioStatus::Tx;
            self.lines.ptt.set_high();
        }
    }

    fn disable_rtx(&mut self) {
        self.status = RadioStatus::Off;
        self.lines.ptt.set_low();
    }

    fn update_configuration(&mut self, config: &RtxConfig) {
        let rx_band = self.band_of(config.rx_frequency);
        let tx_band = self.band_of(config.tx_frequency);
        if !rx_band.is_servable() || !tx_band.is_servable() {
            debug!("Radio: configuration out of band, ignored");
            return;
        }
        self.rtx = *config;

        match self.status {
            RadioStatus::Rx => self.enable_rx(),
            RadioStatus::Tx => self.enable_tx(),
            RadioStatus::Off => {}
        }
    }

    fn rssi(&mut self) -> f32 {
        0.0
    }

    fn status(&self) -> RadioStatus {
        self.status
    }

    fn config(&self) -> &RtxConfig {
        &self.rtx
    }
}

impl<B, LD, P, O, D> AudioLines for DiscreteSynthesizerBackend<B, LD, P, O, D>
where
    P: OutputPin,
    O: FlexPin,
{
    fn set_mic_line(&mut self, open: bool) {
        self.lines.mic_gate.set_state(open);
    }

    fn set_af_output(&mut self, enabled: bool) {
        self.lines.spk_gate.set_state(enabled);
    }

    fn set_mcu_output(&mut self, driven: bool) {
        if driven {
            self.lines.mcu_out.set_as_output();
        } else {
            self.lines.mcu_out.set_as_input();
        }
    }
}

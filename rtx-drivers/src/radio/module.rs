//! SA868 RF module backend
//!
//! The module runs its own firmware and exposes an AT-style command link.
//! `init` resets the module and runs the handshake below before any RF
//! configuration reaches the chip:
//!
//! 1. pulse the power-down line
//! 2. `AT+MODEL` until a known model answers (bounded retries)
//! 3. `AT+VERSION`, rejected below the minimum firmware
//! 4. `AT+TURBO`, then switch the local UART to the turbo rate
//!
//! After the handshake the backend drives the module's RF chip through
//! [`RfChip`]. The module's audio is hard-wired, so the [`AudioLines`]
//! controls do nothing here.

use embedded_hal::delay::DelayNs;
use rtx_core::config::{Band, BandLimits, Bandwidth, OpMode, RtxConfig};
use rtx_core::diagnostics::Diagnostics;
use rtx_core::status::RadioStatus;
use rtx_core::traits::{AudioLines, ChipBandwidth, ChipOpMode, FuncMode, RadioBackend, RfChip};
use rtx_hal::{OutputPin, SetBaudRate, UartTx};
use rtx_protocol::{Command, FirmwareVersion, ModuleModel, ResponseError};

use super::link::{CommandLink, LinkError};

/// Diagnostic label for the module model
pub const DIAG_MODEL: &str = "Radio";

/// Diagnostic label for the module firmware version
pub const DIAG_FIRMWARE: &str = "Radio FW";

/// Oldest module firmware the backend works with
pub const MIN_FIRMWARE: FirmwareVersion = FirmwareVersion::new(1, 1, 0, 20);

/// Module backend parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModuleConfig {
    /// Minimum accepted module firmware
    pub min_firmware: FirmwareVersion,
    /// Time to wait for each response
    pub request_timeout_ms: u32,
    /// `AT+MODEL` attempts before giving up
    pub model_retry_limit: u32,
    /// Power-down pulse width and release settle time
    pub reset_hold_ms: u32,
    /// Delay between tuning and keying the transmitter
    pub tx_settle_ms: u32,
    /// Lowest output power in watts
    pub tx_power_min_w: f32,
    /// Highest output power in watts
    pub tx_power_max_w: f32,
    /// UART rate after `AT+TURBO`
    pub turbo_baudrate: u32,
    /// Bands the module family can cover
    pub band_limits: BandLimits,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            min_firmware: MIN_FIRMWARE,
            request_timeout_ms: 100,
            model_retry_limit: 50,
            reset_hold_ms: 10,
            tx_settle_ms: 50,
            tx_power_min_w: 1.0,
            tx_power_max_w: 5.0,
            turbo_baudrate: 115_200,
            band_limits: BandLimits::default(),
        }
    }
}

/// Handshake failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModuleError<E> {
    /// Command link failure
    Link(LinkError<E>),
    /// No known model answered within the retry limit
    NotResponding { attempts: u32 },
    /// Module firmware older than required
    UnsupportedFirmware {
        found: FirmwareVersion,
        required: FirmwareVersion,
    },
    /// Response did not parse
    Protocol(ResponseError),
    /// Local UART refused the turbo rate
    BaudRate,
}

impl<E> From<LinkError<E>> for ModuleError<E> {
    fn from(e: LinkError<E>) -> Self {
        ModuleError::Link(e)
    }
}

impl<E> From<ResponseError> for ModuleError<E> {
    fn from(e: ResponseError) -> Self {
        ModuleError::Protocol(e)
    }
}

/// Radio backend for the SA868 module
pub struct ModuleBackend<'q, U, PDN, C, D> {
    link: CommandLink<'q, U>,
    pdn: PDN,
    chip: C,
    delay: D,
    config: ModuleConfig,
    rtx: RtxConfig,
    status: RadioStatus,
    bands: BandLimits,
    model: Option<ModuleModel>,
    firmware: Option<FirmwareVersion>,
    diagnostics: Diagnostics,
    tx_power: f32,
    initialized: bool,
}

impl<'q, U, PDN, C, D> ModuleBackend<'q, U, PDN, C, D>
where
    U: UartTx + SetBaudRate,
    PDN: OutputPin,
    C: RfChip,
    D: DelayNs,
{
    pub fn new(link: CommandLink<'q, U>, pdn: PDN, chip: C, delay: D, config: ModuleConfig) -> Self {
        Self {
            link,
            pdn,
            chip,
            delay,
            config,
            rtx: RtxConfig::default(),
            status: RadioStatus::Off,
            bands: BandLimits::none(),
            model: None,
            firmware: None,
            diagnostics: Diagnostics::new(),
            tx_power: 0.0,
            initialized: false,
        }
    }

    /// Model detected by the last successful handshake
    pub fn model(&self) -> Option<ModuleModel> {
        self.model
    }

    /// Firmware reported by the last successful handshake
    pub fn firmware(&self) -> Option<FirmwareVersion> {
        self.firmware
    }

    /// Model and firmware strings for the UI info screen
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Bands this module serves; empty until the handshake succeeds
    pub fn bands(&self) -> &BandLimits {
        &self.bands
    }

    /// Output power applied at the last `enable_tx`, in watts
    pub fn tx_power(&self) -> f32 {
        self.tx_power
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn chip(&self) -> &C {
        &self.chip
    }

    pub fn link(&self) -> &CommandLink<'q, U> {
        &self.link
    }

    fn reset_module(&mut self) {
        self.pdn.set_high();
        self.delay.delay_ms(self.config.reset_hold_ms);
        self.pdn.set_low();
        self.delay.delay_ms(self.config.reset_hold_ms);
    }

    fn wait_for_model(&mut self) -> Result<ModuleModel, ModuleError<<U as UartTx>::Error>> {
        let timeout = self.config.request_timeout_ms;
        let limit = self.config.model_retry_limit;

        for attempt in 1..=limit {
            match self.link.request(Command::Model, &mut self.delay, timeout) {
                Ok(line) => match line.text().map(ModuleModel::parse) {
                    Some(Ok(model)) if self.config.band_limits.supports(Band::from(model)) => {
                        return Ok(model);
                    }
                    _ => trace!("Radio: attempt {}: no known model", attempt),
                },
                Err(LinkError::Timeout) => trace!("Radio: attempt {}: timeout", attempt),
                Err(e) => return Err(e.into()),
            }
        }

        Err(ModuleError::NotResponding { attempts: limit })
    }

    fn check_firmware(&mut self) -> Result<FirmwareVersion, ModuleError<<U as UartTx>::Error>> {
        let line = self.link.request(
            Command::Version,
            &mut self.delay,
            self.config.request_timeout_ms,
        )?;
        let text = line.text().ok_or(ResponseError::Empty)?;
        let found = FirmwareVersion::parse(text)?;

        let required = self.config.min_firmware;
        if !found.is_at_least(&required) {
            return Err(ModuleError::UnsupportedFirmware { found, required });
        }
        Ok(found)
    }

    fn enable_turbo(&mut self) -> Result<(), ModuleError<<U as UartTx>::Error>> {
        self.link.request(
            Command::Turbo,
            &mut self.delay,
            self.config.request_timeout_ms,
        )?;
        self.link
            .uart_mut()
            .set_baudrate(self.config.turbo_baudrate)
            .map_err(|_| ModuleError::BaudRate)
    }

    fn handshake(&mut self) -> Result<(), ModuleError<<U as UartTx>::Error>> {
        self.reset_module();

        let model = self.wait_for_model()?;
        let firmware = self.check_firmware()?;
        self.enable_turbo()?;

        self.bands = self.config.band_limits.only(Band::from(model));
        self.model = Some(model);
        self.firmware = Some(firmware);

        self.diagnostics.clear();
        self.diagnostics.register(DIAG_MODEL, model.name());
        self.diagnostics.register(DIAG_FIRMWARE, &firmware.short());

        info!("Radio: {} firmware {}", model.name(), firmware);
        Ok(())
    }

    fn band_of(&self, freq: u32) -> Band {
        self.bands.band_of(freq)
    }

    /// FM channel filter from the configured bandwidth; digital modes keep
    /// the filter chosen by `set_opmode`
    fn apply_bandwidth(&mut self) {
        if self.rtx.op_mode != OpMode::Fm {
            return;
        }
        let bandwidth = match self.rtx.bandwidth {
            Bandwidth::Bw12p5 => ChipBandwidth::Narrow,
            Bandwidth::Bw20 | Bandwidth::Bw25 => ChipBandwidth::Wide,
        };
        self.chip.set_bandwidth(bandwidth);
    }
}

impl<'q, U, PDN, C, D> RadioBackend for ModuleBackend<'q, U, PDN, C, D>
where
    U: UartTx + SetBaudRate,
    PDN: OutputPin,
    C: RfChip,
    D: DelayNs,
{
    type Error = ModuleError<<U as UartTx>::Error>;

    fn init(&mut self, config: &RtxConfig) -> Result<(), Self::Error> {
        self.rtx = *config;
        self.status = RadioStatus::Off;
        self.initialized = false;
        self.bands = BandLimits::none();
        self.model = None;
        self.firmware = None;

        if let Err(e) = self.handshake() {
            warn!("Radio: module handshake failed");
            return Err(e);
        }

        self.chip.init();
        self.initialized = true;
        Ok(())
    }

    fn terminate(&mut self) {
        if self.initialized {
            self.disable_rtx();
            self.chip.terminate();
        }
        self.status = RadioStatus::Off;
        self.initialized = false;
        self.pdn.set_high();
    }

    fn tune_vcxo(&mut self, _vhf_offset: i16, _uhf_offset: i16) {}

    fn set_opmode(&mut self, mode: OpMode) {
        if !self.initialized {
            return;
        }
        match mode {
            OpMode::Fm => self.chip.set_op_mode(ChipOpMode::Fm),
            OpMode::Dmr => {
                self.chip.set_op_mode(ChipOpMode::Dmr);
                self.chip.set_bandwidth(ChipBandwidth::Narrow);
            }
            OpMode::M17 => {
                // DMR mode bypasses the RX audio filter; 25 kHz keeps the deviation
                self.chip.set_op_mode(ChipOpMode::Dmr);
                self.chip.set_bandwidth(ChipBandwidth::Wide);
            }
        }
    }

    fn check_rx_digital_squelch(&mut self) -> bool {
        self.initialized && self.chip.rx_ctcss_detected()
    }

    fn enable_rx(&mut self) {
        if !self.initialized {
            return;
        }
        let freq = self.rtx.rx_frequency;
        if !self.band_of(freq).is_servable() {
            debug!("Radio: RX {} Hz out of band", freq);
            return;
        }

        self.apply_bandwidth();
        self.chip.set_frequency(freq);
        self.chip.set_func_mode(FuncMode::Rx);
        if self.rtx.rx_tone_enabled {
            self.chip.enable_rx_ctcss(self.rtx.rx_tone);
        }
        self.status = RadioStatus::Rx;
    }

    fn enable_tx(&mut self) {
        if !self.initialized {
            return;
        }
        if self.rtx.tx_disable {
            debug!("Radio: TX inhibited");
            return;
        }
        let freq = self.rtx.tx_frequency;
        if !self.band_of(freq).is_servable() {
            debug!("Radio: TX {} Hz out of band", freq);
            return;
        }

        self.apply_bandwidth();
        self.chip.set_frequency(freq);
        self.tx_power = self
            .rtx
            .clamped_tx_power(self.config.tx_power_min_w, self.config.tx_power_max_w);
        self.chip.set_tx_power(self.tx_power);

        // Keying straight after retuning leaves a carrier-only gap at burst start
        self.delay.delay_ms(self.config.tx_settle_ms);

        self.chip.set_func_mode(FuncMode::Tx);
        if self.rtx.tx_tone_enabled {
            self.chip.enable_tx_ctcss(self.rtx.tx_tone);
        }
        self.status = RadioStatus::Tx;
    }

    fn disable_rtx(&mut self) {
        if self.initialized {
            self.chip.disable_ctcss();
            self.chip.set_func_mode(FuncMode::Off);
        }
        self.status = RadioStatus::Off;
    }

    fn update_configuration(&mut self, config: &RtxConfig) {
        if !self.initialized {
            return;
        }

        let rx_band = self.band_of(config.rx_frequency);
        let tx_band = self.band_of(config.tx_frequency);
        if !rx_band.is_servable() || !tx_band.is_servable() {
            debug!("Radio: configuration out of band, ignored");
            return;
        }
        self.rtx = *config;

        // Hardware only follows while active; enable_rx/enable_tx apply the rest
        match self.status {
            RadioStatus::Rx => self.enable_rx(),
            RadioStatus::Tx => self.enable_tx(),
            RadioStatus::Off => {}
        }
    }

    fn rssi(&mut self) -> f32 {
        if self.initialized {
            f32::from(self.chip.read_rssi())
        } else {
            0.0
        }
    }

    fn status(&self) -> RadioStatus {
        self.status
    }

    fn config(&self) -> &RtxConfig {
        &self.rtx
    }
}

impl<U, PDN, C, D> AudioLines for ModuleBackend<'_, U, PDN, C, D> {
    fn set_mic_line(&mut self, _open: bool) {}

    fn set_af_output(&mut self, _enabled: bool) {}

    fn set_mcu_output(&mut self, _driven: bool) {}
}

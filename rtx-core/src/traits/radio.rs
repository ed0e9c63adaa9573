//! Radio backend contract

use crate::config::{OpMode, RtxConfig};
use crate::status::RadioStatus;

/// Operations every radio backend provides
///
/// Both realizations (discrete synthesizer, self-contained RF module) share
/// these external semantics:
///
/// - `enable_rx` does nothing when the receive frequency is outside the
///   hardware's bands
/// - `enable_tx` does nothing when `tx_disable` is set or the transmit
///   frequency is outside the hardware's bands
/// - `update_configuration` reprograms the hardware only while RX or TX is
///   active and never changes the status
///
/// The contract does not pass through `Off` when switching between RX and
/// TX. On half-duplex hardware the caller must call `disable_rtx` first.
pub trait RadioBackend {
    /// Initialization failure
    type Error;

    /// Make the hardware safe, set status to `Off` and bring up the backend
    ///
    /// A failure leaves the backend unusable; no RF configuration has been
    /// applied.
    fn init(&mut self, config: &RtxConfig) -> Result<(), Self::Error>;

    /// Force `Off` and return the hardware to its reset state
    fn terminate(&mut self);

    /// Reference oscillator calibration, in ppm per band
    fn tune_vcxo(&mut self, vhf_offset: i16, uhf_offset: i16);

    /// Reconfigure modulation-dependent routing; status is not affected
    fn set_opmode(&mut self, mode: OpMode);

    /// Tone or carrier detection result, `false` if unsupported
    fn check_rx_digital_squelch(&mut self) -> bool;

    /// Tune to the receive frequency and enter `Rx`
    fn enable_rx(&mut self);

    /// Tune to the transmit frequency and enter `Tx`
    fn enable_tx(&mut self);

    /// Stop RX/TX and enter `Off`
    fn disable_rtx(&mut self);

    /// Replace the configuration snapshot and apply it if active
    fn update_configuration(&mut self, config: &RtxConfig);

    /// Received signal strength, backend-specific units, 0 if unsupported
    fn rssi(&mut self) -> f32;

    /// Current operating status
    fn status(&self) -> RadioStatus;

    /// Configuration snapshot currently applied
    fn config(&self) -> &RtxConfig;
}

//! Radio task
//!
//! Owns the backend and the set of open audio paths. Commands are applied
//! in arrival order; between commands the synthesizer lock line is sampled
//! on a fixed tick while the RF stage is active.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Ticker};

use rtx_core::audio::{self, OpenPaths, PathError};
use rtx_core::keying;
use rtx_core::traits::RadioBackend;
use rtx_core::RtxConfig;

use crate::board::Radio;
use crate::channels::{LockSample, RadioCommand, PLL_LOCK, RADIO_CMD};

/// Lock sampling interval in milliseconds
pub const LOCK_SAMPLE_MS: u64 = 50;

#[embassy_executor::task]
pub async fn radio_task(mut radio: Radio, config: RtxConfig) {
    info!("Radio task started");

    if let Err(e) = radio.init(&config) {
        match e {}
    }
    audio::init(&mut radio);

    let mut paths = OpenPaths::new();
    let status = keying::set_transmit(&mut radio, &mut paths, false);
    info!(
        "Radio: RX {} Hz, TX {} Hz, status {}",
        config.rx_frequency, config.tx_frequency, status
    );

    let mut ticker = Ticker::every(Duration::from_millis(LOCK_SAMPLE_MS));

    loop {
        match select(RADIO_CMD.receive(), ticker.next()).await {
            Either::First(cmd) => handle_command(&mut radio, &mut paths, cmd),
            Either::Second(()) => {
                let status = radio.status();
                if status.is_active() {
                    PLL_LOCK.signal(LockSample {
                        locked: radio.is_pll_locked(),
                        status,
                    });
                }
            }
        }
    }
}

fn handle_command(radio: &mut Radio, paths: &mut OpenPaths, cmd: RadioCommand) {
    debug!("Radio: {}", cmd);

    match cmd {
        RadioCommand::Configure(config) => radio.update_configuration(&config),
        RadioCommand::SetOpMode(mode) => radio.set_opmode(mode),
        RadioCommand::EnableRx => radio.enable_rx(),
        RadioCommand::EnableTx => radio.enable_tx(),
        RadioCommand::Disable => radio.disable_rtx(),
        RadioCommand::Transmit(key) => {
            let status = keying::set_transmit(radio, paths, key);
            if key && !status.is_transmitting() {
                warn!("Radio: transmit refused, {}", status);
            }
        }
        RadioCommand::Connect(path) => match paths.connect(radio, path) {
            Ok(()) | Err(PathError::AlreadyOpen) => {}
            Err(PathError::Conflict) => warn!("Audio: {} conflicts with an open path", path),
        },
        RadioCommand::Disconnect(path) => {
            paths.disconnect(radio, path);
        }
    }
}

//! rtx - Handheld transceiver firmware
//!
//! Firmware binary for STM32F401 boards with a discrete MC145158
//! synthesizer front end. The radio task owns the backend; the PTT switch
//! and the lock monitor drive it through a command channel.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use rtx_core::RtxConfig;

mod board;
mod channels;
mod tasks;

/// Power-on channel: 145.500 MHz simplex FM
const DEFAULT_FREQUENCY_HZ: u32 = 145_500_000;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("rtx firmware starting...");

    let p = embassy_stm32::init(Default::default());
    let board = board::Board::new(p);
    info!("Board initialized");

    let config = RtxConfig::simplex(DEFAULT_FREQUENCY_HZ);

    spawner.spawn(unwrap!(tasks::radio_task(board.radio, config)));
    spawner.spawn(unwrap!(tasks::ptt_task(
        board.ptt_switch,
        tasks::PttConfig::default()
    )));
    spawner.spawn(unwrap!(tasks::lock_monitor_task(
        tasks::LockMonitorConfig::default()
    )));

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

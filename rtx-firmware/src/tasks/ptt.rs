//! Push-to-talk switch task
//!
//! Debounces the PTT switch and forwards each settled edge to the radio
//! task, which does the RF and audio switching.

use defmt::*;
use embassy_stm32::gpio::Input;
use embassy_time::{Duration, Ticker};

use crate::channels::{RadioCommand, RADIO_CMD};

/// PTT switch configuration
pub struct PttConfig {
    /// Debounce time in milliseconds
    pub debounce_ms: u32,
    /// Poll interval in milliseconds
    pub poll_ms: u32,
}

impl Default for PttConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 40,
            poll_ms: 10,
        }
    }
}

#[embassy_executor::task]
pub async fn ptt_task(switch: Input<'static>, config: PttConfig) {
    info!("PTT task started");

    let poll_ms = config.poll_ms.max(1);
    let threshold = (config.debounce_ms / poll_ms).max(1);
    let mut ticker = Ticker::every(Duration::from_millis(u64::from(poll_ms)));
    let mut pressed = false;
    let mut counter: u32 = 0;

    loop {
        ticker.next().await;

        // Switch pulls the line low
        let raw = switch.is_low();
        if raw == pressed {
            counter = 0;
            continue;
        }

        counter += 1;
        if counter < threshold {
            continue;
        }
        counter = 0;
        pressed = raw;

        info!("PTT {}", if pressed { "pressed" } else { "released" });
        RADIO_CMD.send(RadioCommand::Transmit(pressed)).await;
    }
}

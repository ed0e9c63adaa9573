//! Synthesizer lock monitor task
//!
//! Watches the lock samples published by the radio task. An unlocked
//! synthesizer while transmitting puts the carrier off channel, so a
//! sustained loss of lock in TX drops the transmitter back to receive.

use defmt::*;

use crate::channels::{RadioCommand, PLL_LOCK, RADIO_CMD};

/// Lock monitor configuration
pub struct LockMonitorConfig {
    /// Consecutive unlocked samples before reporting loss of lock
    pub unlock_samples: u32,
}

impl Default for LockMonitorConfig {
    fn default() -> Self {
        Self { unlock_samples: 3 }
    }
}

#[embassy_executor::task]
pub async fn lock_monitor_task(config: LockMonitorConfig) {
    info!("Lock monitor task started");

    let threshold = config.unlock_samples.max(1);
    let mut unlocked_count: u32 = 0;
    let mut lost = false;

    loop {
        let sample = PLL_LOCK.wait().await;

        if sample.locked {
            if lost {
                info!("PLL lock regained");
                lost = false;
            }
            unlocked_count = 0;
            continue;
        }

        unlocked_count = unlocked_count.saturating_add(1);
        if unlocked_count < threshold || lost {
            continue;
        }

        lost = true;
        warn!("PLL lock lost ({})", sample.status);
        if sample.status.is_transmitting() {
            RADIO_CMD.send(RadioCommand::Transmit(false)).await;
        }
    }
}

//! Charge timer tick source

use defmt::*;
use embassy_time::{Duration, Ticker};

use scooter_core::config::TICK_PERIOD_MS;

use crate::shared::CHARGE_TIMER;

/// Tick task - advances the charge timer at a fixed period
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(TICK_PERIOD_MS)));

    loop {
        ticker.next().await;

        if CHARGE_TIMER.is_armed() {
            CHARGE_TIMER.on_tick();
            trace!("Charge tick {}", CHARGE_TIMER.snapshot().ticks);
            if !CHARGE_TIMER.is_armed() {
                debug!("Charge timer elapsed");
            }
        }
    }
}

//! Push button sampling
//!
//! Samples every button at a fixed rate, debounces, and publishes
//! rising edges to the control task. Presses that happen while the
//! control loop is blocked in a delay are still recorded.

use defmt::*;
use embassy_time::{Duration, Ticker};

use scooter_core::config::INPUT_SAMPLE_MS;
use scooter_core::input::ButtonEdges;

use crate::board::Buttons;
use crate::shared::BUTTONS;

#[embassy_executor::task]
pub async fn input_task(buttons: Buttons, mut edges: ButtonEdges) {
    info!("Input task started");

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(INPUT_SAMPLE_MS)));

    loop {
        ticker.next().await;

        let (charge, history, security) = buttons.levels();
        edges.sample(charge, history, security, &BUTTONS);
    }
}

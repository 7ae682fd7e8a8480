//! Control loop task
//!
//! Samples the inputs, runs one controller step, clears the edge flags
//! the step handled, then applies the step's commands in order. Delay
//! commands are the only place the loop yields.

use defmt::*;
use embassy_time::Timer;

use scooter_core::config::AnalogChannel;
use scooter_core::traits::{AnalogInput, Applied, Board};
use scooter_core::{Controller, Inputs, Outputs, StepReport};

use crate::board::{ScooterBoard, Sensors};
use crate::shared::{BUTTONS, CHARGE_TIMER};

#[embassy_executor::task]
pub async fn control_task(mut board: ScooterBoard, mut sensors: Sensors, security_level: bool) {
    info!("Control task started");

    let mut controller = Controller::new(security_level);
    let splash = controller.boot();
    apply_outputs(&mut board, &splash).await;

    loop {
        let inputs = sample_inputs(&mut sensors);
        let out = controller.step(&inputs);

        if out.consumed.charge {
            BUTTONS.charge.take();
            debug!("Charge press handled");
        }
        if out.consumed.history {
            BUTTONS.history.take();
            debug!("History press handled");
        }
        trace!("Step: {} -> {} commands", inputs, out.commands().len());

        log_report(&out.report);
        apply_outputs(&mut board, &out).await;
    }
}

fn sample_inputs(sensors: &mut impl AnalogInput) -> Inputs {
    Inputs {
        accelerator: sensors.read_analog(AnalogChannel::Accelerator),
        distance: sensors.read_analog(AnalogChannel::Distance),
        security_level: BUTTONS.security.get(),
        charge_pressed: BUTTONS.charge.is_raised(),
        history_pressed: BUTTONS.history.is_raised(),
        charge_timer: CHARGE_TIMER.snapshot(),
    }
}

/// Execute commands in order; a failed command is logged and skipped
async fn apply_outputs(board: &mut impl Board, out: &Outputs) {
    for command in out.commands() {
        match board.apply(command) {
            Ok(Applied::Done) => {}
            Ok(Applied::Delay(ms)) => Timer::after_millis(u64::from(ms)).await,
            Ok(Applied::ArmChargeTimer) => CHARGE_TIMER.arm(),
            Err(e) => warn!("Command {} failed: {}", command, e),
        }
    }
}

fn log_report(report: &StepReport) {
    if report.brake_started {
        warn!("Obstacle detected, emergency stop");
    }
    if report.brake_released {
        info!("Obstacle cleared, resuming");
    }
    if let Some(enabled) = report.security_toggled {
        info!("Security {}", if enabled { "enabled" } else { "disabled" });
    }
    if let Some((from, to)) = report.charge_transition {
        info!("Charge {} -> {}", from, to);
    }
}

//! The machine state record and the cooperative scheduler step
//!
//! One step is one main-loop iteration:
//!
//! 1. If an emergency stop is running, advance it and do nothing else.
//! 2. Dispatch at most one of: security toggle, charge press, history press.
//! 3. While a charge session blocks motion, run one charging iteration.
//! 4. Otherwise run the speed controller, and on every
//!    [`DISTANCE_CHECK_EVERY`]th iteration check for an obstacle.
//! 5. End with the loop period delay.

use crate::charge::ChargeState;
use crate::config::{
    Indicator, BOOT_SETTLE_MS, BOOT_SPLASH_MS, DISTANCE_CHECK_EVERY, LOOP_PERIOD_MS, NOTICE_MS,
};
use crate::safety::EmergencyStop;
use crate::security::SecurityState;
use crate::speed::VehicleState;

use super::inputs::Inputs;
use super::lights::IndicatorLevels;
use super::output::Outputs;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MachineState {
    pub vehicle: VehicleState,
    pub security: SecurityState,
    pub charge: ChargeState,
    pub brake: EmergencyStop,
    pub lights: IndicatorLevels,
    /// Iterations since the last distance check
    pub distance_counter: u8,
}

impl MachineState {
    /// Startup state with the security button level read at boot
    pub fn new(security_level: bool) -> Self {
        Self {
            security: SecurityState::new(security_level),
            ..Self::default()
        }
    }

    /// Run one main-loop iteration
    pub fn step(&mut self, inputs: &Inputs) -> Outputs {
        let mut out = Outputs::new();

        if self.brake.is_active() {
            out.report.brake_released = self.brake.advance(
                &mut self.vehicle,
                &mut self.lights,
                self.security.enabled,
                inputs.distance,
                &mut out,
            );
            return out;
        }

        self.dispatch(inputs, &mut out);

        if self.charge.mode.blocks_motion() {
            if let Some(change) = self.charge.run(inputs.charge_timer, &mut self.lights, &mut out) {
                out.report.charge_transition = Some(change);
            }
            return out;
        }

        self.vehicle.update_speed(inputs.accelerator, &mut out);

        self.distance_counter += 1;
        if self.distance_counter >= DISTANCE_CHECK_EVERY {
            self.distance_counter = 0;

            if self
                .brake
                .should_engage(self.security.enabled, &self.vehicle, inputs.distance)
            {
                self.brake.engage(&mut self.vehicle, &mut self.lights, &mut out);
                out.report.brake_started = true;
                return out;
            }
        }

        out.delay(LOOP_PERIOD_MS);
        out
    }

    /// Handle at most one button action
    ///
    /// The security level is always tracked so a held button cannot
    /// re-toggle; an edge flag that is not handled stays pending.
    fn dispatch(&mut self, inputs: &Inputs, out: &mut Outputs) {
        if let Some(enabled) = self.security.poll(inputs.security_level, out) {
            out.report.security_toggled = Some(enabled);
            return;
        }

        if inputs.charge_pressed {
            out.consumed.charge = true;
            if let Some(change) = self.charge.on_press(out) {
                out.report.charge_transition = Some(change);
            }
            return;
        }

        if inputs.history_pressed {
            out.consumed.history = true;
            out.notice("HISTORIQUE", NOTICE_MS);
        }
    }
}

/// Functional form of [`MachineState::step`]
pub fn step(mut state: MachineState, inputs: &Inputs) -> (MachineState, Outputs) {
    let out = state.step(inputs);
    (state, out)
}

/// Owner of the machine state for the runtime
#[derive(Debug, Clone, Default)]
pub struct Controller {
    state: MachineState,
}

impl Controller {
    /// Create a controller with the security button level read at boot
    pub fn new(security_level: bool) -> Self {
        Self {
            state: MachineState::new(security_level),
        }
    }

    /// Current state
    pub fn state(&self) -> &MachineState {
        &self.state
    }

    /// Startup sequence: outputs safe, splash shown, charge light blinked
    pub fn boot(&mut self) -> Outputs {
        let mut out = Outputs::new();

        out.duty(0);
        out.direction(false, false);
        for id in Indicator::ALL {
            self.state.lights.set(id, false, &mut out);
        }

        out.clear();
        out.render_str(1, 1, "SYSTEME PRET");
        self.state.lights.set(Indicator::ChargeLight, true, &mut out);
        out.delay(BOOT_SPLASH_MS);
        self.state.lights.set(Indicator::ChargeLight, false, &mut out);
        out.delay(BOOT_SETTLE_MS);
        out.clear();

        out
    }

    /// Run one main-loop iteration
    pub fn step(&mut self, inputs: &Inputs) -> Outputs {
        self.state.step(inputs)
    }
}

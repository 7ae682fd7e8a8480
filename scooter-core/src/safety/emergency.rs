//! Emergency stop sequence
//!
//! Entered when an obstacle is detected with security enabled. The
//! sequence is a small state machine advanced once per controller step:
//!
//! ```text
//! Inactive --engage--> RampingDown --speed 0--> Holding --clear--> Inactive
//! ```
//!
//! While it is active no other component runs. Each ramp step removes
//! [`BRAKE_STEP`] points of speed; once stopped, the distance is polled
//! every [`OBSTACLE_POLL_MS`] until the obstacle clears. That wait has no
//! timeout.

use crate::config::{
    Indicator, ADC_MAX, BRAKE_ALERT_MS, BRAKE_STEP, BRAKE_STEP_MS, LOOP_PERIOD_MS,
    OBSTACLE_POLL_MS, OBSTACLE_THRESHOLD,
};
use crate::speed::{duty_for, VehicleState};
use crate::state::lights::IndicatorLevels;
use crate::state::output::text;
use crate::state::Outputs;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Emergency stop phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BrakePhase {
    /// Normal operation
    #[default]
    Inactive,
    /// Removing speed in fixed steps
    RampingDown,
    /// Stopped, waiting for the obstacle to clear
    Holding,
}

/// Whether a distance sample indicates an obstacle
pub fn is_obstacle(distance: u16) -> bool {
    distance.min(ADC_MAX) < OBSTACLE_THRESHOLD
}

/// Emergency stop controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmergencyStop {
    phase: BrakePhase,
}

impl EmergencyStop {
    /// Current phase
    pub fn phase(&self) -> BrakePhase {
        self.phase
    }

    /// Whether the sequence is running
    pub fn is_active(&self) -> bool {
        self.phase != BrakePhase::Inactive
    }

    /// Whether a distance sample should start the sequence
    pub fn should_engage(&self, security_enabled: bool, vehicle: &VehicleState, distance: u16) -> bool {
        security_enabled && !vehicle.braking && !self.is_active() && is_obstacle(distance)
    }

    /// Start the sequence: braking lights on, alert shown
    pub fn engage(
        &mut self,
        vehicle: &mut VehicleState,
        lights: &mut IndicatorLevels,
        out: &mut Outputs,
    ) {
        vehicle.braking = true;
        lights.set(Indicator::BrakeLight, true, out);
        lights.set(Indicator::Auxiliary, true, out);

        out.clear();
        out.render_str(1, 1, "OBSTACLE !");
        out.render_str(2, 1, "FREINAGE !");
        out.delay(BRAKE_ALERT_MS);

        self.phase = BrakePhase::RampingDown;
    }

    /// Advance the sequence by one step
    ///
    /// Returns true when the sequence finished and normal operation may
    /// resume.
    pub fn advance(
        &mut self,
        vehicle: &mut VehicleState,
        lights: &mut IndicatorLevels,
        security_enabled: bool,
        distance: u16,
        out: &mut Outputs,
    ) -> bool {
        match self.phase {
            BrakePhase::Inactive => false,
            BrakePhase::RampingDown => {
                if vehicle.current_speed > 0 {
                    vehicle.current_speed = vehicle.current_speed.saturating_sub(BRAKE_STEP);

                    out.direction(false, false);
                    out.duty(duty_for(vehicle.current_speed));

                    out.clear();
                    out.render_str(1, 1, "FREIN");
                    out.render(2, 1, text(format_args!("V : {}%", vehicle.current_speed)));
                    out.delay(BRAKE_STEP_MS);
                    false
                } else {
                    out.duty(0);
                    out.direction(false, false);
                    out.clear();
                    out.render_str(1, 1, "ARRET");

                    self.phase = BrakePhase::Holding;
                    self.poll(vehicle, lights, security_enabled, distance, out)
                }
            }
            BrakePhase::Holding => self.poll(vehicle, lights, security_enabled, distance, out),
        }
    }

    fn poll(
        &mut self,
        vehicle: &mut VehicleState,
        lights: &mut IndicatorLevels,
        security_enabled: bool,
        distance: u16,
        out: &mut Outputs,
    ) -> bool {
        if security_enabled && is_obstacle(distance) {
            out.delay(OBSTACLE_POLL_MS);
            return false;
        }

        out.clear();
        lights.set(Indicator::BrakeLight, false, out);
        lights.set(Indicator::Auxiliary, false, out);
        vehicle.braking = false;
        self.phase = BrakePhase::Inactive;

        // Resume the normal loop cadence
        out.delay(LOOP_PERIOD_MS);
        true
    }
}

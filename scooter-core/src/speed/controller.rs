//! Accelerator mapping and actuator output

use crate::config::{ADC_MAX, DEADZONE_HIGH, DEADZONE_LOW, DUTY_MAX, FULL_SPEED};
use crate::state::Outputs;
use crate::state::output::text;

use super::schedule::approach;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Intended direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Forward,
    Backward,
    /// No motion intended; both direction lines low
    #[default]
    Neutral,
}

impl Direction {
    /// Direction line levels as `(forward, backward)`
    pub fn lines(self) -> (bool, bool) {
        match self {
            Direction::Forward => (true, false),
            Direction::Backward => (false, true),
            Direction::Neutral => (false, false),
        }
    }
}

/// Direction and target speed derived from the accelerator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Demand {
    pub direction: Direction,
    /// Target speed (percent)
    pub target: u8,
}

/// Vehicle motion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VehicleState {
    /// Applied speed (percent, 0-100)
    pub current_speed: u8,
    /// Direction requested by the accelerator
    pub target_direction: Direction,
    pub braking: bool,
}

/// Convert a raw accelerator sample to a percentage
///
/// Samples above full scale are clamped. Integer division truncates.
pub fn speed_percent(sample: u16) -> u8 {
    let sample = u32::from(sample.min(ADC_MAX));
    (sample * 100 / u32::from(ADC_MAX)) as u8
}

/// Map a speed percentage to direction and target, with a deadzone
/// around the mid-point
pub fn demand(percent: u8) -> Demand {
    if percent < DEADZONE_LOW {
        Demand {
            direction: Direction::Backward,
            target: FULL_SPEED,
        }
    } else if percent > DEADZONE_HIGH {
        Demand {
            direction: Direction::Forward,
            target: FULL_SPEED,
        }
    } else {
        Demand {
            direction: Direction::Neutral,
            target: 0,
        }
    }
}

/// Scale a speed percentage to actuator duty (0-255)
pub fn duty_for(speed: u8) -> u8 {
    (u16::from(speed.min(100)) * u16::from(DUTY_MAX) / 100) as u8
}

impl VehicleState {
    /// Run one speed-controller iteration
    ///
    /// Sets the direction lines, ramps `current_speed` one step toward the
    /// target, drives the actuator and shows the new percentage. The caller
    /// skips this entirely while braking or charging.
    pub fn update_speed(&mut self, accelerator: u16, out: &mut Outputs) {
        let demand = demand(speed_percent(accelerator));
        self.target_direction = demand.direction;

        let (forward, backward) = demand.direction.lines();
        out.direction(forward, backward);

        self.current_speed = approach(self.current_speed, demand.target);
        out.duty(duty_for(self.current_speed));

        out.clear();
        out.render(1, 1, text(format_args!("{}%", self.current_speed)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Command;

    #[test]
    fn test_speed_percent() {
        assert_eq!(speed_percent(0), 0);
        assert_eq!(speed_percent(1023), 100);
        assert_eq!(speed_percent(512), 50);
        assert_eq!(speed_percent(5000), 100);
    }

    #[test]
    fn test_demand_regions() {
        assert_eq!(demand(0).direction, Direction::Backward);
        assert_eq!(demand(47).target, 100);
        assert_eq!(demand(48), Demand { direction: Direction::Neutral, target: 0 });
        assert_eq!(demand(52), Demand { direction: Direction::Neutral, target: 0 });
        assert_eq!(demand(53).direction, Direction::Forward);
        assert_eq!(demand(100).target, 100);
    }

    #[test]
    fn test_duty_scaling() {
        assert_eq!(duty_for(0), 0);
        assert_eq!(duty_for(100), 255);
        assert_eq!(duty_for(50), 127);
        assert_eq!(duty_for(200), 255);
    }

    #[test]
    fn test_update_forward() {
        let mut vehicle = VehicleState::default();
        let mut out = Outputs::new();

        vehicle.update_speed(1023, &mut out);

        assert_eq!(vehicle.current_speed, 5);
        assert_eq!(vehicle.target_direction, Direction::Forward);
        assert_eq!(
            out.commands()[..2],
            [
                Command::SetDirection { forward: true, backward: false },
                Command::SetDuty(duty_for(5)),
            ]
        );
        assert!(out.rendered("5%"));
    }

    #[test]
    fn test_update_deadzone_slows_down() {
        let mut vehicle = VehicleState {
            current_speed: 50,
            target_direction: Direction::Forward,
            braking: false,
        };
        let mut out = Outputs::new();

        vehicle.update_speed(512, &mut out);

        assert_eq!(vehicle.current_speed, 40);
        assert_eq!(vehicle.target_direction, Direction::Neutral);
        assert_eq!(
            out.commands()[0],
            Command::SetDirection { forward: false, backward: false }
        );
    }
}

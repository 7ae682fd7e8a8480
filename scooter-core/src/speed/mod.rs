//! Speed controller
//!
//! Maps the accelerator sample to a direction and target speed, then moves
//! the applied speed toward the target along a non-linear step schedule.

pub mod controller;
pub mod schedule;

pub use controller::{demand, duty_for, speed_percent, Demand, Direction, VehicleState};
pub use schedule::{approach, step_size};

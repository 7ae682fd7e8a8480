//! Obstacle safety
//!
//! Emergency stop on obstacle detection.

pub mod emergency;

pub use emergency::{is_obstacle, BrakePhase, EmergencyStop};

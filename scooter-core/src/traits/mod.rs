//! Collaborator traits
//!
//! These traits define the interface between the control logic and the
//! hardware-specific implementations: analog input, motor driver,
//! character display, and indicator outputs.

pub mod analog;
pub mod board;
pub mod display;
pub mod indicator;
pub mod motor;

pub use analog::AnalogInput;
pub use board::{Applied, Board, OutputError};
pub use display::{DisplayError, DisplaySink};
pub use indicator::{IndicatorBank, IndicatorError};
pub use motor::{MotorError, MotorOutput};

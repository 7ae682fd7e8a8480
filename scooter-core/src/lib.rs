//! Board-agnostic control logic for the kick-scooter controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (motor, display, indicators, analog input)
//! - Debounced edge detection for the push buttons
//! - Charge timer tick source
//! - Speed controller with its non-linear step schedule
//! - Emergency stop sequence
//! - Charging state machine
//! - Security toggle
//! - The machine state record and its `step` function
//! - Compiled-in configuration constants

#![no_std]
#![deny(unsafe_code)]

pub mod charge;
pub mod config;
pub mod input;
pub mod safety;
pub mod security;
pub mod speed;
pub mod state;
pub mod tick;
pub mod traits;

pub use state::{step, Command, Consumed, Controller, Inputs, MachineState, Outputs, StepReport};

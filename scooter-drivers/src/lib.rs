//! Hardware driver implementations
//!
//! This crate provides implementations of the collaborator traits defined
//! in scooter-core over `embedded-hal` 1.0:
//!
//! - Motor: H-bridge with one PWM channel and two direction lines
//! - Display: HD44780 character LCD in 4-bit mode
//! - Indicators: one GPIO per status light

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod indicator;
pub mod motor;

pub use display::Hd44780;
pub use indicator::GpioIndicators;
pub use motor::HBridge;

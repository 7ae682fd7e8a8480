//! Hardware assignment
//!
//! Logical names for the analog channels and discrete outputs the core
//! talks about. Board pin numbers live in the firmware crate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Analog input channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AnalogChannel {
    /// Accelerator potentiometer (channel 0)
    Accelerator,
    /// Obstacle distance sensor (channel 1)
    Distance,
}

impl AnalogChannel {
    /// Hardware channel number
    pub fn index(self) -> u8 {
        match self {
            AnalogChannel::Accelerator => 0,
            AnalogChannel::Distance => 1,
        }
    }
}

/// Discrete status output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Indicator {
    /// Red light: braking, and one half of the charge flicker
    BrakeLight,
    /// Auxiliary output held high for the whole emergency stop
    Auxiliary,
    /// Green light: charge flicker, charge complete, boot splash
    ChargeLight,
}

impl Indicator {
    /// All indicators, in bank order
    pub const ALL: [Indicator; 3] = [
        Indicator::BrakeLight,
        Indicator::Auxiliary,
        Indicator::ChargeLight,
    ];

    /// Position of this indicator in an indicator bank
    pub fn index(self) -> usize {
        match self {
            Indicator::BrakeLight => 0,
            Indicator::Auxiliary => 1,
            Indicator::ChargeLight => 2,
        }
    }
}

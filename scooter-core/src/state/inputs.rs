//! One sample of everything the controller reads

use crate::config::ADC_MAX;
use crate::tick::TimerSnapshot;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inputs for one controller step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Inputs {
    /// Raw accelerator sample (0-1023; larger values are clamped)
    pub accelerator: u16,
    /// Raw distance sample (0-1023; larger values are clamped)
    pub distance: u16,
    /// Debounced security button level
    pub security_level: bool,
    pub charge_pressed: bool,
    pub history_pressed: bool,
    pub charge_timer: TimerSnapshot,
}

impl Default for Inputs {
    /// Accelerator at rest, no obstacle, no buttons
    fn default() -> Self {
        Self {
            accelerator: ADC_MAX / 2,
            distance: ADC_MAX,
            security_level: false,
            charge_pressed: false,
            history_pressed: false,
            charge_timer: TimerSnapshot::default(),
        }
    }
}

impl Inputs {
    /// Default inputs with the given accelerator sample
    pub fn with_accelerator(accelerator: u16) -> Self {
        Self {
            accelerator,
            ..Self::default()
        }
    }
}

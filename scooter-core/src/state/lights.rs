//! Indicator levels as last commanded

use crate::config::Indicator;

use super::output::Outputs;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mirror of the indicator outputs
///
/// Every indicator change goes through here so the recorded level always
/// matches what was last commanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndicatorLevels {
    levels: [bool; 3],
}

impl IndicatorLevels {
    /// Last commanded level of `id`
    pub fn get(&self, id: Indicator) -> bool {
        self.levels[id.index()]
    }

    /// Command `id` to `on`
    pub fn set(&mut self, id: Indicator, on: bool, out: &mut Outputs) {
        self.levels[id.index()] = on;
        out.indicator(id, on);
    }

    /// Invert `id`
    pub fn toggle(&mut self, id: Indicator, out: &mut Outputs) {
        let on = !self.get(id);
        self.set(id, on, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_tracks_level() {
        let mut lights = IndicatorLevels::default();
        let mut out = Outputs::new();

        lights.toggle(Indicator::ChargeLight, &mut out);
        assert!(lights.get(Indicator::ChargeLight));
        lights.toggle(Indicator::ChargeLight, &mut out);
        assert!(!lights.get(Indicator::ChargeLight));

        assert_eq!(out.last_indicator(Indicator::ChargeLight), Some(false));
        assert!(!lights.get(Indicator::BrakeLight));
    }
}

//! Discrete indicator outputs

use crate::config::Indicator;

/// Errors that can occur driving an indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorError {
    /// The output pin could not be driven
    Pin,
}

/// Bank of on/off status outputs
pub trait IndicatorBank {
    /// Drive indicator `id`
    fn set_indicator(&mut self, id: Indicator, on: bool) -> Result<(), IndicatorError>;
}

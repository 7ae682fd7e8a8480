//! Events that move the charging state machine

/// Charging events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChargeEvent {
    /// Charge button pressed
    Press,
    /// Press count reached the timer-mode threshold during the default delay
    EnoughPresses,
    /// Default delay ran out
    DelayExpired,
    /// Charge timer latched completion
    TimerExpired,
}

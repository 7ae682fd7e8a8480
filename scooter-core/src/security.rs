//! Security toggle
//!
//! The security button flips whether obstacle braking is armed. It acts
//! on the rising edge of the debounced level only, so holding the button
//! toggles once.

use crate::config::NOTICE_MS;
use crate::state::Outputs;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Security feature state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SecurityState {
    /// Obstacle braking armed
    pub enabled: bool,
    pub last_button_level: bool,
}

impl Default for SecurityState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl SecurityState {
    /// Enabled, with the button level read at startup
    pub const fn new(button_level: bool) -> Self {
        Self {
            enabled: true,
            last_button_level: button_level,
        }
    }

    /// Whether `level` is a rising edge relative to the previous poll
    pub fn is_edge(&self, level: bool) -> bool {
        level && !self.last_button_level
    }

    /// Poll the button level
    ///
    /// On a rising edge, flips `enabled`, shows a confirmation and returns
    /// the new value.
    pub fn poll(&mut self, level: bool, out: &mut Outputs) -> Option<bool> {
        let edge = self.is_edge(level);
        self.last_button_level = level;

        if !edge {
            return None;
        }

        self.enabled = !self.enabled;
        out.notice(if self.enabled { "SEC ON" } else { "SEC OFF" }, NOTICE_MS);
        Some(self.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enabled() {
        assert!(SecurityState::default().enabled);
    }

    #[test]
    fn test_toggle_on_edge() {
        let mut security = SecurityState::default();
        let mut out = Outputs::new();

        assert_eq!(security.poll(true, &mut out), Some(false));
        assert!(out.rendered("SEC OFF"));

        security.poll(false, &mut Outputs::new());

        let mut out = Outputs::new();
        assert_eq!(security.poll(true, &mut out), Some(true));
        assert!(out.rendered("SEC ON"));
    }

    #[test]
    fn test_held_button_toggles_once() {
        let mut security = SecurityState::default();
        let mut toggles = 0;

        for _ in 0..50 {
            if security.poll(true, &mut Outputs::new()).is_some() {
                toggles += 1;
            }
        }

        assert_eq!(toggles, 1);
        assert!(!security.enabled);
    }

    #[test]
    fn test_held_at_boot_does_not_toggle() {
        let mut security = SecurityState::new(true);
        assert_eq!(security.poll(true, &mut Outputs::new()), None);
        assert!(security.enabled);
    }
}

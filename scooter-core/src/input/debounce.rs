//! Sample-counting debouncer
//!
//! A new level is accepted only after it has been sampled
//! [`DEBOUNCE_SAMPLES`] times in a row.

use crate::config::DEBOUNCE_SAMPLES;

/// Debouncer for one digital input
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    stable: bool,
    /// Consecutive samples disagreeing with `stable`
    pending: u8,
    threshold: u8,
}

impl Debouncer {
    /// Create a debouncer starting at `initial` with the default threshold
    pub const fn new(initial: bool) -> Self {
        Self::with_threshold(initial, DEBOUNCE_SAMPLES)
    }

    /// Create a debouncer with an explicit threshold (minimum 1)
    pub const fn with_threshold(initial: bool, threshold: u8) -> Self {
        Self {
            stable: initial,
            pending: 0,
            threshold: if threshold == 0 { 1 } else { threshold },
        }
    }

    /// Current accepted level
    pub fn level(&self) -> bool {
        self.stable
    }

    /// Feed one raw sample
    ///
    /// Returns `Some(level)` when the accepted level changes.
    pub fn update(&mut self, raw: bool) -> Option<bool> {
        if raw == self.stable {
            self.pending = 0;
            return None;
        }

        self.pending += 1;
        if self.pending >= self.threshold {
            self.stable = raw;
            self.pending = 0;
            Some(raw)
        } else {
            None
        }
    }
}

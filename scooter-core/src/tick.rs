//! Charge timer tick source
//!
//! A fixed-period hardware tick counts charge time once armed. The tick
//! handler is the only writer of the counter and the completion latch
//! while the timer runs; the main loop only arms it and reads snapshots.

use portable_atomic::{AtomicBool, AtomicU16, Ordering};

use crate::config::CHARGE_TIMER_TICKS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Point-in-time view of the charge timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimerSnapshot {
    /// Ticks counted since the timer was armed
    pub ticks: u16,
    /// Completion latch: `CHARGE_TIMER_TICKS` ticks have elapsed
    pub elapsed: bool,
}

/// Charge timer shared between the tick handler and the main loop
#[derive(Debug)]
pub struct ChargeTimer {
    ticks: AtomicU16,
    armed: AtomicBool,
    elapsed: AtomicBool,
    limit: u16,
}

impl Default for ChargeTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChargeTimer {
    /// Create a disarmed timer with the default length
    pub const fn new() -> Self {
        Self::with_limit(CHARGE_TIMER_TICKS)
    }

    /// Create a disarmed timer that completes after `limit` ticks
    pub const fn with_limit(limit: u16) -> Self {
        Self {
            ticks: AtomicU16::new(0),
            armed: AtomicBool::new(false),
            elapsed: AtomicBool::new(false),
            limit,
        }
    }

    /// Reset the counter and latch, then start counting (main loop side)
    pub fn arm(&self) {
        // Stop the tick handler from writing while we reset
        self.armed.store(false, Ordering::Release);
        self.ticks.store(0, Ordering::Relaxed);
        self.elapsed.store(false, Ordering::Relaxed);
        self.armed.store(true, Ordering::Release);
    }

    /// Whether the timer is counting
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Acquire)
    }

    /// Handle one hardware tick (tick handler side)
    ///
    /// Counts only while armed. On reaching the limit it latches
    /// completion and disarms itself.
    pub fn on_tick(&self) {
        if !self.armed.load(Ordering::Acquire) {
            return;
        }

        let ticks = self.ticks.load(Ordering::Relaxed).saturating_add(1);
        self.ticks.store(ticks, Ordering::Relaxed);

        if ticks >= self.limit {
            self.elapsed.store(true, Ordering::Release);
            self.armed.store(false, Ordering::Release);
        }
    }

    /// Read the counter and latch
    pub fn snapshot(&self) -> TimerSnapshot {
        let elapsed = self.elapsed.load(Ordering::Acquire);
        TimerSnapshot {
            ticks: self.ticks.load(Ordering::Relaxed),
            elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disarmed_ignores_ticks() {
        let timer = ChargeTimer::new();
        for _ in 0..100 {
            timer.on_tick();
        }
        assert_eq!(timer.snapshot(), TimerSnapshot::default());
    }

    #[test]
    fn test_latches_after_limit() {
        let timer = ChargeTimer::with_limit(3);
        timer.arm();

        timer.on_tick();
        timer.on_tick();
        assert_eq!(timer.snapshot(), TimerSnapshot { ticks: 2, elapsed: false });

        timer.on_tick();
        assert_eq!(timer.snapshot(), TimerSnapshot { ticks: 3, elapsed: true });
        assert!(!timer.is_armed());

        // Further ticks change nothing
        timer.on_tick();
        assert_eq!(timer.snapshot().ticks, 3);
    }

    #[test]
    fn test_arm_resets_latch() {
        let timer = ChargeTimer::with_limit(1);
        timer.arm();
        timer.on_tick();
        assert!(timer.snapshot().elapsed);

        timer.arm();
        assert_eq!(timer.snapshot(), TimerSnapshot::default());
        assert!(timer.is_armed());
    }

    #[test]
    fn test_default_length() {
        let timer = ChargeTimer::new();
        timer.arm();
        for _ in 0..CHARGE_TIMER_TICKS - 1 {
            timer.on_tick();
        }
        assert!(!timer.snapshot().elapsed);
        timer.on_tick();
        assert!(timer.snapshot().elapsed);
    }
}

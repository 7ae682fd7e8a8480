//! Charge session state and transitions
//!
//! ```text
//! Idle --Press--> DefaultDelay --EnoughPresses--> TimerActive --TimerExpired--> Done
//!                      |                                                        ^
//!                      +------------------- DelayExpired -----------------------+
//! ```
//!
//! `Done` is terminal: nothing leads back to `Idle`.

use crate::config::{
    Indicator, CHARGED_MESSAGE_MS, DEFAULT_DELAY_MS, FLICKER_MS, NOTICE_MS, TIMER_MODE_PRESSES,
};
use crate::state::lights::IndicatorLevels;
use crate::state::{Command, Outputs};
use crate::tick::TimerSnapshot;

use super::events::ChargeEvent;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Charge session mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChargeMode {
    /// No session yet
    #[default]
    Idle,
    /// Session started; counting presses against the default delay
    DefaultDelay,
    /// Tick-timed charge running
    TimerActive,
    /// Session complete (terminal)
    Done,
}

impl ChargeMode {
    /// Check if this mode pre-empts vehicle motion and obstacle braking
    pub fn blocks_motion(&self) -> bool {
        matches!(self, ChargeMode::DefaultDelay | ChargeMode::TimerActive)
    }

    /// Process an event and return the next mode
    pub fn transition(self, event: ChargeEvent) -> Self {
        use ChargeEvent::*;
        use ChargeMode::*;

        match (self, event) {
            (Idle, Press) => DefaultDelay,

            (DefaultDelay, EnoughPresses) => TimerActive,
            (DefaultDelay, DelayExpired) => Done,

            (TimerActive, TimerExpired) => Done,

            // Default: stay in current mode
            _ => self,
        }
    }
}

/// Charge session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChargeState {
    pub mode: ChargeMode,
    /// Time accumulated in `DefaultDelay` (ms)
    pub delay_elapsed: u16,
    /// Presses counted in `DefaultDelay`, including the one that started it
    pub press_count: u8,
    /// Ticks since the timer was armed; meaningful in `TimerActive`
    pub tick_count: u16,
    /// The timer was armed this step, so this step's snapshot predates it
    timer_snapshot_stale: bool,
}

impl ChargeState {
    /// Apply an event, returning the `(from, to)` pair if the mode changed
    fn apply(&mut self, event: ChargeEvent) -> Option<(ChargeMode, ChargeMode)> {
        let from = self.mode;
        let to = from.transition(event);
        if from == to {
            return None;
        }
        self.mode = to;
        Some((from, to))
    }

    /// Handle a consumed charge-button edge
    pub fn on_press(&mut self, out: &mut Outputs) -> Option<(ChargeMode, ChargeMode)> {
        match self.mode {
            ChargeMode::Idle => {
                let change = self.apply(ChargeEvent::Press);
                self.delay_elapsed = 0;
                self.press_count = 1;
                self.tick_count = 0;
                out.notice("CHARGING", NOTICE_MS);
                change
            }
            ChargeMode::DefaultDelay => {
                self.press_count = self.press_count.saturating_add(1);
                if self.press_count < TIMER_MODE_PRESSES {
                    return None;
                }

                let change = self.apply(ChargeEvent::EnoughPresses);
                self.tick_count = 0;
                self.timer_snapshot_stale = true;
                out.push(Command::ArmChargeTimer);
                out.notice("TIMER", NOTICE_MS);
                change
            }
            // Presses are ignored once the timer runs or the session is over
            ChargeMode::TimerActive | ChargeMode::Done => None,
        }
    }

    /// Run one charging iteration
    ///
    /// Only does work while the session blocks motion.
    pub fn run(
        &mut self,
        timer: TimerSnapshot,
        lights: &mut IndicatorLevels,
        out: &mut Outputs,
    ) -> Option<(ChargeMode, ChargeMode)> {
        match self.mode {
            ChargeMode::DefaultDelay => {
                flicker(lights, out);
                self.delay_elapsed = self.delay_elapsed.saturating_add(FLICKER_MS);

                if self.delay_elapsed >= DEFAULT_DELAY_MS {
                    let change = self.apply(ChargeEvent::DelayExpired);
                    complete(lights, out);
                    change
                } else {
                    None
                }
            }
            ChargeMode::TimerActive => {
                if core::mem::take(&mut self.timer_snapshot_stale) {
                    flicker(lights, out);
                    return None;
                }

                self.tick_count = timer.ticks;
                if timer.elapsed {
                    let change = self.apply(ChargeEvent::TimerExpired);
                    complete(lights, out);
                    change
                } else {
                    flicker(lights, out);
                    None
                }
            }
            ChargeMode::Idle | ChargeMode::Done => None,
        }
    }
}

/// Toggle the two charge indicators together, then wait one flicker period
fn flicker(lights: &mut IndicatorLevels, out: &mut Outputs) {
    lights.toggle(Indicator::ChargeLight, out);
    lights.toggle(Indicator::BrakeLight, out);
    out.delay(FLICKER_MS);
}

/// Completion signalling
fn complete(lights: &mut IndicatorLevels, out: &mut Outputs) {
    lights.set(Indicator::BrakeLight, false, out);
    lights.set(Indicator::ChargeLight, true, out);

    out.clear();
    out.render_str(1, 1, "CHARGED");
    out.delay(CHARGED_MESSAGE_MS);

    lights.set(Indicator::ChargeLight, false, out);
    out.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> (ChargeState, IndicatorLevels) {
        let mut charge = ChargeState::default();
        let mut out = Outputs::new();
        charge.on_press(&mut out);
        (charge, IndicatorLevels::default())
    }

    #[test]
    fn test_transition_table() {
        use ChargeEvent::*;
        use ChargeMode::*;

        assert_eq!(Idle.transition(Press), DefaultDelay);
        assert_eq!(Idle.transition(DelayExpired), Idle);
        assert_eq!(DefaultDelay.transition(Press), DefaultDelay);
        assert_eq!(DefaultDelay.transition(EnoughPresses), TimerActive);
        assert_eq!(DefaultDelay.transition(DelayExpired), Done);
        assert_eq!(TimerActive.transition(DelayExpired), TimerActive);
        assert_eq!(TimerActive.transition(TimerExpired), Done);
    }

    #[test]
    fn test_done_is_terminal() {
        for event in [
            ChargeEvent::Press,
            ChargeEvent::EnoughPresses,
            ChargeEvent::DelayExpired,
            ChargeEvent::TimerExpired,
        ] {
            assert_eq!(ChargeMode::Done.transition(event), ChargeMode::Done);
        }
    }

    #[test]
    fn test_blocks_motion() {
        assert!(!ChargeMode::Idle.blocks_motion());
        assert!(ChargeMode::DefaultDelay.blocks_motion());
        assert!(ChargeMode::TimerActive.blocks_motion());
        assert!(!ChargeMode::Done.blocks_motion());
    }

    #[test]
    fn test_first_press_starts_session() {
        let mut charge = ChargeState::default();
        let mut out = Outputs::new();

        let change = charge.on_press(&mut out);

        assert_eq!(change, Some((ChargeMode::Idle, ChargeMode::DefaultDelay)));
        assert_eq!(charge.press_count, 1);
        assert_eq!(charge.delay_elapsed, 0);
        assert!(out.rendered("CHARGING"));
    }

    #[test]
    fn test_fourth_press_arms_timer() {
        let (mut charge, _) = started();

        for _ in 0..2 {
            let mut out = Outputs::new();
            assert_eq!(charge.on_press(&mut out), None);
        }

        let mut out = Outputs::new();
        let change = charge.on_press(&mut out);
        assert_eq!(change, Some((ChargeMode::DefaultDelay, ChargeMode::TimerActive)));
        assert_eq!(charge.press_count, 4);
        assert!(out.commands().contains(&Command::ArmChargeTimer));
        assert!(out.rendered("TIMER"));
    }

    #[test]
    fn test_default_delay_expires() {
        let (mut charge, mut lights) = started();
        let iterations = DEFAULT_DELAY_MS / FLICKER_MS;

        for _ in 0..iterations - 1 {
            let mut out = Outputs::new();
            assert_eq!(charge.run(TimerSnapshot::default(), &mut lights, &mut out), None);
            assert_eq!(
                lights.get(Indicator::ChargeLight),
                lights.get(Indicator::BrakeLight)
            );
        }

        let mut out = Outputs::new();
        let change = charge.run(TimerSnapshot::default(), &mut lights, &mut out);
        assert_eq!(change, Some((ChargeMode::DefaultDelay, ChargeMode::Done)));
        assert!(out.rendered("CHARGED"));
        assert!(!lights.get(Indicator::ChargeLight));
        assert!(!lights.get(Indicator::BrakeLight));
    }

    #[test]
    fn test_timer_completion() {
        let (mut charge, mut lights) = started();
        for _ in 0..3 {
            charge.on_press(&mut Outputs::new());
        }
        assert_eq!(charge.mode, ChargeMode::TimerActive);

        // Same-step snapshot predates arming and is ignored
        let stale = TimerSnapshot { ticks: 99, elapsed: true };
        assert_eq!(charge.run(stale, &mut lights, &mut Outputs::new()), None);

        let running = TimerSnapshot { ticks: 12, elapsed: false };
        assert_eq!(charge.run(running, &mut lights, &mut Outputs::new()), None);
        assert_eq!(charge.tick_count, 12);

        let done = TimerSnapshot { ticks: 40, elapsed: true };
        let change = charge.run(done, &mut lights, &mut Outputs::new());
        assert_eq!(change, Some((ChargeMode::TimerActive, ChargeMode::Done)));
    }

    #[test]
    fn test_presses_ignored_after_done() {
        let mut charge = ChargeState {
            mode: ChargeMode::Done,
            ..Default::default()
        };
        let mut out = Outputs::new();
        assert_eq!(charge.on_press(&mut out), None);
        assert_eq!(charge.mode, ChargeMode::Done);
        assert!(out.commands().is_empty());
    }
}

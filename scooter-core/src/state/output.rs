//! Output commands produced by one controller step
//!
//! The core never touches hardware. Each step returns an ordered list of
//! commands which the runtime applies one after another; `Delay` is the
//! only point where the runtime suspends.

use core::fmt::{self, Write};

use heapless::{String, Vec};

use crate::charge::ChargeMode;
use crate::config::Indicator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum commands emitted by one step
pub const MAX_COMMANDS: usize = 32;

/// Display line width in characters
pub const TEXT_LEN: usize = 16;

/// One line of display text
pub type Text = String<TEXT_LEN>;

/// Build display text from format arguments, truncating at [`TEXT_LEN`]
pub fn text(args: fmt::Arguments<'_>) -> Text {
    let mut out = Truncating {
        text: Text::new(),
        full: false,
    };
    let _ = out.write_fmt(args);
    out.text
}

/// Writer that keeps every character that fits and drops the rest
struct Truncating {
    text: Text,
    full: bool,
}

impl Write for Truncating {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.full {
                break;
            }
            self.full = self.text.push(ch).is_err();
        }
        Ok(())
    }
}

/// Actuator, indicator, and display command
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Command {
    /// Motor drive intensity, 0-255
    SetDuty(u8),
    /// Direction lines; both low is neutral
    SetDirection { forward: bool, backward: bool },
    /// Discrete status output
    SetIndicator(Indicator, bool),
    /// Clear the whole display
    ClearDisplay,
    /// Draw text at a 1-based line and column
    Render { line: u8, col: u8, text: Text },
    /// Block for the given number of milliseconds
    Delay(u16),
    /// Reset and start the charge timer
    ArmChargeTimer,
}

/// Edge flags the step consumed; the caller clears exactly these
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Consumed {
    pub charge: bool,
    pub history: bool,
}

/// Notable transitions during a step, for logging by the runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepReport {
    pub brake_started: bool,
    /// Emergency stop finished and normal operation resumed
    pub brake_released: bool,
    /// Security was toggled to this value
    pub security_toggled: Option<bool>,
    /// Charge mode changed from/to
    pub charge_transition: Option<(ChargeMode, ChargeMode)>,
}

/// Everything one step produced
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Outputs {
    commands: Vec<Command, MAX_COMMANDS>,
    pub consumed: Consumed,
    pub report: StepReport,
}

impl Outputs {
    /// Create an empty output set
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands in application order
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Append a command
    pub fn push(&mut self, command: Command) {
        let pushed = self.commands.push(command).is_ok();
        debug_assert!(pushed, "command buffer overflow");
    }

    /// Set the motor duty
    pub fn duty(&mut self, duty: u8) {
        self.push(Command::SetDuty(duty));
    }

    /// Set the direction lines
    pub fn direction(&mut self, forward: bool, backward: bool) {
        self.push(Command::SetDirection { forward, backward });
    }

    /// Set an indicator
    pub fn indicator(&mut self, id: Indicator, on: bool) {
        self.push(Command::SetIndicator(id, on));
    }

    /// Clear the display
    pub fn clear(&mut self) {
        self.push(Command::ClearDisplay);
    }

    /// Draw text
    pub fn render(&mut self, line: u8, col: u8, text: Text) {
        self.push(Command::Render { line, col, text });
    }

    /// Draw a static string
    pub fn render_str(&mut self, line: u8, col: u8, s: &str) {
        self.render(line, col, text(format_args!("{}", s)));
    }

    /// Suspend for `ms` milliseconds
    pub fn delay(&mut self, ms: u16) {
        if ms > 0 {
            self.push(Command::Delay(ms));
        }
    }

    /// Show a message alone on the display for `ms`, then clear it
    pub fn notice(&mut self, message: &str, ms: u16) {
        self.clear();
        self.render_str(1, 1, message);
        self.delay(ms);
        self.clear();
    }

    /// Sum of all delays in this step (ms)
    pub fn total_delay_ms(&self) -> u32 {
        self.commands
            .iter()
            .map(|c| match c {
                Command::Delay(ms) => u32::from(*ms),
                _ => 0,
            })
            .sum()
    }

    /// Last duty written in this step, if any
    pub fn last_duty(&self) -> Option<u8> {
        self.commands.iter().rev().find_map(|c| match c {
            Command::SetDuty(d) => Some(*d),
            _ => None,
        })
    }

    /// Last level written to `id` in this step, if any
    pub fn last_indicator(&self, id: Indicator) -> Option<bool> {
        self.commands.iter().rev().find_map(|c| match c {
            Command::SetIndicator(i, on) if *i == id => Some(*on),
            _ => None,
        })
    }

    /// Whether any rendered text equals `s`
    pub fn rendered(&self, s: &str) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, Command::Render { text, .. } if text.as_str() == s))
    }
}

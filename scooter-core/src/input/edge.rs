//! Rising-edge detection on debounced button levels

use super::debounce::Debouncer;
use super::flag::{EdgeFlag, LevelCell};

/// Debounced rising-edge detector for one button
///
/// Buttons are active high: a press is a released-to-pressed transition of
/// the debounced level. Holding the button produces no further edges.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeDetector {
    debouncer: Debouncer,
}

impl EdgeDetector {
    /// Create a detector whose debounced level starts at `initial`
    ///
    /// Passing the level read at startup keeps a button held during boot
    /// from registering as a press.
    pub const fn new(initial: bool) -> Self {
        Self {
            debouncer: Debouncer::new(initial),
        }
    }

    /// Current debounced level
    pub fn level(&self) -> bool {
        self.debouncer.level()
    }

    /// Feed one raw sample; returns true on a debounced rising edge
    pub fn sample(&mut self, raw: bool) -> bool {
        matches!(self.debouncer.update(raw), Some(true))
    }
}

/// Interrupt-side state for the three buttons
///
/// Charge and history buttons raise sticky [`EdgeFlag`]s; the security
/// button publishes its debounced level, and the main loop derives the
/// toggle from that level's rising edge.
#[derive(Debug, Clone)]
pub struct ButtonEdges {
    charge: EdgeDetector,
    history: EdgeDetector,
    security: EdgeDetector,
}

impl ButtonEdges {
    /// Create detectors from the levels read at startup
    pub const fn new(charge: bool, history: bool, security: bool) -> Self {
        Self {
            charge: EdgeDetector::new(charge),
            history: EdgeDetector::new(history),
            security: EdgeDetector::new(security),
        }
    }

    /// Feed one sample of each button
    ///
    /// Only touches the shared cells; no other side effects.
    pub fn sample(
        &mut self,
        charge: bool,
        history: bool,
        security: bool,
        flags: &ButtonCells,
    ) {
        if self.charge.sample(charge) {
            flags.charge.raise();
        }
        if self.history.sample(history) {
            flags.history.raise();
        }
        self.security.sample(security);
        flags.security.set(self.security.level());
    }
}

/// Cells shared between the input producer and the main loop
#[derive(Debug)]
pub struct ButtonCells {
    pub charge: EdgeFlag,
    pub history: EdgeFlag,
    /// Debounced security button level
    pub security: LevelCell,
}

impl Default for ButtonCells {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonCells {
    /// Create cleared cells
    pub const fn new() -> Self {
        Self {
            charge: EdgeFlag::new(),
            history: EdgeFlag::new(),
            security: LevelCell::new(false),
        }
    }
}

//! Single-producer/single-consumer cells shared with interrupt context

use portable_atomic::{AtomicBool, Ordering};

/// Sticky one-shot edge flag
///
/// Raised by the interrupt context, cleared by the one consumer in the
/// main loop. Several raises between two takes collapse into one event.
#[derive(Debug)]
pub struct EdgeFlag {
    raised: AtomicBool,
}

impl Default for EdgeFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeFlag {
    /// Create a cleared flag
    pub const fn new() -> Self {
        Self {
            raised: AtomicBool::new(false),
        }
    }

    /// Record an edge (producer side)
    pub fn raise(&self) {
        self.raised.store(true, Ordering::Release);
    }

    /// Check for a pending edge without consuming it
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }

    /// Consume the pending edge, if any (consumer side)
    pub fn take(&self) -> bool {
        self.raised.swap(false, Ordering::AcqRel)
    }
}

/// Debounced level published by interrupt context
#[derive(Debug)]
pub struct LevelCell {
    level: AtomicBool,
}

impl Default for LevelCell {
    fn default() -> Self {
        Self::new(false)
    }
}

impl LevelCell {
    /// Create a cell holding `level`
    pub const fn new(level: bool) -> Self {
        Self {
            level: AtomicBool::new(level),
        }
    }

    /// Publish a new level (producer side)
    pub fn set(&self, level: bool) {
        self.level.store(level, Ordering::Release);
    }

    /// Read the latest level
    pub fn get(&self) -> bool {
        self.level.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_clears() {
        let flag = EdgeFlag::new();
        assert!(!flag.take());
        flag.raise();
        assert!(flag.is_raised());
        assert!(flag.take());
        assert!(!flag.is_raised());
        assert!(!flag.take());
    }

    #[test]
    fn test_raises_collapse() {
        let flag = EdgeFlag::new();
        flag.raise();
        flag.raise();
        flag.raise();
        assert!(flag.take());
        assert!(!flag.take());
    }

    #[test]
    fn test_level_cell() {
        let cell = LevelCell::new(false);
        cell.set(true);
        assert!(cell.get());
        cell.set(false);
        assert!(!cell.get());
    }
}

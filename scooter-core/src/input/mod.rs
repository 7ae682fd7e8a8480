//! Button input handling
//!
//! The producer side (debouncing and edge detection) runs in interrupt
//! context; the consumer side (flag clearing) runs in the main loop.
//! The two sides share only single-writer atomic cells.

pub mod debounce;
pub mod edge;
pub mod flag;

pub use debounce::Debouncer;
pub use edge::{ButtonCells, ButtonEdges, EdgeDetector};
pub use flag::{EdgeFlag, LevelCell};

//! Compiled-in configuration
//!
//! The controller has no runtime configuration; every tunable is a
//! constant here, grouped by the component that uses it.

pub mod hardware;
pub mod tuning;

pub use hardware::*;
pub use tuning::*;

//! Charging state machine
//!
//! A charge session is started by the charge button and resolves into one
//! of two completions: the default delay runs out, or enough presses
//! arrive during the delay to switch to the longer tick-timed charge.

pub mod events;
pub mod session;

pub use events::ChargeEvent;
pub use session::{ChargeMode, ChargeState};

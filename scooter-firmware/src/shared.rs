//! State shared between tasks
//!
//! Both cells are lock-free: the input and tick tasks only write, the
//! control task reads and clears.

use scooter_core::input::ButtonCells;
use scooter_core::tick::ChargeTimer;

/// Debounced button edges and the security level
pub static BUTTONS: ButtonCells = ButtonCells::new();

/// Charge timer advanced by the tick task
pub static CHARGE_TIMER: ChargeTimer = ChargeTimer::new();

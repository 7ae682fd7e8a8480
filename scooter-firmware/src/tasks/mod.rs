//! Embassy async tasks
//!
//! Tasks share state only through the lock-free cells in `shared`.

pub mod control;
pub mod input;
pub mod tick;

pub use control::control_task;
pub use input::input_task;
pub use tick::tick_task;

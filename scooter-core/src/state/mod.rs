//! Machine state and the control step
//!
//! All controller behavior is a function of the machine state and one
//! sample of the inputs. The step returns the commands to apply; it never
//! performs I/O itself.

pub mod inputs;
pub mod lights;
pub mod machine;
pub mod output;

pub use inputs::Inputs;
pub use lights::IndicatorLevels;
pub use machine::{step, Controller, MachineState};
pub use output::{Command, Consumed, Outputs, StepReport, Text, MAX_COMMANDS};

//! Applying commands to a board

use crate::state::Command;

use super::display::{DisplayError, DisplaySink};
use super::indicator::{IndicatorBank, IndicatorError};
use super::motor::{MotorError, MotorOutput};

/// Failure applying one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    Motor(MotorError),
    Display(DisplayError),
    Indicator(IndicatorError),
}

impl From<MotorError> for OutputError {
    fn from(e: MotorError) -> Self {
        OutputError::Motor(e)
    }
}

impl From<DisplayError> for OutputError {
    fn from(e: DisplayError) -> Self {
        OutputError::Display(e)
    }
}

impl From<IndicatorError> for OutputError {
    fn from(e: IndicatorError) -> Self {
        OutputError::Indicator(e)
    }
}

/// What the runtime still has to do after [`Board::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Applied {
    /// Command fully handled
    Done,
    /// Suspend for this many milliseconds
    Delay(u16),
    /// Reset and start the charge timer
    ArmChargeTimer,
}

/// Everything the controller drives
pub trait Board {
    type Motor: MotorOutput;
    type Display: DisplaySink;
    type Indicators: IndicatorBank;

    fn motor(&mut self) -> &mut Self::Motor;
    fn display(&mut self) -> &mut Self::Display;
    fn indicators(&mut self) -> &mut Self::Indicators;

    /// Apply one output command
    ///
    /// Delays and timer arming are handed back to the caller, which owns
    /// time and the shared timer.
    fn apply(&mut self, command: &Command) -> Result<Applied, OutputError> {
        match command {
            Command::SetDuty(duty) => self.motor().set_duty(*duty)?,
            Command::SetDirection { forward, backward } => {
                self.motor().set_direction(*forward, *backward)?
            }
            Command::SetIndicator(id, on) => self.indicators().set_indicator(*id, *on)?,
            Command::ClearDisplay => self.display().clear()?,
            Command::Render { line, col, text } => self.display().render(*line, *col, text)?,
            Command::Delay(ms) => return Ok(Applied::Delay(*ms)),
            Command::ArmChargeTimer => return Ok(Applied::ArmChargeTimer),
        }
        Ok(Applied::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Indicator;
    use crate::state::Outputs;

    #[derive(Default)]
    struct FakeMotor {
        duty: u8,
        lines: (bool, bool),
    }

    impl MotorOutput for FakeMotor {
        fn set_duty(&mut self, duty: u8) -> Result<(), MotorError> {
            self.duty = duty;
            Ok(())
        }

        fn set_direction(&mut self, forward: bool, backward: bool) -> Result<(), MotorError> {
            self.lines = (forward, backward);
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeDisplay {
        clears: u8,
        last: heapless::String<16>,
    }

    impl DisplaySink for FakeDisplay {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.clears += 1;
            Ok(())
        }

        fn render(&mut self, line: u8, _col: u8, text: &str) -> Result<(), DisplayError> {
            if line > 2 {
                return Err(DisplayError::OutOfRange);
            }
            self.last.clear();
            let _ = self.last.push_str(text);
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeLights([bool; 3]);

    impl IndicatorBank for FakeLights {
        fn set_indicator(&mut self, id: Indicator, on: bool) -> Result<(), IndicatorError> {
            self.0[id.index()] = on;
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeBoard {
        motor: FakeMotor,
        display: FakeDisplay,
        lights: FakeLights,
    }

    impl Board for FakeBoard {
        type Motor = FakeMotor;
        type Display = FakeDisplay;
        type Indicators = FakeLights;

        fn motor(&mut self) -> &mut FakeMotor {
            &mut self.motor
        }

        fn display(&mut self) -> &mut FakeDisplay {
            &mut self.display
        }

        fn indicators(&mut self) -> &mut FakeLights {
            &mut self.lights
        }
    }

    #[test]
    fn test_apply_commands() {
        let mut board = FakeBoard::default();
        let mut out = Outputs::new();
        out.direction(true, false);
        out.duty(128);
        out.indicator(Indicator::Auxiliary, true);
        out.notice("SEC ON", 100);
        out.push(Command::ArmChargeTimer);

        let mut delays = 0;
        let mut armed = false;
        for command in out.commands() {
            match board.apply(command).unwrap() {
                Applied::Done => {}
                Applied::Delay(ms) => delays += u32::from(ms),
                Applied::ArmChargeTimer => armed = true,
            }
        }

        assert_eq!(board.motor.duty, 128);
        assert_eq!(board.motor.lines, (true, false));
        assert!(board.lights.0[Indicator::Auxiliary.index()]);
        assert_eq!(board.display.clears, 2);
        assert_eq!(board.display.last.as_str(), "SEC ON");
        assert_eq!(delays, 100);
        assert!(armed);
    }

    #[test]
    fn test_apply_maps_errors() {
        let mut board = FakeBoard::default();
        let mut out = Outputs::new();
        out.render_str(3, 1, "X");

        assert_eq!(
            board.apply(&out.commands()[0]),
            Err(OutputError::Display(DisplayError::OutOfRange))
        );
    }
}

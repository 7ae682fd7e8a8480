//! Motor driver trait

/// Errors that can occur driving the motor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// PWM peripheral rejected the duty cycle
    Pwm,
    /// A direction line could not be driven
    DirectionPin,
    /// Both direction lines requested high (would short the bridge)
    InvalidDirection,
}

/// Open-loop DC motor driver: PWM duty plus two direction lines
pub trait MotorOutput {
    /// Set drive intensity (0 = off, 255 = full)
    fn set_duty(&mut self, duty: u8) -> Result<(), MotorError>;

    /// Set the direction lines; both low is neutral
    fn set_direction(&mut self, forward: bool, backward: bool) -> Result<(), MotorError>;

    /// Zero duty and neutral direction
    fn stop(&mut self) -> Result<(), MotorError> {
        self.set_duty(0)?;
        self.set_direction(false, false)
    }
}

//! H-bridge DC motor driver
//!
//! One PWM channel sets drive intensity; two lines select the bridge
//! diagonal. Both lines low lets the motor coast.
//!
//! ```ignore
//! let mut motor = HBridge::new(pwm, forward_pin, backward_pin);
//! motor.set_direction(true, false)?;
//! motor.set_duty(128)?;
//! ```

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use scooter_core::config::DUTY_MAX;
use scooter_core::traits::{MotorError, MotorOutput};

/// H-bridge motor driver
pub struct HBridge<P, F, B> {
    pwm: P,
    forward: F,
    backward: B,
}

impl<P, F, B> HBridge<P, F, B>
where
    P: SetDutyCycle,
    F: OutputPin,
    B: OutputPin,
{
    /// Wrap the PWM channel and direction pins
    ///
    /// The caller should [`stop`](MotorOutput::stop) the bridge before
    /// first use; the pins are not touched here.
    pub fn new(pwm: P, forward: F, backward: B) -> Self {
        Self {
            pwm,
            forward,
            backward,
        }
    }

    fn drive(pin: &mut impl OutputPin, high: bool) -> Result<(), MotorError> {
        let result = if high { pin.set_high() } else { pin.set_low() };
        result.map_err(|_| MotorError::DirectionPin)
    }
}

impl<P, F, B> MotorOutput for HBridge<P, F, B>
where
    P: SetDutyCycle,
    F: OutputPin,
    B: OutputPin,
{
    fn set_duty(&mut self, duty: u8) -> Result<(), MotorError> {
        self.pwm
            .set_duty_cycle_fraction(u16::from(duty), u16::from(DUTY_MAX))
            .map_err(|_| MotorError::Pwm)
    }

    fn set_direction(&mut self, forward: bool, backward: bool) -> Result<(), MotorError> {
        if forward && backward {
            return Err(MotorError::InvalidDirection);
        }

        // Break before make: drop the line being released first
        if !forward {
            Self::drive(&mut self.forward, false)?;
        }
        if !backward {
            Self::drive(&mut self.backward, false)?;
        }
        if forward {
            Self::drive(&mut self.forward, true)?;
        }
        if backward {
            Self::drive(&mut self.backward, true)?;
        }

        Ok(())
    }
}

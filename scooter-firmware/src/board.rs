//! Board wiring
//!
//! Concrete peripheral types for the RP2040 board and the glue that
//! exposes them through the core traits.

use defmt::*;
use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::{Input, Output};
use embassy_rp::pwm::Pwm;
use embassy_time::Delay;

use scooter_core::config::{AnalogChannel, ADC_MAX};
use scooter_core::traits::{AnalogInput, Board};
use scooter_drivers::{GpioIndicators, HBridge, Hd44780};

pub type Motor = HBridge<Pwm<'static>, Output<'static>, Output<'static>>;
pub type Lcd = Hd44780<Output<'static>, Delay>;
pub type Lights = GpioIndicators<Output<'static>>;

/// Everything the control task drives
pub struct ScooterBoard {
    pub motor: Motor,
    pub display: Lcd,
    pub indicators: Lights,
}

impl Board for ScooterBoard {
    type Motor = Motor;
    type Display = Lcd;
    type Indicators = Lights;

    fn motor(&mut self) -> &mut Motor {
        &mut self.motor
    }

    fn display(&mut self) -> &mut Lcd {
        &mut self.display
    }

    fn indicators(&mut self) -> &mut Lights {
        &mut self.indicators
    }
}

/// Push buttons, read by the input task
pub struct Buttons {
    pub charge: Input<'static>,
    pub history: Input<'static>,
    pub security: Input<'static>,
}

impl Buttons {
    /// Raw `(charge, history, security)` levels
    pub fn levels(&self) -> (bool, bool, bool) {
        (
            self.charge.is_high(),
            self.history.is_high(),
            self.security.is_high(),
        )
    }
}

/// Accelerator and distance sensor on the RP2040 ADC
pub struct Sensors {
    adc: Adc<'static, Blocking>,
    accelerator: Channel<'static>,
    distance: Channel<'static>,
}

impl Sensors {
    pub fn new(
        adc: Adc<'static, Blocking>,
        accelerator: Channel<'static>,
        distance: Channel<'static>,
    ) -> Self {
        Self {
            adc,
            accelerator,
            distance,
        }
    }
}

impl AnalogInput for Sensors {
    /// 12-bit conversion scaled down to 10 bits
    ///
    /// A failed conversion reads as accelerator at rest, or as an
    /// obstacle right in front for the distance sensor.
    fn read_analog(&mut self, channel: AnalogChannel) -> u16 {
        let (pin, fallback) = match channel {
            AnalogChannel::Accelerator => (&mut self.accelerator, ADC_MAX / 2),
            AnalogChannel::Distance => (&mut self.distance, 0),
        };

        match self.adc.blocking_read(pin) {
            Ok(raw) => raw >> 2,
            Err(e) => {
                warn!("ADC read failed on {}: {}", channel, e);
                fallback
            }
        }
    }
}

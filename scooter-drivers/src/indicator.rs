//! GPIO status lights

use embedded_hal::digital::OutputPin;

use scooter_core::config::Indicator;
use scooter_core::traits::{IndicatorBank, IndicatorError};

/// One output pin per [`Indicator`], in [`Indicator::ALL`] order
pub struct GpioIndicators<P> {
    pins: [P; Indicator::ALL.len()],
}

impl<P: OutputPin> GpioIndicators<P> {
    /// `pins` is `[brake light, auxiliary, charge light]`
    pub fn new(pins: [P; Indicator::ALL.len()]) -> Self {
        Self { pins }
    }
}

impl<P: OutputPin> IndicatorBank for GpioIndicators<P> {
    fn set_indicator(&mut self, id: Indicator, on: bool) -> Result<(), IndicatorError> {
        let pin = &mut self.pins[id.index()];
        let result = if on { pin.set_high() } else { pin.set_low() };
        result.map_err(|_| IndicatorError::Pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{ErrorKind, ErrorType};

    #[derive(Default)]
    struct FakePin {
        high: bool,
        broken: bool,
    }

    #[derive(Debug)]
    struct PinFault;

    impl embedded_hal::digital::Error for PinFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    impl ErrorType for FakePin {
        type Error = PinFault;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), PinFault> {
            if self.broken {
                return Err(PinFault);
            }
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), PinFault> {
            if self.broken {
                return Err(PinFault);
            }
            self.high = true;
            Ok(())
        }
    }

    #[test]
    fn test_indicator_maps_to_pin() {
        let mut bank: GpioIndicators<FakePin> = GpioIndicators::new(Default::default());

        bank.set_indicator(Indicator::ChargeLight, true).unwrap();
        assert!(!bank.pins[0].high);
        assert!(!bank.pins[1].high);
        assert!(bank.pins[2].high);

        bank.set_indicator(Indicator::BrakeLight, true).unwrap();
        assert!(bank.pins[0].high);

        for id in Indicator::ALL {
            bank.set_indicator(id, false).unwrap();
        }
        assert!(bank.pins.iter().all(|p| !p.high));
    }

    #[test]
    fn test_pin_fault_reported() {
        let mut bank = GpioIndicators::new([
            FakePin::default(),
            FakePin { high: false, broken: true },
            FakePin::default(),
        ]);

        assert_eq!(
            bank.set_indicator(Indicator::Auxiliary, true),
            Err(IndicatorError::Pin)
        );
        assert!(bank.set_indicator(Indicator::BrakeLight, true).is_ok());
    }
}

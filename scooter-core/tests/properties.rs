//! Property tests for the control rules

use proptest::prelude::*;

use scooter_core::config::{ADC_MAX, DEBOUNCE_SAMPLES};
use scooter_core::input::{EdgeDetector, EdgeFlag};
use scooter_core::speed::{approach, demand, speed_percent, Direction, VehicleState};
use scooter_core::{Inputs, MachineState, Outputs};

proptest! {
    /// One step never leaves [0, 100] and never overshoots the target
    #[test]
    fn step_rule_stays_in_range(current in 0u8..=100, target in prop_oneof![Just(0u8), Just(100u8), 0u8..=100]) {
        let next = approach(current, target);

        prop_assert!(next <= 100);
        if current < target {
            prop_assert!(next > current && next <= target);
        } else if current > target {
            prop_assert!(next < current && next >= target);
        } else {
            prop_assert_eq!(next, current);
        }
    }

    /// The deadzone always means neutral and zero target
    #[test]
    fn deadzone_is_neutral(percent in 48u8..=52, prior in prop_oneof![
        Just(Direction::Forward),
        Just(Direction::Backward),
        Just(Direction::Neutral),
    ]) {
        let d = demand(percent);
        prop_assert_eq!(d.direction, Direction::Neutral);
        prop_assert_eq!(d.target, 0);

        // Independent of what the vehicle was doing before
        let mut vehicle = VehicleState { current_speed: 60, target_direction: prior, braking: false };
        let sample = (u32::from(percent) * u32::from(ADC_MAX)).div_ceil(100) as u16;
        prop_assume!(speed_percent(sample) == percent);
        vehicle.update_speed(sample, &mut Outputs::new());
        prop_assert_eq!(vehicle.target_direction, Direction::Neutral);
    }

    /// Out-of-range samples are clamped, never a panic
    #[test]
    fn samples_are_clamped(accelerator in any::<u16>(), distance in any::<u16>()) {
        prop_assert!(speed_percent(accelerator) <= 100);

        let mut state = MachineState::default();
        for _ in 0..10 {
            let out = state.step(&Inputs { accelerator, distance, ..Inputs::default() });
            prop_assert!(state.vehicle.current_speed <= 100);
            prop_assert!(!out.commands().is_empty());
        }
    }

    /// An unchanged level yields at most one event between consumptions
    #[test]
    fn edge_detector_idempotent(level in any::<bool>(), repeats in 1usize..200) {
        let mut detector = EdgeDetector::new(false);
        let flag = EdgeFlag::new();
        let mut events = 0;

        for _ in 0..repeats {
            if detector.sample(level) {
                flag.raise();
            }
        }
        if flag.take() {
            events += 1;
        }
        prop_assert!(!flag.take());

        let expected = usize::from(level && repeats >= usize::from(DEBOUNCE_SAMPLES));
        prop_assert_eq!(events, expected);
    }
}

//! Kick-scooter controller firmware
//!
//! Main firmware binary for RP2040-based scooter boards. Three tasks:
//!
//! - `input_task` samples the push buttons and raises debounced edges
//! - `tick_task` drives the charge timer
//! - `control_task` runs the controller step loop and applies its commands

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use scooter_core::input::ButtonEdges;
use scooter_core::traits::MotorOutput;
use scooter_drivers::{GpioIndicators, HBridge, Hd44780};

use crate::board::{Buttons, ScooterBoard, Sensors};
use crate::shared::BUTTONS;

mod board;
mod shared;
mod tasks;

/// PWM counter top: 125 MHz / (4999 + 1) = 25 kHz, above audible range
const PWM_TOP: u16 = 4_999;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Scooter firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Motor: PWM on GPIO16 (slice 0 A), direction lines on GPIO14/15
    let mut pwm_config = PwmConfig::default();
    pwm_config.top = PWM_TOP;
    pwm_config.compare_a = 0;
    let mut motor = HBridge::new(
        Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, pwm_config),
        Output::new(p.PIN_14, Level::Low),
        Output::new(p.PIN_15, Level::Low),
    );
    if let Err(e) = motor.stop() {
        warn!("Motor stop failed: {}", e);
    }

    // LCD: RS=GPIO2, EN=GPIO3, D4-D7=GPIO4-7
    let mut display = Hd44780::new(
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        [
            Output::new(p.PIN_4, Level::Low),
            Output::new(p.PIN_5, Level::Low),
            Output::new(p.PIN_6, Level::Low),
            Output::new(p.PIN_7, Level::Low),
        ],
        Delay,
    );
    if let Err(e) = display.init() {
        warn!("LCD init failed: {}", e);
    }

    // Indicators: brake light GPIO10, auxiliary GPIO11, charge light GPIO12
    let indicators = GpioIndicators::new([
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
    ]);

    info!("Outputs initialized");

    // Analog: accelerator on ADC0 (GPIO26), distance sensor on ADC1 (GPIO27)
    let sensors = Sensors::new(
        Adc::new_blocking(p.ADC, AdcConfig::default()),
        Channel::new_pin(p.PIN_26, Pull::None),
        Channel::new_pin(p.PIN_27, Pull::None),
    );

    // Buttons: active high with pull-downs on GPIO18-20
    let buttons = Buttons {
        charge: Input::new(p.PIN_18, Pull::Down),
        history: Input::new(p.PIN_19, Pull::Down),
        security: Input::new(p.PIN_20, Pull::Down),
    };
    let (charge, history, security) = buttons.levels();
    BUTTONS.security.set(security);
    let edges = ButtonEdges::new(charge, history, security);

    info!("Inputs initialized, security button {}", security);

    let board = ScooterBoard {
        motor,
        display,
        indicators,
    };

    // Spawn tasks
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::input_task(buttons, edges)).unwrap();
    spawner
        .spawn(tasks::control_task(board, sensors, security))
        .unwrap();

    info!("All tasks spawned, firmware running");
}

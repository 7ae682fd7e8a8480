//! Control constants

/// Full-scale analog sample
pub const ADC_MAX: u16 = 1023;

// Speed controller

/// Speed percentages strictly below this mean "backward"
pub const DEADZONE_LOW: u8 = 48;
/// Speed percentages strictly above this mean "forward"
pub const DEADZONE_HIGH: u8 = 52;
/// Target speed outside the deadzone (percent)
pub const FULL_SPEED: u8 = 100;
/// Actuator duty at 100% speed
pub const DUTY_MAX: u8 = 255;

// Main loop

/// Nominal main-loop period (ms)
pub const LOOP_PERIOD_MS: u16 = 50;
/// Distance is sampled once every this many loop iterations
pub const DISTANCE_CHECK_EVERY: u8 = 5;

// Emergency stop

/// Distance samples below this value are an obstacle
pub const OBSTACLE_THRESHOLD: u16 = 300;
/// Speed removed per braking step (percentage points)
pub const BRAKE_STEP: u8 = 20;
/// Alert display time before braking starts (ms)
pub const BRAKE_ALERT_MS: u16 = 50;
/// Time between braking steps (ms)
pub const BRAKE_STEP_MS: u16 = 30;
/// Obstacle re-check interval once stopped (ms)
pub const OBSTACLE_POLL_MS: u16 = 100;

// Charging

/// Default charge delay; reaching it without enough presses completes the charge
pub const DEFAULT_DELAY_MS: u16 = 800;
/// One flicker half-period (ms)
pub const FLICKER_MS: u16 = 50;
/// Presses within the default delay that switch to timer mode
pub const TIMER_MODE_PRESSES: u8 = 4;
/// Charge timer length in ticks
pub const CHARGE_TIMER_TICKS: u16 = 40;
/// Tick source period (ms)
pub const TICK_PERIOD_MS: u16 = 64;
/// How long "charge complete" stays shown (ms)
pub const CHARGED_MESSAGE_MS: u16 = 150;

// Messages

/// Transient confirmation message time (ms)
pub const NOTICE_MS: u16 = 100;
/// Boot splash: charge light on-time (ms)
pub const BOOT_SPLASH_MS: u16 = 50;
/// Boot splash: settle time after the light goes off (ms)
pub const BOOT_SETTLE_MS: u16 = 30;

// Inputs

/// Consecutive equal samples needed before a button level is accepted
pub const DEBOUNCE_SAMPLES: u8 = 4;
/// Button sampling period in the input task (ms)
pub const INPUT_SAMPLE_MS: u16 = 5;

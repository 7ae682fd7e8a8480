//! Non-linear step schedule
//!
//! The per-iteration speed change depends on the *current* speed: large
//! near the extremes, one point at a time around mid-range so that a
//! direction reversal passes through the middle gently.

/// Per-iteration step for the given current speed (percent)
///
/// | current | step |
/// |---------|------|
/// | 50      | 10   |
/// | > 90    | 5    |
/// | 71..=90 | 3    |
/// | 51..=70 | 1    |
/// | 31..=49 | 1    |
/// | 11..=30 | 3    |
/// | 0..=10  | 5    |
pub fn step_size(current: u8) -> u8 {
    match current {
        50 => 10,
        91..=u8::MAX => 5,
        71..=90 => 3,
        31..=70 => 1,
        11..=30 => 3,
        _ => 5,
    }
}

/// Apply one step toward `target`, snapping onto it when within one step
pub fn approach(current: u8, target: u8) -> u8 {
    let step = step_size(current);

    if current < target {
        if target - current >= step {
            current + step
        } else {
            target
        }
    } else if current > target {
        if current - target >= step {
            current - step
        } else {
            target
        }
    } else {
        current
    }
}

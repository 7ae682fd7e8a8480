//! Analog input trait

use crate::config::AnalogChannel;

/// Analog sampler
///
/// Implementations return a 10-bit sample (0-1023), rescaling from the
/// converter's native resolution if needed. Sampling has no error path:
/// a failed conversion should be reported as a safe value by the
/// implementation (see its documentation).
pub trait AnalogInput {
    /// Take one sample from `channel`
    fn read_analog(&mut self, channel: AnalogChannel) -> u16;
}

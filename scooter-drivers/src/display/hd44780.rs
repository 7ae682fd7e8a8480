//! HD44780 character LCD, 4-bit parallel interface
//!
//! Write-only wiring: RS, EN and D4-D7; R/W is tied low, so the busy
//! flag is never read and every command is followed by a fixed delay.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use scooter_core::traits::{DisplayError, DisplaySink};

/// Visible columns per line
pub const COLUMNS: u8 = 16;
/// Visible lines
pub const LINES: u8 = 2;

const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_INCREMENT: u8 = 0x06;
const CMD_DISPLAY_ON: u8 = 0x0C;
const CMD_FUNCTION_4BIT_2LINE: u8 = 0x28;
const CMD_SET_DDRAM: u8 = 0x80;

/// DDRAM address of the first column of each line
const LINE_ADDRESS: [u8; LINES as usize] = [0x00, 0x40];

/// HD44780 driver over GPIO pins
///
/// All six pins share one type, which is what HALs with a type-erased
/// output (`Output<'d>`) hand out.
pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    data: [P; 4],
    delay: D,
}

impl<P: OutputPin, D: DelayNs> Hd44780<P, D> {
    /// Wrap the pins; `data` is `[D4, D5, D6, D7]`
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self { rs, en, data, delay }
    }

    /// Power-on initialization into 4-bit, two-line mode
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.delay.delay_ms(20);
        pin(&mut self.rs, false)?;

        // Reset sequence: three 8-bit function sets, then switch to 4-bit
        self.write_nibble(0x3)?;
        self.delay.delay_ms(5);
        self.write_nibble(0x3)?;
        self.delay.delay_us(150);
        self.write_nibble(0x3)?;
        self.delay.delay_us(150);
        self.write_nibble(0x2)?;

        self.command(CMD_FUNCTION_4BIT_2LINE)?;
        self.command(CMD_DISPLAY_ON)?;
        self.command(CMD_ENTRY_INCREMENT)?;
        self.clear()
    }

    fn command(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.send(byte, false)
    }

    fn send(&mut self, byte: u8, is_data: bool) -> Result<(), DisplayError> {
        pin(&mut self.rs, is_data)?;
        self.write_nibble(byte >> 4)?;
        self.write_nibble(byte & 0x0F)
    }

    fn write_nibble(&mut self, nibble: u8) -> Result<(), DisplayError> {
        for (bit, data_pin) in self.data.iter_mut().enumerate() {
            pin(data_pin, nibble & (1 << bit) != 0)?;
        }
        pin(&mut self.en, true)?;
        self.delay.delay_us(1);
        pin(&mut self.en, false)?;
        self.delay.delay_us(50);
        Ok(())
    }
}

fn pin(pin: &mut impl OutputPin, high: bool) -> Result<(), DisplayError> {
    pin.set_state(PinState::from(high))
        .map_err(|_| DisplayError::Bus)
}

/// DDRAM address for a 1-based position
fn address(line: u8, col: u8) -> Result<u8, DisplayError> {
    if !(1..=LINES).contains(&line) || !(1..=COLUMNS).contains(&col) {
        return Err(DisplayError::OutOfRange);
    }
    Ok(LINE_ADDRESS[usize::from(line - 1)] + (col - 1))
}

impl<P: OutputPin, D: DelayNs> DisplaySink for Hd44780<P, D> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(CMD_CLEAR)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    fn render(&mut self, line: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        let addr = address(line, col)?;
        self.command(CMD_SET_DDRAM | addr)?;

        let room = usize::from(COLUMNS - col + 1);
        for ch in text.chars().take(room) {
            let byte = if ch.is_ascii() { ch as u8 } else { b'?' };
            self.send(byte, true)?;
        }
        Ok(())
    }
}

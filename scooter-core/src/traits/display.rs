//! Character display trait

/// Errors that can occur writing to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus or pin error while talking to the controller
    Bus,
    /// Line or column outside the display
    OutOfRange,
}

/// Text display sink
pub trait DisplaySink {
    /// Clear the entire screen
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text at a position
    ///
    /// - `line`: 1-based line number
    /// - `col`: 1-based column number
    /// - `text`: ASCII text; characters past the line end are dropped
    fn render(&mut self, line: u8, col: u8, text: &str) -> Result<(), DisplayError>;
}

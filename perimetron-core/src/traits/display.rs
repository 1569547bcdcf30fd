//! Display driver trait

/// Errors that can occur with display communication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Transport write failed
    Io,
}

/// Trait for the 4x20 character display
///
/// The display is a dumb text sink - all layout lives in the renderer.
/// Rendering is fire-and-forget: callers log failures and carry on.
pub trait TextDisplay {
    /// Clear the entire screen
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Write text at a position
    ///
    /// - `row`: row number (0-3)
    /// - `col`: column number (0-19)
    /// - `text`: ASCII text, at most 20 characters
    fn write_at(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;
}

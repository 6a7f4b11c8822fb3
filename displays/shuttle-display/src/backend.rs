//! Display backend trait
//!
//! Defines the interface for character displays.

use crate::frame::TextFrame;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transaction with the panel failed
    Bus,
    /// Cursor position outside the panel
    InvalidPosition,
    /// Panel has not been initialized
    NotInitialized,
}

/// Write-only character display
///
/// Mirrors the classic LCD command set: clear, move the cursor, print text
/// from the cursor onward.
pub trait CharacterDisplay {
    /// Clear the entire display and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor
    ///
    /// - `col`: Column in characters (0-based)
    /// - `row`: Row number (0-based)
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError>;

    /// Print text starting at the cursor
    fn write(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);
}

/// Helper trait for pushing whole frames
pub trait DisplayExt: CharacterDisplay {
    /// Clear the panel and print every line of `frame`
    ///
    /// Lines beyond the panel height are dropped.
    fn show_frame(&mut self, frame: &TextFrame) -> Result<(), DisplayError> {
        self.clear()?;

        let (_, rows) = self.dimensions();
        for (row, line) in frame.lines().enumerate().take(rows as usize) {
            if line.is_empty() {
                continue;
            }
            self.set_cursor(0, row as u8)?;
            self.write(line)?;
        }

        Ok(())
    }
}

// Blanket implementation for all CharacterDisplay types
impl<T: CharacterDisplay> DisplayExt for T {}

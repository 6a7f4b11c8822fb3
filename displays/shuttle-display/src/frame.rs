//! Two-line text frame
//!
//! A frame is what one full redraw of a 16x2 panel looks like. The presenter
//! keeps the last frame it successfully wrote and compares new frames against
//! it, since the panel itself cannot be read back.

use heapless::String;

/// Number of character rows on the panel
pub const FRAME_ROWS: usize = 2;

/// Number of character columns on the panel
pub const FRAME_COLS: usize = 16;

/// Fixed-size text content for one redraw
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFrame {
    lines: [String<FRAME_COLS>; FRAME_ROWS],
}

impl TextFrame {
    /// Build a frame from two lines, truncating each to the panel width
    pub fn new(line1: &str, line2: &str) -> Self {
        Self {
            lines: [fit(line1), fit(line2)],
        }
    }

    /// Get the content of a specific row
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Get all lines as an iterator
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.as_str())
    }
}

fn fit(text: &str) -> String<FRAME_COLS> {
    let mut line = String::new();
    for c in text.chars() {
        if line.push(c).is_err() {
            break;
        }
    }
    line
}

#[cfg(feature = "defmt")]
impl defmt::Format for TextFrame {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "[{} | {}]", self.lines[0].as_str(), self.lines[1].as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame() {
        let frame = TextFrame::new("Training", "paused...");
        assert_eq!(frame.line(0), Some("Training"));
        assert_eq!(frame.line(1), Some("paused..."));
        assert_eq!(frame.line(2), None);
    }

    #[test]
    fn test_truncates_to_width() {
        let frame = TextFrame::new("Difficulty: Extreme!", "");
        assert_eq!(frame.line(0), Some("Difficulty: Extr"));
        assert_eq!(frame.line(0).map(str::len), Some(FRAME_COLS));
    }

    #[test]
    fn test_equality_drives_comparison() {
        assert_eq!(TextFrame::new("Mode:", "Left"), TextFrame::new("Mode:", "Left"));
        assert_ne!(TextFrame::new("Mode:", "Left"), TextFrame::new("Mode:", "Right"));
    }

    #[test]
    fn test_default_is_empty() {
        let frame = TextFrame::default();
        assert!(frame.lines().all(str::is_empty));
        assert_eq!(TextFrame::new("Quit?", "").line(1), Some(""));
    }
}

//! Flicker-free display refresh
//!
//! A full clear-and-rewrite is visible on character LCDs, so the presenter
//! only redraws when the screen changed or the one choice shown on a
//! selection screen changed. Even then the write is skipped if the new frame
//! matches what was last written.

use shuttle_display::{CharacterDisplay, DisplayError, DisplayExt, TextFrame};

use super::render::render;
use crate::choice::Selections;
use crate::menu::Screen;

/// Owns the display and the record of what it currently shows
pub struct DisplayPresenter<L> {
    display: L,
    /// Last frame written successfully
    snapshot: Option<TextFrame>,
    /// Screen drawn by the last redraw
    last_screen: Option<Screen>,
    /// Focused choice ordinal drawn by the last redraw
    last_value: Option<u8>,
    /// Number of frames written
    writes: u32,
}

impl<L: CharacterDisplay> DisplayPresenter<L> {
    /// Create a presenter; the first refresh always draws
    pub fn new(display: L) -> Self {
        Self {
            display,
            snapshot: None,
            last_screen: None,
            last_value: None,
            writes: 0,
        }
    }

    /// Check whether `screen` with `selections` differs from the last redraw
    ///
    /// Choices not shown on `screen` are ignored.
    pub fn needs_redraw(&self, screen: Screen, selections: &Selections) -> bool {
        if self.last_screen != Some(screen) {
            return true;
        }
        screen.is_selection() && self.last_value != screen.focused_ordinal(selections)
    }

    /// Redraw if needed, returning `true` if the panel was written
    ///
    /// On error the panel contents are unknown; the next call redraws
    /// unconditionally.
    pub fn refresh(&mut self, screen: Screen, selections: &Selections) -> Result<bool, DisplayError> {
        if !self.needs_redraw(screen, selections) {
            return Ok(false);
        }

        let wrote = self.present(render(screen, selections))?;
        self.last_screen = Some(screen);
        self.last_value = screen.focused_ordinal(selections);
        Ok(wrote)
    }

    /// Write `frame` unless it is already showing
    ///
    /// The snapshot is only set after the display accepted the whole frame.
    pub fn present(&mut self, frame: TextFrame) -> Result<bool, DisplayError> {
        if self.snapshot.as_ref() == Some(&frame) {
            return Ok(false);
        }

        if let Err(e) = self.display.show_frame(&frame) {
            // The panel may already be cleared or half-written
            self.invalidate();
            return Err(e);
        }
        self.snapshot = Some(frame);
        self.writes = self.writes.wrapping_add(1);
        Ok(true)
    }

    /// Forget what the panel shows, e.g. after it was power-cycled
    pub fn invalidate(&mut self) {
        self.snapshot = None;
        self.last_screen = None;
        self.last_value = None;
    }

    /// Last frame written successfully
    pub fn snapshot(&self) -> Option<&TextFrame> {
        self.snapshot.as_ref()
    }

    /// Number of frames written so far
    pub fn writes(&self) -> u32 {
        self.writes
    }

    /// Access the display driver
    pub fn display_mut(&mut self) -> &mut L {
        &mut self.display
    }
}

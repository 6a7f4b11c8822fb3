//! Screen rendering
//!
//! Builds the two display lines for each screen. The 16x2 panel fits one
//! title and one value; only the three selection screens have a dynamic
//! line.

use shuttle_display::TextFrame;

use crate::choice::{Choice, Selections};
use crate::menu::Screen;

/// Map a screen and the current choices to display text
pub fn render(screen: Screen, selections: &Selections) -> TextFrame {
    let (title, detail) = match screen {
        Screen::ChooseHandedness => ("Mode:", selections.handedness.label()),
        Screen::ChooseTrainingType => ("Training:", selections.training.label()),
        Screen::ChooseDifficulty => ("Difficulty:", selections.difficulty.label()),
        Screen::ConfirmStart => ("Start?", "Confirm/Cancel"),
        Screen::SessionActive => ("Training", "in progress..."),
        Screen::SessionPaused => ("Training", "paused..."),
        Screen::ConfirmExit => ("Quit?", "Confirm/Cancel"),
    };

    TextFrame::new(title, detail)
}

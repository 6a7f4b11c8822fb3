//! Menu state: current screen, choices and the live session
//!
//! The screen moves only through [`Menu::handle`]. Choices are written only
//! while their own selection screen is showing, and survive a finished
//! session so the next one starts from the same settings.

use super::events::Event;
use super::machine::{Screen, Transition};
use super::session::Session;
use crate::choice::{Choice, Difficulty, Handedness, Selections, TrainingType};

/// Menu/session state machine
#[derive(Debug, Clone)]
pub struct Menu {
    screen: Screen,
    selections: Selections,
    session: Option<Session>,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new(Selections::DEFAULT)
    }
}

impl Menu {
    /// Create a menu on the initial screen with the given choices
    pub fn new(selections: Selections) -> Self {
        Self {
            screen: Screen::INITIAL,
            selections,
            session: None,
        }
    }

    /// Get current screen
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Get current choices
    pub fn selections(&self) -> Selections {
        self.selections
    }

    /// Get the live session, if any
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Number of options of the choice the current screen edits
    pub fn focused_options(&self) -> Option<u8> {
        self.screen.option_count()
    }

    /// Ordinal of the choice the current screen edits
    pub fn focused_ordinal(&self) -> Option<u8> {
        self.screen.focused_ordinal(&self.selections)
    }

    /// Overwrite the focused choice from a selector ordinal
    ///
    /// Out-of-range ordinals clamp to the last option. Does nothing outside
    /// the selection screens. Returns `true` if the choice changed.
    pub fn apply_selector(&mut self, ordinal: u8) -> bool {
        let before = self.selections;
        match self.screen {
            Screen::ChooseHandedness => {
                self.selections.handedness = Handedness::from_ordinal(ordinal);
            }
            Screen::ChooseTrainingType => {
                self.selections.training = TrainingType::from_ordinal(ordinal);
            }
            Screen::ChooseDifficulty => {
                self.selections.difficulty = Difficulty::from_ordinal(ordinal);
            }
            _ => {}
        }
        self.selections != before
    }

    /// Step the focused choice by `delta` options with wraparound
    ///
    /// Returns `true` if the choice changed.
    pub fn step_selection(&mut self, delta: i8) -> bool {
        match self.focused_ordinal() {
            Some(_) if delta != 0 => {
                let s = &mut self.selections;
                match self.screen {
                    Screen::ChooseHandedness => s.handedness = s.handedness.cycle(delta),
                    Screen::ChooseTrainingType => s.training = s.training.cycle(delta),
                    Screen::ChooseDifficulty => s.difficulty = s.difficulty.cycle(delta),
                    _ => {}
                }
                true
            }
            _ => false,
        }
    }

    /// Apply an event, returning the transition if the screen changed
    pub fn handle(&mut self, event: Event) -> Option<Transition> {
        let from = self.screen;
        let to = from.transition(event);
        if to == from {
            return None;
        }

        self.screen = to;
        match to {
            Screen::SessionActive => self.session.get_or_insert_with(Session::new).resume(),
            Screen::SessionPaused | Screen::ConfirmExit => {
                if let Some(session) = self.session.as_mut() {
                    session.pause();
                }
            }
            _ if !to.has_session() => self.session = None,
            _ => {}
        }

        Some(Transition { from, to, event })
    }

    /// Feed elapsed wall time to the live session
    pub fn advance_session(&mut self, elapsed_ms: u32) {
        if let Some(session) = self.session.as_mut() {
            session.advance(elapsed_ms);
        }
    }
}

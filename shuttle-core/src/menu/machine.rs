//! Screen state machine definition
//!
//! Every legal move between screens is listed in [`Screen::transition`];
//! anything not listed leaves the screen unchanged.

use super::events::Event;
use crate::choice::{Choice, Difficulty, Handedness, Selections, TrainingType};

/// Menu and session screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Pick right or left hand (power-on screen)
    ChooseHandedness,
    /// Pick the stroke to drill
    ChooseTrainingType,
    /// Pick the difficulty
    ChooseDifficulty,
    /// "Start?" prompt
    ConfirmStart,
    /// Session running
    SessionActive,
    /// Session paused by the player
    SessionPaused,
    /// "Quit?" prompt, session still alive
    ConfirmExit,
}

impl Screen {
    /// Screen shown at power-on and after quitting a session
    pub const INITIAL: Screen = Screen::ChooseHandedness;

    /// Check if the selector drives a choice on this screen
    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            Screen::ChooseHandedness | Screen::ChooseTrainingType | Screen::ChooseDifficulty
        )
    }

    /// Check if a session exists while this screen is showing
    pub fn has_session(&self) -> bool {
        matches!(
            self,
            Screen::SessionActive | Screen::SessionPaused | Screen::ConfirmExit
        )
    }

    /// Number of options of the choice edited on this screen
    pub fn option_count(&self) -> Option<u8> {
        match self {
            Screen::ChooseHandedness => Some(Handedness::count()),
            Screen::ChooseTrainingType => Some(TrainingType::count()),
            Screen::ChooseDifficulty => Some(Difficulty::count()),
            _ => None,
        }
    }

    /// Ordinal of the one choice this screen shows, if any
    pub fn focused_ordinal(&self, selections: &Selections) -> Option<u8> {
        match self {
            Screen::ChooseHandedness => Some(selections.handedness.ordinal()),
            Screen::ChooseTrainingType => Some(selections.training.ordinal()),
            Screen::ChooseDifficulty => Some(selections.difficulty.ordinal()),
            _ => None,
        }
    }

    /// Process an event and return the next screen
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Screen::*;

        match (self, event) {
            // Configuration menu
            (ChooseHandedness, Confirm) => ChooseTrainingType,
            (ChooseTrainingType, Confirm) => ChooseDifficulty,
            (ChooseTrainingType, Cancel) => ChooseHandedness,
            (ChooseDifficulty, Confirm) => ConfirmStart,
            (ChooseDifficulty, Cancel) => ChooseTrainingType,
            (ConfirmStart, Confirm) => SessionActive,
            (ConfirmStart, Cancel) => ChooseDifficulty,

            // Session
            (SessionActive, Cancel) => SessionPaused,
            (SessionActive, Pause) => SessionPaused,
            (SessionPaused, Confirm) => SessionActive,
            (SessionPaused, Pause) => SessionActive,
            (SessionPaused, Cancel) => ConfirmExit,
            (ConfirmExit, Confirm) => ChooseHandedness,
            (ConfirmExit, Cancel) => SessionActive,

            // Default: stay on current screen
            _ => self,
        }
    }
}

/// A screen change caused by one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
    pub event: Event,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Screen; 7] = [
        Screen::ChooseHandedness,
        Screen::ChooseTrainingType,
        Screen::ChooseDifficulty,
        Screen::ConfirmStart,
        Screen::SessionActive,
        Screen::SessionPaused,
        Screen::ConfirmExit,
    ];

    #[test]
    fn test_confirm_table() {
        use Screen::*;
        let expected = [
            ChooseTrainingType,
            ChooseDifficulty,
            ConfirmStart,
            SessionActive,
            SessionActive,
            SessionActive,
            ChooseHandedness,
        ];
        for (screen, next) in ALL.iter().zip(expected) {
            assert_eq!(screen.transition(Event::Confirm), next, "{:?}", screen);
        }
    }

    #[test]
    fn test_cancel_table() {
        use Screen::*;
        let expected = [
            ChooseHandedness,
            ChooseHandedness,
            ChooseTrainingType,
            ChooseDifficulty,
            SessionPaused,
            ConfirmExit,
            SessionActive,
        ];
        for (screen, next) in ALL.iter().zip(expected) {
            assert_eq!(screen.transition(Event::Cancel), next, "{:?}", screen);
        }
    }

    #[test]
    fn test_pause_only_in_session() {
        assert_eq!(
            Screen::SessionActive.transition(Event::Pause),
            Screen::SessionPaused
        );
        assert_eq!(
            Screen::SessionPaused.transition(Event::Pause),
            Screen::SessionActive
        );
        for screen in [
            Screen::ChooseHandedness,
            Screen::ChooseTrainingType,
            Screen::ChooseDifficulty,
            Screen::ConfirmStart,
            Screen::ConfirmExit,
        ] {
            assert_eq!(screen.transition(Event::Pause), screen);
        }
    }

    #[test]
    fn test_selection_screens() {
        let selection: Vec<_> = ALL.iter().filter(|s| s.is_selection()).collect();
        assert_eq!(selection.len(), 3);
        assert!(!Screen::ConfirmStart.is_selection());
    }

    #[test]
    fn test_focused_ordinal() {
        let selections = Selections {
            handedness: Handedness::Left,
            training: TrainingType::Smash,
            difficulty: Difficulty::Hard,
        };
        assert_eq!(Screen::ChooseHandedness.focused_ordinal(&selections), Some(1));
        assert_eq!(Screen::ChooseTrainingType.focused_ordinal(&selections), Some(2));
        assert_eq!(Screen::ChooseDifficulty.focused_ordinal(&selections), Some(3));
        assert_eq!(Screen::SessionPaused.focused_ordinal(&selections), None);
        assert_eq!(Screen::ChooseDifficulty.option_count(), Some(5));
        assert_eq!(Screen::ConfirmExit.option_count(), None);
    }

    #[test]
    fn test_session_screens() {
        assert!(Screen::SessionActive.has_session());
        assert!(Screen::ConfirmExit.has_session());
        assert!(!Screen::ConfirmStart.has_session());
        assert!(!Screen::INITIAL.has_session());
    }
}

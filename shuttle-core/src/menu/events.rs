//! Events that trigger screen transitions

use shuttle_hal::ButtonId;

/// Events that can trigger screen transitions
///
/// Each is produced by exactly one button's press edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Validate / advance / resume
    Confirm,
    /// Step back / pause / resume from the quit prompt
    Cancel,
    /// Dedicated pause-resume toggle (boards with a pause button)
    Pause,
}

impl Event {
    /// Transition events in the order they are evaluated within one poll
    ///
    /// Earlier events win when several fire in the same cycle.
    pub const PRECEDENCE: [Event; 3] = [Event::Confirm, Event::Cancel, Event::Pause];

    /// Button whose press edge produces this event
    pub fn button(self) -> ButtonId {
        match self {
            Event::Confirm => ButtonId::Confirm,
            Event::Cancel => ButtonId::Cancel,
            Event::Pause => ButtonId::Pause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_first() {
        assert_eq!(Event::PRECEDENCE[0], Event::Confirm);
        assert_eq!(Event::PRECEDENCE[1], Event::Cancel);
    }

    #[test]
    fn test_button_mapping() {
        assert_eq!(Event::Confirm.button(), ButtonId::Confirm);
        assert_eq!(Event::Cancel.button(), ButtonId::Cancel);
        assert_eq!(Event::Pause.button(), ButtonId::Pause);
    }
}

//! Button identities and the level query the core samples
//!
//! The core never touches pins directly. It asks [`ButtonInputs`] whether a
//! logical button is currently held, and edge detection happens upstream in
//! the sampler.

use crate::gpio::{ActiveLevel, InputPin};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical buttons known to the trainer
///
/// Confirm and Cancel are always present. The rest are deployment
/// extensions; boards without them simply report them as never held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ButtonId {
    /// Validate / advance
    Confirm,
    /// Back / pause
    Cancel,
    /// Dedicated pause-resume toggle
    Pause,
    /// Step selection forward (stepped selector boards)
    Up,
    /// Step selection backward (stepped selector boards)
    Down,
}

impl ButtonId {
    /// Number of distinct button identities
    pub const COUNT: usize = 5;

    /// All button identities in index order
    pub const ALL: [ButtonId; Self::COUNT] = [
        ButtonId::Confirm,
        ButtonId::Cancel,
        ButtonId::Pause,
        ButtonId::Up,
        ButtonId::Down,
    ];

    /// Dense index for per-button storage
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Query for the current (undebounced) held state of a button
pub trait ButtonInputs {
    /// Returns `true` while the button is physically held
    fn is_active(&mut self, id: ButtonId) -> bool;
}

/// [`ButtonInputs`] backed by a fixed table of input pins
///
/// All pins share one polarity. Buttons missing from the table are never
/// active.
pub struct PinButtons<P, const N: usize> {
    pins: [(ButtonId, P); N],
    level: ActiveLevel,
}

impl<P: InputPin, const N: usize> PinButtons<P, N> {
    /// Create a button bank from `(id, pin)` pairs
    pub fn new(pins: [(ButtonId, P); N], level: ActiveLevel) -> Self {
        Self { pins, level }
    }

    /// Check whether the bank has a pin wired for `id`
    pub fn has(&self, id: ButtonId) -> bool {
        self.pins.iter().any(|(pin_id, _)| *pin_id == id)
    }
}

impl<P: InputPin, const N: usize> ButtonInputs for PinButtons<P, N> {
    fn is_active(&mut self, id: ButtonId) -> bool {
        self.pins
            .iter()
            .find(|(pin_id, _)| *pin_id == id)
            .map(|(_, pin)| self.level.read(pin))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone)]
    struct SharedPin(Rc<Cell<bool>>);

    impl InputPin for SharedPin {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, id) in ButtonId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_pin_buttons_active_low() {
        let confirm = Rc::new(Cell::new(true));
        let cancel = Rc::new(Cell::new(true));
        let mut bank = PinButtons::new(
            [
                (ButtonId::Confirm, SharedPin(confirm.clone())),
                (ButtonId::Cancel, SharedPin(cancel.clone())),
            ],
            ActiveLevel::Low,
        );

        assert!(!bank.is_active(ButtonId::Confirm));
        confirm.set(false);
        assert!(bank.is_active(ButtonId::Confirm));
        assert!(!bank.is_active(ButtonId::Cancel));
    }

    #[test]
    fn test_missing_button_never_active() {
        let mut bank = PinButtons::new(
            [(ButtonId::Confirm, SharedPin(Rc::new(Cell::new(false))))],
            ActiveLevel::Low,
        );

        assert!(bank.has(ButtonId::Confirm));
        assert!(!bank.has(ButtonId::Pause));
        assert!(!bank.is_active(ButtonId::Pause));
    }
}

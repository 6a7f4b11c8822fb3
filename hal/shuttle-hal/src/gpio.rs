//! GPIO pin abstractions
//!
//! Provides the digital input trait that chip-specific code implements, plus
//! the polarity helper that turns a raw level into "pressed".

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Electrical level at which a button counts as pressed
///
/// Buttons wired to ground with a pull-up idle high and read low while
/// held, which is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ActiveLevel {
    /// Pressed reads low (pull-up, switch to ground)
    #[default]
    Low,
    /// Pressed reads high (pull-down, switch to supply)
    High,
}

impl ActiveLevel {
    /// Check whether a raw level means "pressed"
    pub fn is_active(self, level_high: bool) -> bool {
        match self {
            ActiveLevel::Low => !level_high,
            ActiveLevel::High => level_high,
        }
    }

    /// Read a pin through this polarity
    pub fn read<P: InputPin>(self, pin: &P) -> bool {
        self.is_active(pin.is_high())
    }
}

//! Configuration type definitions

use crate::choice::Selections;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Longest accepted debounce wait (ms)
///
/// The wait blocks the whole loop, so anything longer makes the menu feel
/// stuck.
pub const MAX_DEBOUNCE_MS: u32 = 500;

/// How the focused choice is driven on selection screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SelectorKind {
    /// Potentiometer position overwrites the choice every poll
    #[default]
    Analog,
    /// Up/Down buttons step the choice with wraparound
    Stepped,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Selector maximum is zero, nothing to map
    EmptySelectorRange,
    /// Debounce exceeds [`MAX_DEBOUNCE_MS`]
    DebounceTooLong,
}

/// Device configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceConfig {
    /// Wait after a press edge before committing the new level (ms)
    pub debounce_ms: u32,
    /// Largest raw value the selector produces
    pub selector_max: u16,
    /// Selector hardware
    pub selector: SelectorKind,
    /// Choices in effect at power-on
    pub defaults: Selections,
    /// Idle time between loop iterations (ms)
    pub poll_interval_ms: u32,
}

impl DeviceConfig {
    /// 12-bit ADC potentiometer, 50 ms debounce
    pub const DEFAULT: Self = Self {
        debounce_ms: 50,
        selector_max: 4095,
        selector: SelectorKind::Analog,
        defaults: Selections::DEFAULT,
        poll_interval_ms: 5,
    };

    /// Check the configuration for values the loop cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.selector_max == 0 {
            return Err(ConfigError::EmptySelectorRange);
        }
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::DebounceTooLong);
        }
        Ok(())
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

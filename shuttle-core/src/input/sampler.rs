//! Debounced button sampler
//!
//! Each poll compares a button's raw level with the level seen on the
//! previous poll. A press edge (inactive to active) is reported once, after
//! a blocking settle delay that swallows contact bounce. Releases are never
//! reported.

use embedded_hal::delay::DelayNs;
use shuttle_hal::{AnalogInput, ButtonId, ButtonInputs};

use super::selector::map_selector;
use crate::config::DeviceConfig;

/// Button and selector sampler
///
/// Owns the per-button previous-level store; nothing else reads or writes
/// it.
pub struct InputSampler<B, A, D> {
    buttons: B,
    selector: A,
    delay: D,
    debounce_ms: u32,
    selector_max: u16,
    /// Level seen on the last poll of each button (`true` = active)
    previous: [bool; ButtonId::COUNT],
}

impl<B: ButtonInputs, A: AnalogInput, D: DelayNs> InputSampler<B, A, D> {
    /// Create a sampler with every button assumed released
    pub fn new(buttons: B, selector: A, delay: D, config: &DeviceConfig) -> Self {
        Self {
            buttons,
            selector,
            delay,
            debounce_ms: config.debounce_ms,
            selector_max: config.selector_max,
            previous: [false; ButtonId::COUNT],
        }
    }

    /// Poll one button, returning `true` on a press edge
    ///
    /// On an edge the loop stalls for the debounce interval before the new
    /// level is committed.
    pub fn poll_button(&mut self, id: ButtonId) -> bool {
        let active = self.buttons.is_active(id);
        let slot = id.index();

        if active && !self.previous[slot] {
            self.delay.delay_ms(self.debounce_ms);
            self.previous[slot] = true;
            return true;
        }

        self.previous[slot] = active;
        false
    }

    /// Selector position as an ordinal in `0..options`
    pub fn read_selector(&mut self, options: u8) -> u8 {
        map_selector(self.selector.read(), self.selector_max, options)
    }

    /// Access the button source
    pub fn buttons_mut(&mut self) -> &mut B {
        &mut self.buttons
    }

    /// Access the selector source
    pub fn selector_mut(&mut self) -> &mut A {
        &mut self.selector
    }

    /// Access the delay provider
    pub fn delay(&self) -> &D {
        &self.delay
    }
}

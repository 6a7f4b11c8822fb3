//! Board wiring
//!
//! Adapts embassy-rp peripherals to the shuttle-hal traits. Pin numbers,
//! polarity and the LCD address come from device.toml through the
//! `device_config.rs` file generated by build.rs.

use embassy_rp::adc::{self, Adc, AdcPin, Blocking, Channel};
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::peripherals::ADC;
use embassy_rp::Peri;
use shuttle_core::{DeviceConfig, Difficulty, Handedness, Selections, SelectorKind, TrainingType};
use shuttle_hal::{ActiveLevel, AnalogInput, InputPin};

include!(concat!(env!("OUT_DIR"), "/device_config.rs"));

/// Push button on a GPIO with the configured pull
pub struct Button(Input<'static>);

impl Button {
    pub fn new(pin: Peri<'static, impl embassy_rp::gpio::Pin>) -> Self {
        Self(Input::new(pin, BUTTON_PULL))
    }
}

impl InputPin for Button {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// Selection input
pub enum Selector {
    /// Potentiometer wiper on an ADC pin
    Pot {
        adc: Adc<'static, Blocking>,
        channel: Channel<'static>,
        /// Last good conversion, reused if a read fails
        last: u16,
    },
    /// Stepped boards have no analog selector
    Absent,
}

impl Selector {
    pub fn pot(adc: Peri<'static, ADC>, pin: Peri<'static, impl AdcPin>) -> Self {
        Self::Pot {
            adc: Adc::new_blocking(adc, adc::Config::default()),
            channel: Channel::new_pin(pin, Pull::None),
            last: 0,
        }
    }
}

impl AnalogInput for Selector {
    fn read(&mut self) -> u16 {
        match self {
            Self::Pot { adc, channel, last } => {
                if let Ok(raw) = adc.blocking_read(channel) {
                    *last = raw;
                }
                *last
            }
            Self::Absent => 0,
        }
    }
}

//! Shuttle - Racket Sport Training Assistant Firmware
//!
//! Main firmware binary for RP2040-based trainers. Runs the menu on a 16x2
//! I2C LCD, reads the selector and buttons, and keeps the session clock.
//!
//! Named after the shuttlecock.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::i2c::{self, I2c};
use embassy_time::{Delay, Duration, Instant, Timer};
use shuttle_core::{DeviceConfig, Screen, Trainer};
use shuttle_display::Hd44780;
use shuttle_hal::{ButtonId, PinButtons};
use {defmt_rtt as _, panic_probe as _};

#[macro_use]
mod board;

use board::{Button, Selector, BUTTON_COUNT, BUTTON_LEVEL, DEVICE_CONFIG, LCD_ADDRESS};

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Shuttle firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = match DEVICE_CONFIG.validate() {
        Ok(()) => DEVICE_CONFIG,
        Err(e) => {
            warn!("Invalid device config ({}), using defaults", e);
            DeviceConfig::DEFAULT
        }
    };
    info!("Config: {}", config);

    let buttons: PinButtons<Button, BUTTON_COUNT> = PinButtons::new(take_buttons!(p), BUTTON_LEVEL);
    if !buttons.has(ButtonId::Pause) {
        info!("No pause button, Cancel pauses");
    }
    let selector = take_selector!(p);
    let lcd = Hd44780::new(take_lcd_bus!(p), Delay, LCD_ADDRESS);

    let mut trainer = Trainer::new(buttons, selector, Delay, lcd, &config);
    info!("Trainer ready");

    let period = Duration::from_millis(config.poll_interval_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // The session is gone once the exit transition lands
        let session_ms = trainer.menu().session().map(|s| s.active_ms());

        let outcome = trainer.poll();

        if let Some(t) = outcome.transition {
            info!("{} -> {} ({})", t.from, t.to, t.event);
            match (t.from, t.to) {
                (Screen::ConfirmStart, Screen::SessionActive) => {
                    info!("Session started: {}", trainer.menu().selections());
                }
                (Screen::ConfirmExit, Screen::ChooseHandedness) => {
                    if let Some(ms) = session_ms {
                        info!("Session ended after {} ms", ms);
                    }
                }
                _ => {}
            }
        }

        if let Some(e) = outcome.display_error {
            warn!("Display write failed: {}", e);
        }

        Timer::after(period).await;

        let now = Instant::now();
        trainer.advance((now - last_tick).as_millis() as u32);
        last_tick = now;
    }
}

//! Character display abstraction for Shuttle
//!
//! This crate provides:
//! - `CharacterDisplay` trait for write-only text displays (HD44780 and friends)
//! - `DisplayExt::show_frame` to push a whole frame with clear + cursor + write
//! - `TextFrame`, the fixed two-line text buffer the presenter compares
//!   against before every write
//! - `Hd44780`, a driver for the common HD44780 panel behind a PCF8574 I2C
//!   backpack
//!
//! # Architecture
//!
//! The trainer core renders each screen to a `TextFrame`. Board firmware
//! implements `CharacterDisplay` for its concrete panel; the core never reads
//! the panel back, so the last frame written is the only record of what is
//! visible.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod frame;
pub mod hd44780;

// Re-export key types
pub use backend::{CharacterDisplay, DisplayError, DisplayExt};
pub use frame::{TextFrame, FRAME_COLS, FRAME_ROWS};
pub use hd44780::Hd44780;

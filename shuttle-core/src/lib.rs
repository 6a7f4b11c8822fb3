//! Board-agnostic core logic for the Shuttle trainer
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Training choices (handedness, stroke, difficulty) and their stepping
//! - Debounced button sampling and selector mapping
//! - Menu/session state machine
//! - Screen rendering and flicker-free display refresh
//! - The `Trainer` orchestrator tying one poll iteration together
//! - Device configuration types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod choice;
pub mod config;
pub mod input;
pub mod menu;
pub mod trainer;
pub mod ui;

pub use choice::{Choice, Difficulty, Handedness, Selections, TrainingType};
pub use config::{ConfigError, DeviceConfig, SelectorKind};
pub use menu::{Event, Menu, Screen, Session, Transition};
pub use trainer::{PollOutcome, Trainer};

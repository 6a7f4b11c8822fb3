//! Shuttle Hardware Abstraction Layer
//!
//! This crate defines the input-side hardware traits the trainer core
//! consumes. Board crates implement them on top of their chip HAL, and
//! host tests implement them with plain in-memory mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  shuttle-core (sampler, menu, trainer)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  shuttle-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │   shuttle-    │       │  test mocks   │
//! │   firmware    │       │   (host)      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Raw digital input level
//! - [`buttons::ButtonInputs`] - Logical "is this button held" query
//! - [`analog::AnalogInput`] - Continuous selector sample

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod analog;
pub mod buttons;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use analog::{AnalogInput, FixedInput};
pub use buttons::{ButtonId, ButtonInputs, PinButtons};
pub use gpio::{ActiveLevel, InputPin};

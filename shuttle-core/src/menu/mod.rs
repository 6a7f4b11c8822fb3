//! Menu and session state machine
//!
//! Defines the authoritative screen flow of the trainer.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;
pub mod session;
pub mod state;

pub use events::Event;
pub use machine::{Screen, Transition};
pub use session::Session;
pub use state::Menu;

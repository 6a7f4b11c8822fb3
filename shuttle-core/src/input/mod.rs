//! Input sampling
//!
//! Turns raw button levels into press edges and raw selector samples into
//! option ordinals. Nothing here knows which screen is showing.

pub mod sampler;
pub mod selector;

pub use sampler::InputSampler;
pub use selector::map_selector;

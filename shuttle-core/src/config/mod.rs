//! Configuration types
//!
//! Per-deployment settings. Firmware builds generate a `DeviceConfig`
//! constant from their `device.toml`; host tests use [`DeviceConfig::DEFAULT`].

pub mod types;

pub use types::*;

//! Continuous selector input
//!
//! A potentiometer (or anything else producing a bounded integer) sampled
//! once per loop iteration.

/// Analog-like input with a fixed deployment-defined range
pub trait AnalogInput {
    /// Take one sample
    ///
    /// Values are expected in `0..=max` for the configured maximum; larger
    /// readings are clamped by the consumer.
    fn read(&mut self) -> u16;
}

/// A selector that always reads the same value
///
/// Stands in for a potentiometer in host tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedInput(pub u16);

impl AnalogInput for FixedInput {
    fn read(&mut self) -> u16 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_input() {
        let mut input = FixedInput(512);
        assert_eq!(input.read(), 512);
        assert_eq!(FixedInput::default().read(), 0);
    }
}

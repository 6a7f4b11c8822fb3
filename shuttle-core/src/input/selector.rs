//! Selector mapping

/// Map a raw selector sample onto `options` evenly sized bands
///
/// The raw range `0..=max` is split linearly and floored, so `0` maps to
/// ordinal 0 and `max` maps to `options - 1`. Samples above `max` clamp to
/// `max`. With a 10-bit selector and two options the split falls at 512.
/// Every option gets a non-empty band as long as `options <= max + 1`.
pub fn map_selector(raw: u16, max: u16, options: u8) -> u8 {
    if options == 0 {
        return 0;
    }

    let raw = raw.min(max) as u32;
    let span = max as u32 + 1;

    ((raw * options as u32) / span) as u8
}

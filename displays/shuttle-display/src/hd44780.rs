//! HD44780 character LCD behind a PCF8574 I2C backpack
//!
//! The expander drives the panel in 4-bit mode. Expander bit layout:
//!
//! | Bit | P0 | P1 | P2 | P3        | P4..P7  |
//! |-----|----|----|----|-----------|---------|
//! |     | RS | RW | EN | Backlight | D4..D7  |
//!
//! RW is tied low; the panel is never read.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::backend::{CharacterDisplay, DisplayError};

/// Default backpack address (A0..A2 open)
pub const DEFAULT_ADDRESS: u8 = 0x27;

const RS: u8 = 0x01;
const EN: u8 = 0x04;
const BACKLIGHT: u8 = 0x08;

const CMD_CLEAR: u8 = 0x01;
// Increment, no shift
const CMD_ENTRY_MODE: u8 = 0x06;
// Display on, cursor off, blink off
const CMD_DISPLAY_ON: u8 = 0x0C;
// 4-bit bus, 2 lines, 5x8 font
const CMD_FUNCTION_SET: u8 = 0x28;
const CMD_SET_DDRAM: u8 = 0x80;

const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];
const COLS: u8 = 16;
const ROWS: u8 = 2;

/// 16x2 HD44780 panel on a PCF8574 expander
///
/// The panel is initialized lazily by the first [`CharacterDisplay::clear`]
/// and again after any bus error, so a panel that was unplugged or browned
/// out recovers on the next frame.
pub struct Hd44780<I, D> {
    i2c: I,
    delay: D,
    address: u8,
    initialized: bool,
}

impl<I: I2c, D: DelayNs> Hd44780<I, D> {
    /// Create a driver; no bus traffic until the first clear or `init`
    pub fn new(i2c: I, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            initialized: false,
        }
    }

    /// Run the power-on sequence and leave the panel cleared
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.initialized = false;
        self.delay.delay_ms(50);

        // Three 8-bit function sets resync the controller from any state,
        // then switch to 4-bit
        for wait_us in [4500, 4500, 150] {
            self.write_nibble(0x30)?;
            self.delay.delay_us(wait_us);
        }
        self.write_nibble(0x20)?;

        self.command(CMD_FUNCTION_SET)?;
        self.command(CMD_DISPLAY_ON)?;
        self.command(CMD_CLEAR)?;
        self.delay.delay_ms(2);
        self.command(CMD_ENTRY_MODE)?;

        self.initialized = true;
        Ok(())
    }

    /// Check whether the power-on sequence completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Release the bus and delay
    pub fn release(self) -> (I, D) {
        (self.i2c, self.delay)
    }

    fn expander_write(&mut self, bits: u8) -> Result<(), DisplayError> {
        let result = self.i2c.write(self.address, &[bits | BACKLIGHT]);
        result.map_err(|_| {
            self.initialized = false;
            DisplayError::Bus
        })
    }

    fn write_nibble(&mut self, nibble: u8) -> Result<(), DisplayError> {
        self.expander_write(nibble | EN)?;
        self.delay.delay_us(1);
        self.expander_write(nibble)?;
        self.delay.delay_us(50);
        Ok(())
    }

    fn send(&mut self, byte: u8, mode: u8) -> Result<(), DisplayError> {
        self.write_nibble((byte & 0xF0) | mode)?;
        self.write_nibble((byte << 4) | mode)
    }

    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.send(cmd, 0)
    }

    fn ensure_initialized(&self) -> Result<(), DisplayError> {
        if self.initialized {
            Ok(())
        } else {
            Err(DisplayError::NotInitialized)
        }
    }
}

impl<I: I2c, D: DelayNs> CharacterDisplay for Hd44780<I, D> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            // init leaves the panel cleared
            return self.init();
        }
        self.command(CMD_CLEAR)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        if col >= COLS || row >= ROWS {
            return Err(DisplayError::InvalidPosition);
        }
        self.command(CMD_SET_DDRAM | (ROW_OFFSETS[row as usize] + col))
    }

    fn write(&mut self, text: &str) -> Result<(), DisplayError> {
        self.ensure_initialized()?;
        for c in text.chars() {
            // The character ROM only matches ASCII
            let byte = if c.is_ascii() && !c.is_ascii_control() {
                c as u8
            } else {
                b'?'
            };
            self.send(byte, RS)?;
        }
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (COLS, ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::DisplayExt;
    use crate::frame::TextFrame;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};

    #[derive(Default)]
    struct MockBus {
        bytes: Vec<u8>,
        addresses: Vec<u8>,
        fail: bool,
    }

    impl ErrorType for MockBus {
        type Error = ErrorKind;
    }

    impl I2c for MockBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            for op in operations.iter() {
                if let Operation::Write(data) = op {
                    self.bytes.extend_from_slice(data);
                    self.addresses.push(address);
                }
            }
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    /// Reassemble (rs, byte) pairs from latched nibbles, skipping init
    fn decode(bytes: &[u8], skip_nibbles: usize) -> Vec<(bool, u8)> {
        let latched: Vec<u8> = bytes.iter().copied().filter(|b| b & EN != 0).collect();
        latched[skip_nibbles..]
            .chunks(2)
            .map(|pair| (pair[0] & RS != 0, (pair[0] & 0xF0) | (pair[1] >> 4)))
            .collect()
    }

    // 4 reset nibbles + 4 commands of 2 nibbles
    const INIT_NIBBLES: usize = 12;

    fn lcd() -> Hd44780<MockBus, NoDelay> {
        Hd44780::new(MockBus::default(), NoDelay, DEFAULT_ADDRESS)
    }

    #[test]
    fn test_init_sequence() {
        let mut lcd = lcd();
        lcd.init().unwrap();
        assert!(lcd.is_initialized());

        let (bus, _) = lcd.release();
        let latched: Vec<u8> = bus.bytes.iter().map(|b| b & 0xF0).step_by(2).collect();
        assert_eq!(&latched[..4], &[0x30, 0x30, 0x30, 0x20]);
        assert_eq!(
            decode(&bus.bytes, 4),
            [
                (false, CMD_FUNCTION_SET),
                (false, CMD_DISPLAY_ON),
                (false, CMD_CLEAR),
                (false, CMD_ENTRY_MODE)
            ]
        );
        assert!(bus.bytes.iter().all(|b| b & BACKLIGHT != 0));
        assert!(bus.addresses.iter().all(|a| *a == DEFAULT_ADDRESS));
    }

    #[test]
    fn test_writes_before_init_rejected() {
        let mut lcd = lcd();
        assert_eq!(lcd.set_cursor(0, 0), Err(DisplayError::NotInitialized));
        assert_eq!(lcd.write("x"), Err(DisplayError::NotInitialized));
    }

    #[test]
    fn test_show_frame_bytes() {
        let mut lcd = lcd();
        lcd.show_frame(&TextFrame::new("Mode:", "Left")).unwrap();

        let (bus, _) = lcd.release();
        let mut expected = vec![(false, CMD_SET_DDRAM)];
        expected.extend("Mode:".bytes().map(|b| (true, b)));
        expected.push((false, CMD_SET_DDRAM | 0x40));
        expected.extend("Left".bytes().map(|b| (true, b)));
        assert_eq!(decode(&bus.bytes, INIT_NIBBLES), expected);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut lcd = lcd();
        lcd.init().unwrap();
        assert_eq!(lcd.set_cursor(16, 0), Err(DisplayError::InvalidPosition));
        assert_eq!(lcd.set_cursor(0, 2), Err(DisplayError::InvalidPosition));
        assert_eq!(lcd.set_cursor(15, 1), Ok(()));
    }

    #[test]
    fn test_non_ascii_replaced() {
        let mut lcd = lcd();
        lcd.init().unwrap();
        lcd.write("é").unwrap();
        let (bus, _) = lcd.release();
        assert_eq!(decode(&bus.bytes, INIT_NIBBLES), [(true, b'?')]);
    }

    #[test]
    fn test_bus_error_forces_reinit() {
        let mut lcd = lcd();
        lcd.init().unwrap();

        lcd.i2c.fail = true;
        assert_eq!(lcd.write("A"), Err(DisplayError::Bus));
        assert!(!lcd.is_initialized());
        assert_eq!(lcd.clear(), Err(DisplayError::Bus));

        lcd.i2c.fail = false;
        lcd.i2c.bytes.clear();
        lcd.clear().unwrap();
        assert!(lcd.is_initialized());
        assert_eq!(lcd.i2c.bytes.len(), INIT_NIBBLES * 2);
    }
}

//! Decimal digit view of the game id and serial number.

use std::fmt;

/// Number of digits in a full serial (3 game id + 6 serial)
pub const DIGIT_COUNT: usize = 9;

/// The nine digits printed on a PIC label.
///
/// Digits 0..=2 are the game id, 3..=8 the serial number, most significant
/// first. The arithmetic transforms scatter these across byte groups, so the
/// digits rather than the two integers are what gets encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitArray([u8; DIGIT_COUNT]);

impl DigitArray {
    /// Expand a game id and serial number into digits.
    ///
    /// Values wider than their field keep only their low digits.
    pub fn from_fields(game_id: u16, serial_number: u32) -> Self {
        let mut digits = [0u8; DIGIT_COUNT];
        let mut game_id = u32::from(game_id);
        for digit in digits[..3].iter_mut().rev() {
            *digit = (game_id % 10) as u8;
            game_id /= 10;
        }
        let mut serial = serial_number;
        for digit in digits[3..].iter_mut().rev() {
            *digit = (serial % 10) as u8;
            serial /= 10;
        }
        Self(digits)
    }

    pub fn get(&self, index: usize) -> u8 {
        self.0[index]
    }

    /// Set one digit; values above 9 are reduced modulo 10
    pub fn set(&mut self, index: usize, value: u8) {
        self.0[index] = value % 10;
    }

    pub fn game_id(&self) -> u16 {
        self.0[..3]
            .iter()
            .fold(0u16, |acc, &d| acc * 10 + u16::from(d))
    }

    pub fn serial_number(&self) -> u32 {
        self.0[3..]
            .iter()
            .fold(0u32, |acc, &d| acc * 10 + u32::from(d))
    }
}

impl fmt::Display for DigitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields() {
        let digits = DigitArray::from_fields(315, 4021);
        assert_eq!(digits.to_string(), "315004021");
        assert_eq!(digits.game_id(), 315);
        assert_eq!(digits.serial_number(), 4021);
    }

    #[test]
    fn test_extremes() {
        let digits = DigitArray::from_fields(999, 999_999);
        assert_eq!(digits.to_string(), "999999999");

        let digits = DigitArray::from_fields(0, 0);
        assert_eq!(digits.to_string(), "000000000");
    }

    #[test]
    fn test_wide_values_keep_low_digits() {
        let digits = DigitArray::from_fields(1234, 1_000_001);
        assert_eq!(digits.game_id(), 234);
        assert_eq!(digits.serial_number(), 1);
    }

    #[test]
    fn test_set_reduces_modulo_ten() {
        let mut digits = DigitArray::default();
        digits.set(4, 17);
        assert_eq!(digits.get(4), 7);
    }
}

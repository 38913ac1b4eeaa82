//! Manufacture date field.
//!
//! Stored as a mixed-radix day count: 0x174 (372) per year, 0x1F (31) per
//! month, days 0-30. Unlike the numeric fields this one is big-endian.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::LogicalRecord;

/// First year representable in the record
pub const EPOCH_YEAR: u16 = 1980;

const DAYS_PER_YEAR: u16 = 0x174;
const DAYS_PER_MONTH: u16 = 0x1F;

/// Logical index of the high date byte
const DATE_HIGH: usize = 10;
/// Logical index of the low date byte
const DATE_LOW: usize = 11;

/// Manufacture date as stored on the PIC.
///
/// Day runs 0-30 rather than 1-31; that is how the games display it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufactureDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl ManufactureDate {
    pub fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Decode a raw 16-bit day count. Every input maps to an in-range date.
    pub fn from_raw(raw: u16) -> Self {
        let years = raw / DAYS_PER_YEAR;
        let remainder = raw - years * DAYS_PER_YEAR;
        let months = remainder / DAYS_PER_MONTH;
        let day = remainder - months * DAYS_PER_MONTH;
        Self {
            year: EPOCH_YEAR + years,
            month: months as u8 + 1,
            day: day as u8,
        }
    }

    /// Encode as a raw day count. Expects fields inside their declared ranges.
    pub fn to_raw(&self) -> u16 {
        DAYS_PER_YEAR * (self.year - EPOCH_YEAR)
            + DAYS_PER_MONTH * (u16::from(self.month) - 1)
            + u16::from(self.day)
    }

    pub fn decode(record: &LogicalRecord) -> Self {
        let raw = u16::from_be_bytes([record.byte(DATE_HIGH), record.byte(DATE_LOW)]);
        Self::from_raw(raw)
    }

    pub fn encode(&self, record: &mut LogicalRecord) {
        let [high, low] = self.to_raw().to_be_bytes();
        record.set_byte(DATE_HIGH, high);
        record.set_byte(DATE_LOW, low);
    }
}

impl fmt::Display for ManufactureDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_date() {
        let date = ManufactureDate::new(2001, 6, 15);
        assert_eq!(date.to_raw(), 0x174 * 21 + 0x1F * 5 + 15);
        assert_eq!(ManufactureDate::from_raw(date.to_raw()), date);
    }

    #[test]
    fn test_big_endian_bytes() {
        let mut record = LogicalRecord::default();
        let date = ManufactureDate::new(2001, 6, 15);
        date.encode(&mut record);

        let raw = date.to_raw();
        assert_eq!(record.byte(10), (raw >> 8) as u8);
        assert_eq!(record.byte(11), (raw & 0xFF) as u8);
        assert_eq!(ManufactureDate::decode(&record), date);
    }

    #[test]
    fn test_range_limits() {
        let first = ManufactureDate::new(1980, 1, 0);
        assert_eq!(first.to_raw(), 0);

        let last = ManufactureDate::new(2155, 12, 30);
        assert_eq!(last.to_raw(), 65471);
        assert_eq!(ManufactureDate::from_raw(65471), last);
    }

    #[test]
    fn test_every_raw_value_decodes_in_range() {
        for raw in [0u16, 30, 31, 371, 372, 65535] {
            let date = ManufactureDate::from_raw(raw);
            assert!((1..=12).contains(&date.month), "month for {}", raw);
            assert!(date.day <= 30, "day for {}", raw);
        }
        assert_eq!(
            ManufactureDate::from_raw(371),
            ManufactureDate::new(1980, 12, 30)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ManufactureDate::new(1997, 3, 0).to_string(), "3/0/1997");
    }
}

//! Identity record codec: logical bytes <-> game id, serial and date.
//!
//! Digit layout inside the three numeric groups:
//!
//! | Group | Bytes | Digits (place) |
//! |-------|-------|----------------|
//! | serial low | 7..=9 | d1 (100), d7 (10), d4 (1) |
//! | serial high | 3..=6 | d2 (10000), d0 (100), d8 (10), d6 (1) |
//! | remainder | 0..=2 | d3 (100), d5 (10) |
//!
//! Bytes 12..=15 are never derived; encode copies them from the source record.

use serde::{Deserialize, Serialize};

use crate::date::ManufactureDate;
use crate::digits::DigitArray;
use crate::field::{PackedField, Rounding};
use crate::games;
use crate::record::LogicalRecord;

pub const SERIAL_LOW: PackedField = PackedField {
    name: "serial_low",
    bytes: &[7, 8, 9],
    multiplier: 0x1BCD,
    offset: 0x1F3F0,
    adjust: (0, 5),
    places: &[(1, 100), (7, 10), (4, 1)],
    rounding: Rounding::Floor,
};

pub const SERIAL_HIGH: PackedField = PackedField {
    name: "serial_high",
    bytes: &[3, 4, 5, 6],
    multiplier: 0x107F,
    offset: 0x71E259,
    adjust: (1, 2),
    places: &[(2, 10000), (0, 100), (8, 10), (6, 1)],
    rounding: Rounding::TowardZero,
};

pub const REMAINDER: PackedField = PackedField {
    name: "remainder",
    bytes: &[0, 1, 2],
    multiplier: 0x245,
    offset: 0x3D74,
    adjust: (1, 0),
    places: &[(3, 100), (5, 10)],
    rounding: Rounding::TowardZero,
};

/// All numeric groups, in decode order
pub const FIELDS: [PackedField; 3] = [SERIAL_LOW, SERIAL_HIGH, REMAINDER];

/// Human-meaningful contents of a PIC identity record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub game_id: u16,
    pub serial_number: u32,
    pub date: ManufactureDate,
}

impl Identity {
    pub fn digits(&self) -> DigitArray {
        DigitArray::from_fields(self.game_id, self.serial_number)
    }

    pub fn game_title(&self) -> &'static str {
        games::title_for(self.game_id)
    }
}

/// Recover the nine label digits from a record
pub fn decode_digits(record: &LogicalRecord) -> DigitArray {
    let mut digits = DigitArray::default();
    for field in &FIELDS {
        field.decode(record, &mut digits);
    }
    digits
}

pub fn decode(record: &LogicalRecord) -> Identity {
    let digits = decode_digits(record);
    let identity = Identity {
        game_id: digits.game_id(),
        serial_number: digits.serial_number(),
        date: ManufactureDate::decode(record),
    };
    tracing::debug!(%record, %digits, date = %identity.date, "decoded identity record");
    identity
}

/// Build the record for `identity`, taking b12..=b15 from `source`
pub fn encode(identity: &Identity, source: &LogicalRecord) -> LogicalRecord {
    let digits = identity.digits();
    let mut record = *source;
    for field in &FIELDS {
        field.encode(&digits, &mut record);
    }
    identity.date.encode(&mut record);
    tracing::debug!(%record, %digits, "encoded identity record");
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_adjust(b12: u8, b13: u8) -> LogicalRecord {
        let mut record = LogicalRecord::default();
        record.set_byte(12, b12);
        record.set_byte(13, b13);
        record.set_byte(14, 0xC3);
        record.set_byte(15, 0x5A);
        record
    }

    #[test]
    fn test_roundtrip_fields() {
        let dates = [
            ManufactureDate::new(1980, 1, 0),
            ManufactureDate::new(1998, 7, 22),
            ManufactureDate::new(2155, 12, 30),
        ];
        for (b12, b13) in [(0u8, 0u8), (0x2A, 0x91), (255, 255), (255, 0), (0, 255)] {
            let source = record_with_adjust(b12, b13);
            for game_id in (0..=999u16).step_by(37).chain([999]) {
                for serial_number in (0..=999_999u32).step_by(99_991).chain([999_999]) {
                    for date in dates {
                        let identity = Identity {
                            game_id,
                            serial_number,
                            date,
                        };
                        let record = encode(&identity, &source);
                        assert_eq!(
                            decode(&record),
                            identity,
                            "b12={} b13={} record={}",
                            b12,
                            b13,
                            record
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_roundtrip_every_digit_position() {
        let source = record_with_adjust(0x11, 0xEE);
        for position in 0..9 {
            for value in 0..10u8 {
                let mut digits = DigitArray::default();
                digits.set(position, value);
                let identity = Identity {
                    game_id: digits.game_id(),
                    serial_number: digits.serial_number(),
                    date: ManufactureDate::new(2000, 1, 1),
                };
                let record = encode(&identity, &source);
                assert_eq!(decode_digits(&record), digits);
            }
        }
    }

    #[test]
    fn test_adjustment_and_unused_bytes_pass_through() {
        let source = record_with_adjust(0x7B, 0x04);
        let identity = Identity {
            game_id: 346,
            serial_number: 123_456,
            date: ManufactureDate::new(2001, 6, 15),
        };
        let record = encode(&identity, &source);
        for i in 12..16 {
            assert_eq!(record.byte(i), source.byte(i), "byte {} changed", i);
        }
    }

    #[test]
    fn test_encode_matches_formulas() {
        let source = record_with_adjust(3, 7);
        let identity = Identity {
            game_id: 315,
            serial_number: 40_213,
            date: ManufactureDate::new(1996, 11, 4),
        };
        // digits: 3 1 5 0 4 0 2 1 3
        let record = encode(&identity, &source);

        let t1: i64 = (4 + 10 + 100 + 5 * 7) * 0x1BCD + 0x1F3F0;
        assert_eq!(SERIAL_LOW.pack(&record), t1 & 0xFF_FFFF);

        let t2: i64 = (2 + 3 * 10 + 3 * 100 + 5 * 10000 + 2 * 7 + 3) * 0x107F + 0x71E259;
        assert_eq!(SERIAL_HIGH.pack(&record), t2 & 0xFFFF_FFFF);

        // d5 and d3 are both zero, leaving only b12
        let t3: i64 = 3 * 0x245 + 0x3D74;
        assert_eq!(REMAINDER.pack(&record), t3 & 0xFF_FFFF);

        let t4: u16 = 0x174 * 16 + 0x1F * 10 + 4;
        assert_eq!(record.byte(10), (t4 >> 8) as u8);
        assert_eq!(record.byte(11), (t4 & 0xFF) as u8);
    }

    #[test]
    fn test_serial_low_digit_positions() {
        let mut digits = DigitArray::default();
        SERIAL_LOW.scatter_digits(12345, &mut digits);
        assert_eq!(digits.get(1), 3);
        assert_eq!(digits.get(7), 4);
        assert_eq!(digits.get(4), 5);
    }

    #[test]
    fn test_serial_low_from_bytes() {
        // t1 = 345 with b13 = 2: packed = (345 + 10) * 0x1BCD + 0x1F3F0
        let mut record = record_with_adjust(0, 2);
        SERIAL_LOW.unpack((345 + 10) * 0x1BCD + 0x1F3F0, &mut record);
        assert_eq!(SERIAL_LOW.value(&record), 345);

        let digits = decode_digits(&record);
        assert_eq!(digits.get(1), 3);
        assert_eq!(digits.get(7), 4);
        assert_eq!(digits.get(4), 5);
    }

    #[test]
    fn test_zeroed_record_rounding() {
        // Every packed value sits below its offset:
        // serial low  -127984 / 7117   = -17.98   -> floor -18
        // serial high -7463513 / 4223  = -1767.35 -> trunc -1767
        // remainder   -15732 / 581     = -27.08   -> trunc -27
        let record = LogicalRecord::default();
        assert_eq!(SERIAL_LOW.value(&record), -18);
        assert_eq!(SERIAL_HIGH.value(&record), -1767);
        assert_eq!(REMAINDER.value(&record), -27);

        let digits = decode_digits(&record);
        assert_eq!(digits.to_string(), "299927383");

        let identity = decode(&record);
        assert_eq!(identity.game_id, 299);
        assert_eq!(identity.serial_number, 927_383);
        assert_eq!(identity.date, ManufactureDate::new(1980, 1, 0));
    }

    #[test]
    fn test_identity_helpers() {
        let identity = Identity {
            game_id: 336,
            serial_number: 42,
            date: ManufactureDate::new(1999, 2, 3),
        };
        assert_eq!(identity.digits().to_string(), "336000042");
        assert_eq!(identity.game_title(), "San Francisco Rush 2049");
    }
}

//! Linear packed-field transform shared by the three numeric byte groups.
//!
//! Each group stores `(Σ digit·place + adjustment) · multiplier + offset`
//! as a little-endian integer spread over three or four logical bytes. The
//! adjustment mixes in the record's b12/b13 bytes with small coefficients.

use crate::digits::DigitArray;
use crate::record::{LogicalRecord, ADJUST_A, ADJUST_B};

/// How the scaled value is reduced to an integer on decode.
///
/// Only matters for dumps whose packed value sits below the field offset;
/// anything written by [`PackedField::encode`] divides exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Keep the real quotient; digits are taken with floor semantics
    Floor,
    /// Truncate `quotient - adjustment` toward zero before taking digits
    TowardZero,
}

/// One arithmetic byte group of the identity record
#[derive(Debug, Clone, Copy)]
pub struct PackedField {
    pub name: &'static str,
    /// Logical byte indices, least significant first
    pub bytes: &'static [usize],
    pub multiplier: i64,
    pub offset: i64,
    /// Coefficients applied to b12 and b13
    pub adjust: (i64, i64),
    /// Digit index and its place value inside the field
    pub places: &'static [(usize, i64)],
    pub rounding: Rounding,
}

impl PackedField {
    /// Assemble the field's bytes into an integer
    pub fn pack(&self, record: &LogicalRecord) -> i64 {
        self.bytes
            .iter()
            .rev()
            .fold(0i64, |acc, &i| (acc << 8) | i64::from(record.byte(i)))
    }

    /// Spread the low bytes of `value` over the field's positions
    pub fn unpack(&self, value: i64, record: &mut LogicalRecord) {
        for (shift, &i) in self.bytes.iter().enumerate() {
            record.set_byte(i, ((value >> (8 * shift)) & 0xFF) as u8);
        }
    }

    fn adjustment(&self, record: &LogicalRecord) -> i64 {
        self.adjust.0 * i64::from(record.byte(ADJUST_A))
            + self.adjust.1 * i64::from(record.byte(ADJUST_B))
    }

    /// The digit-bearing value stored in this field
    pub fn value(&self, record: &LogicalRecord) -> i64 {
        let scaled = self.pack(record) - self.offset;
        let adjustment = self.adjustment(record);
        match self.rounding {
            Rounding::Floor => scaled.div_euclid(self.multiplier) - adjustment,
            Rounding::TowardZero => (scaled - adjustment * self.multiplier) / self.multiplier,
        }
    }

    /// Write the digits carried by `value` into `digits`
    pub fn scatter_digits(&self, value: i64, digits: &mut DigitArray) {
        for &(index, place) in self.places {
            digits.set(index, value.div_euclid(place).rem_euclid(10) as u8);
        }
    }

    /// Recover this field's digits from a record
    pub fn decode(&self, record: &LogicalRecord, digits: &mut DigitArray) {
        let value = self.value(record);
        tracing::trace!(field = self.name, value, "unpacked field");
        self.scatter_digits(value, digits);
    }

    /// Re-pack this field's digits, keeping the record's adjustment bytes
    pub fn encode(&self, digits: &DigitArray, record: &mut LogicalRecord) {
        let sum: i64 = self
            .places
            .iter()
            .map(|&(index, place)| i64::from(digits.get(index)) * place)
            .sum();
        let value = (sum + self.adjustment(record)) * self.multiplier + self.offset;
        self.unpack(value, record);
    }
}

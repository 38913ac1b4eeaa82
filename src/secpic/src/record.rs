//! The sixteen logical bytes of a PIC identity record.

use std::fmt;

/// Number of data bytes in the record
pub const RECORD_LEN: usize = 16;

/// Logical index of the first adjustment byte (b12)
pub const ADJUST_A: usize = 12;

/// Logical index of the second adjustment byte (b13)
pub const ADJUST_B: usize = 13;

/// Identity record after undoing the dump's byte scrambling.
///
/// Byte groups:
/// - 0..=2: game id / serial remainder field
/// - 3..=6: game id / serial high field
/// - 7..=9: serial low field
/// - 10, 11: manufacture date (big-endian)
/// - 12, 13: per-record adjustment bytes
/// - 14, 15: unused, carried through as-is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LogicalRecord([u8; RECORD_LEN]);

impl LogicalRecord {
    pub fn new(bytes: [u8; RECORD_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; RECORD_LEN] {
        &self.0
    }

    pub fn byte(&self, index: usize) -> u8 {
        self.0[index]
    }

    pub fn set_byte(&mut self, index: usize, value: u8) {
        self.0[index] = value;
    }

    /// First adjustment byte (b12)
    pub fn adjust_a(&self) -> u8 {
        self.0[ADJUST_A]
    }

    /// Second adjustment byte (b13)
    pub fn adjust_b(&self) -> u8 {
        self.0[ADJUST_B]
    }
}

impl From<[u8; RECORD_LEN]> for LogicalRecord {
    fn from(bytes: [u8; RECORD_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for LogicalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

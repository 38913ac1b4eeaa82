//! Physical layout of the identity record inside a PIC dump.
//!
//! The PIC returns the record through a table of `RETLW k` instructions, so
//! every data byte in the dump is followed by the opcode byte (0x08). The
//! order of the sixteen entries in that table was taken from a disassembly
//! of the PIC code and is identical across all known dumps.

use crate::error::PicError;
use crate::record::{LogicalRecord, RECORD_LEN};

/// Instruction slot holding each logical byte (logical index -> slot)
pub const PHYSICAL_SLOTS: [usize; RECORD_LEN] =
    [6, 14, 3, 8, 0, 12, 7, 9, 11, 1, 15, 4, 2, 10, 5, 13];

/// Bytes per instruction slot in the dump (data byte + opcode byte)
const SLOT_WIDTH: usize = 2;

const fn last_slot() -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < RECORD_LEN {
        if PHYSICAL_SLOTS[i] > max {
            max = PHYSICAL_SLOTS[i];
        }
        i += 1;
    }
    max
}

/// Smallest dump that contains every slot
pub const MIN_IMAGE_LEN: usize = last_slot() * SLOT_WIDTH + 1;

/// Byte offset in the dump of logical byte `index`
#[inline]
pub fn physical_offset(index: usize) -> usize {
    PHYSICAL_SLOTS[index] * SLOT_WIDTH
}

/// Fail unless an image of `len` bytes holds every slot
pub fn check_len(len: u64) -> Result<(), PicError> {
    if len < MIN_IMAGE_LEN as u64 {
        return Err(PicError::TooShort {
            expected: MIN_IMAGE_LEN as u64,
            actual: len,
        });
    }
    Ok(())
}

/// Gather the logical record out of a raw dump
pub fn to_logical(raw: &[u8]) -> Result<LogicalRecord, PicError> {
    check_len(raw.len() as u64)?;

    let mut bytes = [0u8; RECORD_LEN];
    for (index, byte) in bytes.iter_mut().enumerate() {
        *byte = raw[physical_offset(index)];
    }
    Ok(LogicalRecord::new(bytes))
}

/// Scatter a logical record back into a raw dump.
///
/// Only the sixteen data positions are written.
pub fn to_physical(record: &LogicalRecord, raw: &mut [u8]) -> Result<(), PicError> {
    check_len(raw.len() as u64)?;

    for (index, &byte) in record.as_bytes().iter().enumerate() {
        raw[physical_offset(index)] = byte;
    }
    Ok(())
}

//! # secpic
//!
//! Security PIC identity record codec for Atari/Midway/Williams arcade boards.
//!
//! This library provides functionality to:
//! - Unscramble the sixteen record bytes from a PIC firmware dump
//! - Decode the game id, serial number and manufacture date
//! - Validate and apply field overrides
//! - Re-encode and write the record back, in place or to a renamed copy
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dump = Path::new("rush_pic.bin");
//!
//! // Decode only
//! let identity = secpic::inspect(dump)?;
//! println!("Game: {}", identity.game_title());
//! println!("S/N: {}", identity.digits());
//! println!("Date: {}", identity.date);
//!
//! // Give the board a new serial and write it back
//! let overrides = secpic::Overrides {
//!     serial: Some(secpic::SerialOverride::Value(1234)),
//!     ..Default::default()
//! };
//! let report = secpic::apply_edit(
//!     dump,
//!     &overrides,
//!     &secpic::EditOptions::default(),
//!     &mut rand::thread_rng(),
//! )?;
//! assert!(report.revision.outcome.is_changed());
//! # Ok(())
//! # }
//! ```

pub mod backup;
pub mod codec;
pub mod date;
pub mod digits;
pub mod error;
pub mod field;
pub mod games;
pub mod image;
pub mod layout;
pub mod policy;
pub mod record;

// Re-export commonly used items
#[doc(inline)]
pub use backup::{smart_backup, update_after_edit, BackupError};
#[doc(inline)]
pub use codec::{decode, encode, Identity};
#[doc(inline)]
pub use date::ManufactureDate;
#[doc(inline)]
pub use digits::DigitArray;
#[doc(inline)]
pub use error::PicError;
#[doc(inline)]
pub use games::{game_by_id, title_for, Game, GAMES, UNKNOWN_GAME};
#[doc(inline)]
pub use image::{
    apply_edit, copy_path, inspect, load_record, read_record, write_record, Destination,
    EditOptions, EditReport,
};
#[doc(inline)]
pub use layout::{to_logical, to_physical, MIN_IMAGE_LEN};
#[doc(inline)]
pub use policy::{Field, Outcome, Overrides, Revision, SerialOverride, ValidationError};
#[doc(inline)]
pub use record::LogicalRecord;

//! Requested field changes and their validation.
//!
//! Every override is checked on its own. A rejected value leaves that field
//! at its decoded value and is reported back; it never aborts the edit.

use rand::Rng;
use std::fmt;
use std::ops::RangeInclusive;

use crate::codec::Identity;
use crate::date::ManufactureDate;

pub const GAME_ID_RANGE: RangeInclusive<i64> = 0..=999;
pub const SERIAL_RANGE: RangeInclusive<i64> = 0..=999_999;
pub const MONTH_RANGE: RangeInclusive<i64> = 1..=12;
pub const DAY_RANGE: RangeInclusive<i64> = 0..=30;
pub const YEAR_RANGE: RangeInclusive<i64> = 1980..=2155;

/// Identity field that can be overridden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    GameId,
    Serial,
    Month,
    Day,
    Year,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::GameId => "game ID",
            Field::Serial => "serial",
            Field::Month => "month",
            Field::Day => "day",
            Field::Year => "year",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An override that was rejected and not applied
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field} entered: {value}")]
pub struct ValidationError {
    pub field: Field,
    pub value: String,
}

impl ValidationError {
    fn new(field: Field, value: impl ToString) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// Requested serial number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerialOverride {
    Value(i64),
    /// Draw a uniform serial from [`SERIAL_RANGE`]
    Random,
    /// Text that is neither a number nor `random`
    Invalid(String),
}

impl SerialOverride {
    /// Parse a decimal serial or the literal `random`
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.eq_ignore_ascii_case("random") {
            return Self::Random;
        }
        if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(value) = input.parse() {
                return Self::Value(value);
            }
        }
        Self::Invalid(input.to_string())
    }
}

/// Field overrides supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub game_id: Option<i64>,
    pub serial: Option<SerialOverride>,
    pub month: Option<i64>,
    pub day: Option<i64>,
    pub year: Option<i64>,
}

/// Result of applying overrides to a decoded identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing valid was requested; the record must not be written
    Unchanged(Identity),
    /// At least one override was accepted
    Changed { original: Identity, updated: Identity },
}

impl Outcome {
    /// Identity as decoded from the dump
    pub fn original(&self) -> &Identity {
        match self {
            Outcome::Unchanged(identity) => identity,
            Outcome::Changed { original, .. } => original,
        }
    }

    /// Identity after the edit
    pub fn identity(&self) -> &Identity {
        match self {
            Outcome::Unchanged(identity) => identity,
            Outcome::Changed { updated, .. } => updated,
        }
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, Outcome::Changed { .. })
    }
}

/// Outcome plus every override that was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    pub outcome: Outcome,
    pub rejected: Vec<ValidationError>,
}

/// Validate `value` against `range`, narrowing to the field's type
fn accept<T: TryFrom<i64>>(
    field: Field,
    value: i64,
    range: &RangeInclusive<i64>,
    rejected: &mut Vec<ValidationError>,
) -> Option<T> {
    if range.contains(&value) {
        if let Ok(v) = T::try_from(value) {
            tracing::debug!(%field, value, "override accepted");
            return Some(v);
        }
    }
    rejected.push(ValidationError::new(field, value));
    None
}

impl Overrides {
    pub fn is_empty(&self) -> bool {
        self.game_id.is_none()
            && self.serial.is_none()
            && self.month.is_none()
            && self.day.is_none()
            && self.year.is_none()
    }

    /// Apply the overrides to `decoded`.
    ///
    /// `rng` is only used for [`SerialOverride::Random`].
    pub fn apply<R: Rng>(&self, decoded: &Identity, rng: &mut R) -> Revision {
        let mut rejected = Vec::new();
        let mut updated = *decoded;
        let mut changed = false;

        if let Some(value) = self.game_id {
            if let Some(game_id) = accept(Field::GameId, value, &GAME_ID_RANGE, &mut rejected) {
                updated.game_id = game_id;
                changed = true;
            }
        }

        match &self.serial {
            Some(SerialOverride::Value(value)) => {
                if let Some(serial) = accept(Field::Serial, *value, &SERIAL_RANGE, &mut rejected) {
                    updated.serial_number = serial;
                    changed = true;
                }
            }
            Some(SerialOverride::Random) => {
                let (low, high) = (*SERIAL_RANGE.start() as u32, *SERIAL_RANGE.end() as u32);
                updated.serial_number = rng.gen_range(low..=high);
                tracing::debug!(serial = updated.serial_number, "random serial drawn");
                changed = true;
            }
            Some(SerialOverride::Invalid(text)) => {
                rejected.push(ValidationError::new(Field::Serial, text));
            }
            None => {}
        }

        let date = &mut updated.date;
        if let Some(value) = self.month {
            if let Some(month) = accept(Field::Month, value, &MONTH_RANGE, &mut rejected) {
                date.month = month;
                changed = true;
            }
        }
        if let Some(value) = self.day {
            if let Some(day) = accept(Field::Day, value, &DAY_RANGE, &mut rejected) {
                date.day = day;
                changed = true;
            }
        }
        if let Some(value) = self.year {
            if let Some(year) = accept(Field::Year, value, &YEAR_RANGE, &mut rejected) {
                date.year = year;
                changed = true;
            }
        }

        let outcome = if changed {
            updated.date = encodable_date(updated.date);
            Outcome::Changed {
                original: *decoded,
                updated,
            }
        } else {
            Outcome::Unchanged(*decoded)
        };
        Revision { outcome, rejected }
    }
}

/// Clamp a decoded date into the encodable range.
///
/// Raw day counts above 65471 decode to year 2156; they cannot be written
/// back, so an edit that keeps such a date stores 2155 instead.
pub fn encodable_date(date: ManufactureDate) -> ManufactureDate {
    let max_year = *YEAR_RANGE.end() as u16;
    ManufactureDate {
        year: date.year.min(max_year),
        ..date
    }
}

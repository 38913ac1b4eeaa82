//! Reading and writing the identity record of a PIC dump on disk.
//!
//! Only the sixteen data positions are ever read or written; the length of
//! the stream is checked first so a short dump is rejected untouched.

use rand::Rng;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::backup;
use crate::codec::{self, Identity};
use crate::error::PicError;
use crate::layout::{check_len, physical_offset};
use crate::policy::{Overrides, Revision};
use crate::record::{LogicalRecord, RECORD_LEN};

/// Where an edited record is written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Destination {
    /// Rewrite the source dump
    #[default]
    InPlace,
    /// Write a renamed copy next to the source; the source is left alone
    NewCopy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditOptions {
    pub destination: Destination,
    /// Back up the dump before an in-place write
    pub backup: bool,
}

/// What an edit did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditReport {
    pub revision: Revision,
    /// File that received the new record, if anything was written
    pub written_to: Option<PathBuf>,
    pub backup_created: bool,
}

fn ensure_len<S: Seek>(stream: &mut S) -> Result<(), PicError> {
    let len = stream.seek(SeekFrom::End(0))?;
    check_len(len)
}

/// Read the logical record from a dump
pub fn read_record<R: Read + Seek>(reader: &mut R) -> Result<LogicalRecord, PicError> {
    ensure_len(reader)?;

    let mut bytes = [0u8; RECORD_LEN];
    for (index, byte) in bytes.iter_mut().enumerate() {
        reader.seek(SeekFrom::Start(physical_offset(index) as u64))?;
        let mut buf = [0u8; 1];
        reader.read_exact(&mut buf)?;
        *byte = buf[0];
    }
    Ok(LogicalRecord::new(bytes))
}

/// Write the logical record into a dump
pub fn write_record<W: Write + Seek>(
    writer: &mut W,
    record: &LogicalRecord,
) -> Result<(), PicError> {
    ensure_len(writer)?;

    for (index, &byte) in record.as_bytes().iter().enumerate() {
        writer.seek(SeekFrom::Start(physical_offset(index) as u64))?;
        writer.write_all(&[byte])?;
    }
    writer.flush()?;
    Ok(())
}

/// Read the logical record of the dump at `path`
pub fn load_record(path: &Path) -> Result<LogicalRecord, PicError> {
    let mut file = File::open(path)?;
    read_record(&mut file)
}

/// Decode the dump at `path` without modifying it
pub fn inspect(path: &Path) -> Result<Identity, PicError> {
    Ok(codec::decode(&load_record(path)?))
}

/// Name of the copy written for `identity`:
/// `<stem>_<digits>_<month>_<day>_<year>.<ext>` beside `source`
pub fn copy_path(source: &Path, identity: &Identity) -> PathBuf {
    let date = identity.date;
    let mut name = source.file_stem().unwrap_or_default().to_os_string();
    name.push(format!(
        "_{}_{}_{}_{}",
        identity.digits(),
        date.month,
        date.day,
        date.year
    ));
    if let Some(ext) = source.extension() {
        name.push(".");
        name.push(ext);
    }
    source.with_file_name(name)
}

fn create_copy(source: &mut File, dest: &Path) -> Result<File, PicError> {
    let mut copy = OpenOptions::new()
        .read(true)
        .write(true)
        .create_new(true)
        .open(dest)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => PicError::DestinationExists(dest.to_path_buf()),
            _ => PicError::Io(e),
        })?;
    source.seek(SeekFrom::Start(0))?;
    io::copy(source, &mut copy)?;
    Ok(copy)
}

/// Decode the dump at `path`, apply `overrides`, and write the re-encoded
/// record when at least one override was accepted.
pub fn apply_edit<R: Rng>(
    path: &Path,
    overrides: &Overrides,
    options: &EditOptions,
    rng: &mut R,
) -> Result<EditReport, PicError> {
    let writable = !overrides.is_empty() && options.destination == Destination::InPlace;
    let mut file = OpenOptions::new().read(true).write(writable).open(path)?;

    let source = read_record(&mut file)?;
    let revision = overrides.apply(&codec::decode(&source), rng);

    if !revision.outcome.is_changed() {
        return Ok(EditReport {
            revision,
            written_to: None,
            backup_created: false,
        });
    }

    let updated = *revision.outcome.identity();
    let record = codec::encode(&updated, &source);

    let (written_to, backup_created) = match options.destination {
        Destination::InPlace => {
            let backup_created = options.backup && backup::smart_backup(path)?;
            write_record(&mut file, &record)?;
            drop(file);
            if options.backup {
                backup::update_after_edit(path)?;
            }
            (path.to_path_buf(), backup_created)
        }
        Destination::NewCopy => {
            let dest = copy_path(path, &updated);
            let mut copy = create_copy(&mut file, &dest)?;
            write_record(&mut copy, &record)?;
            (dest, false)
        }
    };

    tracing::info!(path = %written_to.display(), "wrote identity record");
    Ok(EditReport {
        revision,
        written_to: Some(written_to),
        backup_created,
    })
}

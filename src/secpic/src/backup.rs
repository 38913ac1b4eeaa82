//! Hash-tracked backups taken before an in-place edit.
//!
//! `<dump>.bak` holds the untouched image and `<dump>.bak.json` records the
//! SHA-256 of that image and of the most recent edit. Re-running an edit on a
//! dump we already modified keeps the first backup; a dump that matches
//! neither hash was replaced by the user and gets a fresh backup.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Sidecar contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupManifest {
    /// Hash of the dump when the backup was taken
    pub original_hash: String,
    /// Hash of the dump after our last write
    pub last_edit_hash: String,
}

impl BackupManifest {
    fn fresh(hash: String) -> Self {
        Self {
            original_hash: hash.clone(),
            last_edit_hash: hash,
        }
    }

    fn tracks(&self, hash: &str) -> bool {
        self.original_hash == hash || self.last_edit_hash == hash
    }
}

/// Locations of the backup copy and its sidecar for one dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupPaths {
    pub copy: PathBuf,
    pub manifest: PathBuf,
}

impl BackupPaths {
    pub fn for_dump(dump: &Path) -> Self {
        let with_suffix = |suffix: &str| {
            let mut name = OsString::from(dump.as_os_str());
            name.push(suffix);
            PathBuf::from(name)
        };
        Self {
            copy: with_suffix(".bak"),
            manifest: with_suffix(".bak.json"),
        }
    }

    fn read_manifest(&self) -> Result<Option<BackupManifest>, BackupError> {
        if !self.manifest.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.manifest)?;
        Ok(Some(serde_json::from_str(&data)?))
    }

    fn write_manifest(&self, manifest: &BackupManifest) -> Result<(), BackupError> {
        fs::write(&self.manifest, serde_json::to_string_pretty(manifest)?)?;
        Ok(())
    }
}

/// SHA-256 of a file as lowercase hex
pub fn hash_file(path: &Path) -> Result<String, BackupError> {
    let data = fs::read(path)?;
    Ok(hex::encode(Sha256::digest(&data)))
}

/// Whether `dump` needs a new backup.
///
/// An existing backup without a sidecar is never overwritten.
pub fn needs_backup(dump: &Path, paths: &BackupPaths) -> Result<bool, BackupError> {
    if !paths.copy.exists() {
        return Ok(true);
    }
    let Some(manifest) = paths.read_manifest()? else {
        return Ok(false);
    };
    Ok(!manifest.tracks(&hash_file(dump)?))
}

/// Copy `dump` to its backup location and start a new sidecar
pub fn create_backup(dump: &Path, paths: &BackupPaths) -> Result<(), BackupError> {
    fs::copy(dump, &paths.copy)?;
    paths.write_manifest(&BackupManifest::fresh(hash_file(dump)?))?;
    tracing::info!(backup = %paths.copy.display(), "created backup");
    Ok(())
}

/// Record the dump's current hash as our latest edit
pub fn update_after_edit(dump: &Path) -> Result<(), BackupError> {
    let paths = BackupPaths::for_dump(dump);
    let hash = hash_file(dump)?;
    let mut manifest = paths
        .read_manifest()?
        .unwrap_or_else(|| BackupManifest::fresh(hash.clone()));
    manifest.last_edit_hash = hash;
    paths.write_manifest(&manifest)
}

/// Back up `dump` if needed. Returns true when a new backup was written.
pub fn smart_backup(dump: &Path) -> Result<bool, BackupError> {
    let paths = BackupPaths::for_dump(dump);
    if needs_backup(dump, &paths)? {
        create_backup(dump, &paths)?;
        Ok(true)
    } else {
        tracing::debug!(backup = %paths.copy.display(), "keeping existing backup");
        Ok(false)
    }
}

//! File-backed configuration store.
//!
//! Each record lives in its own file named `<name>.<suffix>` directly inside
//! the storage root:
//!
//! ```text
//! <storage root>/
//!   wg0.conf       <- record "wg0"
//!   office.conf    <- record "office"
//!   notes.txt      <- not managed: never listed, never touched
//! ```
//!
//! The storage root is injected by the host. This module never creates it and
//! never reads a global location, so tests can point a store at a throwaway
//! directory.
//!
//! # Write semantics
//!
//! `create` opens with `create_new`, which fails atomically when the file is
//! already there, so an existing record cannot be overwritten by a racing
//! `create`. `save` opens an existing file with `truncate`, so shorter content
//! never leaves a tail of the previous content behind. Neither write is
//! crash-atomic: if `write_all` fails halfway the file holds a partial record.

use std::collections::HashSet;
use std::fs::{self, DirEntry, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::{ConfigStore, StoreError};
use crate::domain::name::{NameError, RecordName};

/// Suffix of managed configuration files when none is given.
pub const DEFAULT_SUFFIX: &str = "conf";

/// Longest file name accepted by common filesystems (ext4, APFS, NTFS).
const MAX_FILE_NAME_BYTES: usize = 255;

/// [`ConfigStore`] keeping one file per record inside a storage root.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    root: PathBuf,
    /// The suffix including its leading dot, e.g. `".conf"`.
    extension: String,
}

impl FileConfigStore {
    /// Creates a store managing `<name>.conf` files in `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: format!(".{DEFAULT_SUFFIX}"),
        }
    }

    /// Creates a store managing `<name>.<suffix>` files in `root`.
    ///
    /// A single leading dot on `suffix` is ignored, so `"cfg"` and `".cfg"`
    /// are equivalent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidSuffix`] if the suffix is empty or would
    /// not be a safe file name component.
    pub fn with_suffix(root: impl Into<PathBuf>, suffix: &str) -> Result<Self, StoreError> {
        let bare = suffix.strip_prefix('.').unwrap_or(suffix);
        if RecordName::new(bare).is_err() {
            return Err(StoreError::InvalidSuffix(suffix.to_string()));
        }
        Ok(Self {
            root: root.into(),
            extension: format!(".{bare}"),
        })
    }

    /// The directory holding the managed files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The managed suffix without its leading dot.
    pub fn suffix(&self) -> &str {
        &self.extension[1..]
    }

    /// Resolves the file backing `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidName`] if `name` is not a valid
    /// [`RecordName`] or the resulting file name is too long.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, StoreError> {
        let invalid = |source: NameError| StoreError::InvalidName {
            name: name.to_string(),
            source,
        };

        let record = RecordName::new(name).map_err(invalid)?;
        let file_name = format!("{record}{}", self.extension);
        if file_name.len() > MAX_FILE_NAME_BYTES {
            return Err(invalid(NameError::TooLong {
                max: MAX_FILE_NAME_BYTES - self.extension.len(),
            }));
        }
        Ok(self.root.join(file_name))
    }

    /// Returns the record name for `entry`, or `None` if the entry is not a
    /// managed configuration file.
    fn managed_name(&self, entry: &DirEntry) -> Option<String> {
        let file_name = entry.file_name().into_string().ok()?;
        let stem = file_name.strip_suffix(self.extension.as_str())?;

        if RecordName::new(stem).is_err() {
            trace!(file = %file_name, "skipping entry with unusable name");
            return None;
        }
        if !entry.path().is_file() {
            trace!(file = %file_name, "skipping entry that is not a regular file");
            return None;
        }
        Some(stem.to_string())
    }
}

/// Maps an open/read failure to `NotFound` when the file is missing.
fn missing_or_io(name: &str, path: PathBuf, source: io::Error) -> StoreError {
    if source.kind() == io::ErrorKind::NotFound {
        StoreError::NotFound {
            name: name.to_string(),
        }
    } else {
        StoreError::Io { path, source }
    }
}

fn write_content(mut file: File, path: PathBuf, content: &str) -> Result<(), StoreError> {
    file.write_all(content.as_bytes())
        .map_err(|source| StoreError::Io { path, source })
}

impl ConfigStore for FileConfigStore {
    fn create(&self, name: &str, content: String) -> Result<String, StoreError> {
        let path = self.path_for(name)?;
        debug!(name, path = %path.display(), "creating configuration");

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|source| {
                if source.kind() == io::ErrorKind::AlreadyExists {
                    StoreError::Conflict {
                        name: name.to_string(),
                    }
                } else {
                    StoreError::Io {
                        path: path.clone(),
                        source,
                    }
                }
            })?;

        write_content(file, path, &content)?;
        Ok(content)
    }

    fn save(&self, name: &str, content: String) -> Result<String, StoreError> {
        debug!(name, "requested save for configuration");
        let path = self.path_for(name)?;

        if !path.is_file() {
            return Err(StoreError::NotFound {
                name: name.to_string(),
            });
        }

        // No `create(true)`: if the file vanished since the check, fail
        // rather than resurrect the record.
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(|source| missing_or_io(name, path.clone(), source))?;

        write_content(file, path, &content)?;
        Ok(content)
    }

    fn load(&self, name: &str) -> Result<String, StoreError> {
        let path = self.path_for(name)?;

        // A directory under a managed name is not a record.
        if path.is_dir() {
            return Err(StoreError::NotFound {
                name: name.to_string(),
            });
        }
        fs::read_to_string(&path).map_err(|source| missing_or_io(name, path, source))
    }

    fn delete(&self, name: &str) -> Result<(), StoreError> {
        let path = self.path_for(name)?;
        debug!(name, path = %path.display(), "deleting configuration");
        fs::remove_file(&path).map_err(|source| StoreError::Io { path, source })
    }

    fn enumerate(&self) -> Result<HashSet<String>, StoreError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(root = %self.root.display(), "storage root absent, no configurations");
                return Ok(HashSet::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.root.clone(),
                    source,
                })
            }
        };

        let mut names = HashSet::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: self.root.clone(),
                source,
            })?;
            if let Some(name) = self.managed_name(&entry) {
                names.insert(name);
            }
        }
        Ok(names)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

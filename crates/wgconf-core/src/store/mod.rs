//! Configuration store: the persistence contract and its implementations.
//!
//! # Sub-modules
//!
//! - **`file`**  – [`file::FileConfigStore`], one `<name>.<suffix>` file per
//!   record inside a storage root.
//! - **`typed`** – [`typed::TypedConfigStore`], which runs a
//!   [`ConfigCodec`](crate::ConfigCodec) over any [`ConfigStore`].
//!
//! # Concurrency
//!
//! Stores perform no locking. Two writers racing on the same name interleave
//! in whatever order the platform allows; callers that may touch one name from
//! several places must serialize those calls themselves.

use std::collections::HashSet;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::name::NameError;

pub mod file;
pub mod typed;

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `create` was called for a name that already has a record.
    #[error("configuration {name:?} already exists")]
    Conflict { name: String },

    /// `save` or `load` was called for a name that has no record.
    #[error("configuration {name:?} not found")]
    NotFound { name: String },

    /// The name cannot be mapped to a file inside the storage root.
    #[error("invalid configuration name {name:?}: {source}")]
    InvalidName {
        name: String,
        #[source]
        source: NameError,
    },

    /// The managed file suffix is empty or contains unsafe characters.
    #[error("invalid configuration file suffix {0:?}")]
    InvalidSuffix(String),

    /// A file system I/O error occurred.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Persistence contract for named configuration records.
///
/// Every call acts on exactly one record and goes straight to the backing
/// storage; implementations keep no cache.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore: Send + Sync {
    /// Creates a new record and returns the content that was written.
    ///
    /// # Errors
    ///
    /// [`StoreError::Conflict`] if `name` already exists; [`StoreError::Io`]
    /// if the write fails, in which case the record may be left partial.
    fn create(&self, name: &str, content: String) -> Result<String, StoreError>;

    /// Replaces the content of an existing record and returns it.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if `name` does not exist (a record is never
    /// created here); [`StoreError::Io`] if the write fails.
    fn save(&self, name: &str, content: String) -> Result<String, StoreError>;

    /// Reads the full content of a record.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if `name` does not exist; [`StoreError::Io`]
    /// if the read fails or the content is not UTF-8.
    fn load(&self, name: &str) -> Result<String, StoreError>;

    /// Removes a record.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] if removal fails, including when the record is
    /// already absent.
    fn delete(&self, name: &str) -> Result<(), StoreError>;

    /// Returns the names of all stored records, in no particular order.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] if the backing storage exists but cannot be listed.
    fn enumerate(&self) -> Result<HashSet<String>, StoreError>;
}

//! Record name validation.
//!
//! A record name becomes the stem of a file name (`<name>.<suffix>`), so it
//! must never be able to address anything outside the storage root.

use std::fmt;

use thiserror::Error;

/// Reasons a string cannot be used as a record name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    /// The name is the empty string.
    #[error("name is empty")]
    Empty,

    /// The name is `.` or `..`.
    #[error("name refers to a directory entry")]
    DotEntry,

    /// The name contains a character that is unsafe in a file name.
    #[error("name contains forbidden character {0:?}")]
    ForbiddenChar(char),

    /// The file name built from this name would exceed the platform limit.
    ///
    /// Only stores that append a suffix can detect this, so
    /// [`RecordName::new`] never returns it.
    #[error("name is longer than {max} bytes")]
    TooLong { max: usize },
}

/// A record name that is safe to use as a file name stem.
///
/// Rejects the empty string, `.` and `..`, path separators (`/` and `\`),
/// the Windows-reserved characters `: * ? " < > |`, NUL and every other
/// control character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordName(String);

impl RecordName {
    /// Validates `name` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the first [`NameError`] that applies to `name`.
    pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
        let name = name.into();
        validate(&name)?;
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name and returns the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

fn validate(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name == "." || name == ".." {
        return Err(NameError::DotEntry);
    }
    match name.chars().find(|&c| is_forbidden(c)) {
        Some(c) => Err(NameError::ForbiddenChar(c)),
        None => Ok(()),
    }
}

/// Characters Windows refuses in file names; `:` would also open an NTFS
/// alternate data stream. Rejected everywhere so names stay portable.
const RESERVED_CHARS: &[char] = &[':', '*', '?', '"', '<', '>', '|'];

fn is_forbidden(c: char) -> bool {
    c == '/' || c == '\\' || c.is_control() || RESERVED_CHARS.contains(&c)
}

impl TryFrom<&str> for RecordName {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for RecordName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for RecordName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

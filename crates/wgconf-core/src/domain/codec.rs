//! Serialization collaborator for stored configurations.
//!
//! The store itself only moves text. A [`ConfigCodec`] turns a parsed
//! configuration into that text and back. Whatever a codec produces must
//! survive `parse(serialize(config)) == config`, otherwise a configuration
//! that was saved cannot be loaded again.
//!
//! [`TomlCodec`] covers any `serde` type. Hosts with their own text grammar
//! implement the trait directly and report failures through
//! [`CodecError::Invalid`].

use std::fmt;
use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Error type for converting between configurations and text.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The TOML text could not be parsed into a configuration.
    #[error("failed to parse configuration TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized to TOML.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A codec-specific validation failure.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Converts configurations to and from their stored text form.
pub trait ConfigCodec {
    /// The parsed configuration type.
    type Config;

    /// Renders `config` as text.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the configuration cannot be represented.
    fn serialize(&self, config: &Self::Config) -> Result<String, CodecError>;

    /// Parses `text` into a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if `text` is not a valid configuration.
    fn parse(&self, text: &str) -> Result<Self::Config, CodecError>;
}

/// A [`ConfigCodec`] storing any `serde` type as pretty-printed TOML.
pub struct TomlCodec<T> {
    _config: PhantomData<fn() -> T>,
}

impl<T> TomlCodec<T> {
    pub fn new() -> Self {
        Self {
            _config: PhantomData,
        }
    }
}

impl<T> Default for TomlCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TomlCodec<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TomlCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TomlCodec").finish()
    }
}

impl<T> ConfigCodec for TomlCodec<T>
where
    T: Serialize + DeserializeOwned,
{
    type Config = T;

    fn serialize(&self, config: &T) -> Result<String, CodecError> {
        Ok(toml::to_string_pretty(config)?)
    }

    fn parse(&self, text: &str) -> Result<T, CodecError> {
        Ok(toml::from_str(text)?)
    }
}

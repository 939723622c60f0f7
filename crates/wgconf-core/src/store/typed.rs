//! Typed adapter: parsed configurations on top of a text store.
//!
//! [`TypedConfigStore`] pairs any [`ConfigStore`] with a [`ConfigCodec`].
//! Configurations are serialized before `create`/`save` reach the store, and
//! parsed after `load` returns, so a codec failure on the way in never touches
//! the backing storage.

use std::collections::HashSet;

use thiserror::Error;

use super::{ConfigStore, StoreError};
use crate::domain::codec::{CodecError, ConfigCodec};

/// Error type for [`TypedConfigStore`] operations.
#[derive(Debug, Error)]
pub enum TypedStoreError {
    /// The underlying store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The configuration could not be converted to or from text.
    #[error("configuration {name:?}: {source}")]
    Codec {
        name: String,
        #[source]
        source: CodecError,
    },
}

/// A [`ConfigStore`] that reads and writes parsed configurations.
#[derive(Debug, Clone)]
pub struct TypedConfigStore<S, C> {
    store: S,
    codec: C,
}

impl<S, C> TypedConfigStore<S, C>
where
    S: ConfigStore,
    C: ConfigCodec,
{
    pub fn new(store: S, codec: C) -> Self {
        Self { store, codec }
    }

    /// The underlying text store.
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Serializes `config` and creates a new record from it.
    ///
    /// Returns `config` back to the caller once it is on disk.
    ///
    /// # Errors
    ///
    /// [`TypedStoreError::Codec`] if serialization fails (nothing is written),
    /// otherwise whatever [`ConfigStore::create`] reports.
    pub fn create(&self, name: &str, config: C::Config) -> Result<C::Config, TypedStoreError> {
        let text = self.serialize(name, &config)?;
        self.store.create(name, text)?;
        Ok(config)
    }

    /// Serializes `config` and replaces an existing record with it.
    ///
    /// # Errors
    ///
    /// [`TypedStoreError::Codec`] if serialization fails (nothing is written),
    /// otherwise whatever [`ConfigStore::save`] reports.
    pub fn save(&self, name: &str, config: C::Config) -> Result<C::Config, TypedStoreError> {
        let text = self.serialize(name, &config)?;
        self.store.save(name, text)?;
        Ok(config)
    }

    /// Loads and parses a record.
    ///
    /// # Errors
    ///
    /// Whatever [`ConfigStore::load`] reports, or [`TypedStoreError::Codec`]
    /// if the stored text does not parse.
    pub fn load(&self, name: &str) -> Result<C::Config, TypedStoreError> {
        let text = self.store.load(name)?;
        self.codec
            .parse(&text)
            .map_err(|source| TypedStoreError::Codec {
                name: name.to_string(),
                source,
            })
    }

    /// Removes a record. See [`ConfigStore::delete`].
    pub fn delete(&self, name: &str) -> Result<(), TypedStoreError> {
        Ok(self.store.delete(name)?)
    }

    /// Lists stored record names. See [`ConfigStore::enumerate`].
    pub fn enumerate(&self) -> Result<HashSet<String>, TypedStoreError> {
        Ok(self.store.enumerate()?)
    }

    fn serialize(&self, name: &str, config: &C::Config) -> Result<String, TypedStoreError> {
        self.codec
            .serialize(config)
            .map_err(|source| TypedStoreError::Codec {
                name: name.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::codec::TomlCodec;
    use crate::store::MockConfigStore;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Peer {
        public_key: String,
        endpoint: String,
    }

    fn peer() -> Peer {
        Peer {
            public_key: "xTIBA5rboUvnH4htodjb6e697QjLERt1NAB4mZqp8Dg=".to_string(),
            endpoint: "vpn.example.com:51820".to_string(),
        }
    }

    /// Codec that refuses every configuration.
    struct RejectingCodec;

    impl ConfigCodec for RejectingCodec {
        type Config = Peer;

        fn serialize(&self, _config: &Peer) -> Result<String, CodecError> {
            Err(CodecError::Invalid("missing interface section".to_string()))
        }

        fn parse(&self, _text: &str) -> Result<Peer, CodecError> {
            Err(CodecError::Invalid("missing interface section".to_string()))
        }
    }

    #[test]
    fn test_create_passes_serialized_text_to_store() {
        // Arrange
        let mut mock = MockConfigStore::new();
        mock.expect_create().times(1).returning(|name, content| {
            assert_eq!(name, "wg0");
            assert!(content.contains("endpoint = \"vpn.example.com:51820\""));
            Ok(content)
        });
        let store = TypedConfigStore::new(mock, TomlCodec::<Peer>::new());

        // Act
        let returned = store.create("wg0", peer()).unwrap();

        // Assert
        assert_eq!(returned, peer());
    }

    #[test]
    fn test_create_codec_failure_never_reaches_store() {
        // Arrange: no expectations, so any store call panics
        let mock = MockConfigStore::new();
        let store = TypedConfigStore::new(mock, RejectingCodec);

        // Act
        let result = store.create("wg0", peer());

        // Assert
        assert!(matches!(
            result,
            Err(TypedStoreError::Codec {
                source: CodecError::Invalid(_),
                ..
            })
        ));
    }

    #[test]
    fn test_save_propagates_not_found_from_store() {
        let mut mock = MockConfigStore::new();
        mock.expect_save().times(1).returning(|name, _| {
            Err(StoreError::NotFound {
                name: name.to_string(),
            })
        });
        let store = TypedConfigStore::new(mock, TomlCodec::<Peer>::new());

        let result = store.save("wg0", peer());

        assert!(matches!(
            result,
            Err(TypedStoreError::Store(StoreError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_load_parses_stored_text() {
        // Arrange
        let text = TomlCodec::<Peer>::new().serialize(&peer()).unwrap();
        let mut mock = MockConfigStore::new();
        mock.expect_load().times(1).returning(move |_| Ok(text.clone()));
        let store = TypedConfigStore::new(mock, TomlCodec::<Peer>::new());

        // Act
        let loaded = store.load("wg0").unwrap();

        // Assert
        assert_eq!(loaded, peer());
    }

    #[test]
    fn test_load_reports_unparseable_text_with_record_name() {
        let mut mock = MockConfigStore::new();
        mock.expect_load()
            .returning(|_| Ok("[[[ not valid toml".to_string()));
        let store = TypedConfigStore::new(mock, TomlCodec::<Peer>::new());

        let err = store.load("office").unwrap_err();

        assert!(matches!(
            err,
            TypedStoreError::Codec { ref name, source: CodecError::Parse(_) } if name == "office"
        ));
        assert!(err.to_string().contains("\"office\""));
    }

    #[test]
    fn test_delete_and_enumerate_delegate_to_store() {
        let mut mock = MockConfigStore::new();
        mock.expect_delete().times(1).returning(|_| Ok(()));
        mock.expect_enumerate()
            .times(1)
            .returning(|| Ok(HashSet::from(["wg1".to_string()])));
        let store = TypedConfigStore::new(mock, TomlCodec::<Peer>::new());

        store.delete("wg0").unwrap();
        let names = store.enumerate().unwrap();

        assert_eq!(names, HashSet::from(["wg1".to_string()]));
    }
}

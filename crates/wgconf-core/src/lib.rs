//! # wgconf-core
//!
//! Persistence layer for named tunnel configurations.
//!
//! Every configuration is a UTF-8 text record identified by a unique name and
//! stored as one `<name>.conf` file inside a storage root supplied by the host.
//! The filesystem is the only source of truth: nothing is cached in memory, so
//! every read reflects what is on disk at the time of the call.
//!
//! # Module overview
//!
//! - **`domain`** – Types with no filesystem access: the validated
//!   [`RecordName`] and the [`ConfigCodec`] serialization collaborator.
//!
//! - **`store`** – The [`ConfigStore`] trait, the file-backed
//!   [`FileConfigStore`], and [`TypedConfigStore`], which layers a codec over
//!   any text store so callers can work with parsed configurations.
//!
//! # Example
//!
//! ```no_run
//! use wgconf_core::{ConfigStore, FileConfigStore};
//!
//! let store = FileConfigStore::new("/var/lib/wgconf");
//! store.create("wg0", "[Interface]\n".to_string())?;
//! assert!(store.enumerate()?.contains("wg0"));
//! # Ok::<(), wgconf_core::StoreError>(())
//! ```

pub mod domain;
pub mod store;

pub use domain::codec::{CodecError, ConfigCodec, TomlCodec};
pub use domain::name::{NameError, RecordName};
pub use store::file::{FileConfigStore, DEFAULT_SUFFIX};
pub use store::typed::{TypedConfigStore, TypedStoreError};
pub use store::{ConfigStore, StoreError};

//! Domain types for the configuration store.
//!
//! Nothing in this module touches the filesystem, so everything here can be
//! unit-tested without a storage root.

/// Serialization collaborator between parsed configurations and stored text.
pub mod codec;

/// Validated record names.
pub mod name;

//! Storage location resolution for the command-line front end.
//!
//! The library never decides where configurations live; this module does it
//! for the binary.  An explicit `--dir` / `WGCONF_DIR` wins, otherwise the
//! platform data directory is used:
//!
//! - Windows:  `%APPDATA%\WgConf`
//! - Linux:    `$XDG_DATA_HOME/wgconf` or `~/.local/share/wgconf`
//! - macOS:    `~/Library/Application Support/WgConf`

use std::path::PathBuf;

use thiserror::Error;
use wgconf_core::{FileConfigStore, StoreError};

/// Error type for resolving the CLI configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No `--dir` was given and the platform data directory could not be
    /// determined from the environment.
    #[error("could not determine platform data directory; pass --dir or set WGCONF_DIR")]
    NoPlatformDataDir,

    /// The storage root could not be created.
    #[error("could not create storage directory {path}: {source}")]
    CreateRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where the CLI keeps configurations and which files it manages there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Directory holding the managed files.
    pub storage_root: PathBuf,
    /// Managed file suffix, without the leading dot.
    pub suffix: String,
}

impl CliConfig {
    /// Builds the configuration from parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoPlatformDataDir`] when `dir` is `None` and no
    /// platform default exists.
    pub fn resolve(dir: Option<PathBuf>, suffix: String) -> Result<Self, ConfigError> {
        let storage_root = match dir {
            Some(dir) => dir,
            None => default_storage_root()?,
        };
        Ok(Self {
            storage_root,
            suffix,
        })
    }

    /// Opens a [`FileConfigStore`] over the resolved location.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidSuffix`] for an unusable suffix.
    pub fn open_store(&self) -> Result<FileConfigStore, StoreError> {
        FileConfigStore::with_suffix(&self.storage_root, &self.suffix)
    }

    /// Creates the storage root if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CreateRoot`] if the directory cannot be created.
    pub fn ensure_storage_root(&self) -> Result<(), ConfigError> {
        std::fs::create_dir_all(&self.storage_root).map_err(|source| ConfigError::CreateRoot {
            path: self.storage_root.clone(),
            source,
        })
    }
}

/// Resolves the platform default storage root.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformDataDir`] when the base directory cannot
/// be determined from the environment.
pub fn default_storage_root() -> Result<PathBuf, ConfigError> {
    platform_data_dir().ok_or(ConfigError::NoPlatformDataDir)
}

fn platform_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("WgConf"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".local").join("share"))
            })?;
        Some(base.join("wgconf"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("WgConf")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Subcommand implementations.
//!
//! Each command takes the store and its output sink as parameters so tests
//! can run them against a temporary directory and capture what they print.

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::Context;
use tracing::info;
use wgconf_core::{ConfigStore, RecordName, StoreError};

/// Writes all stored names in sorted order.
pub fn list<S, W>(store: &S, json: bool, out: &mut W) -> anyhow::Result<()>
where
    S: ConfigStore + ?Sized,
    W: Write,
{
    let mut names: Vec<String> = store.enumerate()?.into_iter().collect();
    names.sort();

    if json {
        serde_json::to_writer(&mut *out, &names)?;
        writeln!(out)?;
    } else {
        for name in &names {
            writeln!(out, "{name}")?;
        }
    }
    Ok(())
}

/// Writes a configuration's content verbatim.
pub fn show<S, W>(store: &S, name: &str, out: &mut W) -> anyhow::Result<()>
where
    S: ConfigStore + ?Sized,
    W: Write,
{
    let content = store.load(name)?;
    out.write_all(content.as_bytes())?;
    Ok(())
}

pub fn create<S>(store: &S, name: &str, content: String) -> anyhow::Result<()>
where
    S: ConfigStore + ?Sized,
{
    let written = store.create(name, content)?;
    info!(name, bytes = written.len(), "configuration created");
    Ok(())
}

pub fn save<S>(store: &S, name: &str, content: String) -> anyhow::Result<()>
where
    S: ConfigStore + ?Sized,
{
    let written = store.save(name, content)?;
    info!(name, bytes = written.len(), "configuration saved");
    Ok(())
}

/// Deletes a configuration and returns whether anything was removed.
///
/// With `if_exists`, a missing configuration is not an error. An invalid
/// name always is.
pub fn delete<S>(store: &S, name: &str, if_exists: bool) -> anyhow::Result<bool>
where
    S: ConfigStore + ?Sized,
{
    check_name(name)?;
    if if_exists && !store.enumerate()?.contains(name) {
        info!(name, "configuration absent, nothing to delete");
        return Ok(false);
    }
    store.delete(name)?;
    info!(name, "configuration deleted");
    Ok(true)
}

/// Rejects names no store could hold, before any other work is done.
pub fn check_name(name: &str) -> Result<(), StoreError> {
    RecordName::new(name)
        .map(|_| ())
        .map_err(|source| StoreError::InvalidName {
            name: name.to_string(),
            source,
        })
}

/// Reads new configuration content from `file`, or from `stdin` when `None`.
pub fn read_content<R: Read>(file: Option<&Path>, stdin: R) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration from {}", path.display())),
        None => {
            let mut content = String::new();
            io::BufReader::new(stdin)
                .read_to_string(&mut content)
                .context("failed to read configuration from stdin")?;
            Ok(content)
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

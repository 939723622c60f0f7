//! wgconf-cli library entry point.
//!
//! Re-exports all public modules so that the binary entry point in `main.rs`
//! and the unit tests share the same module tree.
//!
//! - **`cli`**      – `clap` argument definitions.
//! - **`config`**   – Storage root and suffix resolution.
//! - **`commands`** – One function per subcommand, generic over the store.

pub mod cli;
pub mod commands;
pub mod config;

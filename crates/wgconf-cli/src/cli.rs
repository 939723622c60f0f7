//! Command-line argument definitions.
//!
//! Global options may also come from the environment.  CLI args take
//! precedence when both are present.
//!
//! | Variable        | Default                | Description               |
//! |-----------------|------------------------|---------------------------|
//! | `WGCONF_DIR`    | platform data dir      | Storage root              |
//! | `WGCONF_SUFFIX` | `conf`                 | Managed file suffix       |
//! | `RUST_LOG`      | `warn`                 | Log filter (to stderr)    |

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wgconf_core::DEFAULT_SUFFIX;

/// Manage named tunnel configurations stored as one file per tunnel.
#[derive(Debug, Parser)]
#[command(name = "wgconf", version)]
pub struct Cli {
    /// Directory holding the configuration files.
    #[arg(long, global = true, env = "WGCONF_DIR")]
    pub dir: Option<PathBuf>,

    /// Suffix of managed configuration files.
    ///
    /// Files with any other suffix in the directory are ignored.
    #[arg(long, global = true, default_value = DEFAULT_SUFFIX, env = "WGCONF_SUFFIX")]
    pub suffix: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// List stored configuration names, sorted.
    List {
        /// Print a JSON array instead of one name per line.
        #[arg(long)]
        json: bool,
    },

    /// Print a configuration verbatim.
    Show { name: String },

    /// Store a new configuration; fails if the name is taken.
    Create {
        name: String,
        /// Read the configuration from this file instead of stdin.
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Replace an existing configuration; fails if the name is unknown.
    Save {
        name: String,
        /// Read the configuration from this file instead of stdin.
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Remove a configuration.
    Delete {
        name: String,
        /// Succeed silently when the configuration does not exist.
        #[arg(long)]
        if_exists: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create_with_file_and_global_dir_after_subcommand() {
        let cli = Cli::try_parse_from([
            "wgconf", "create", "wg0", "--file", "wg0.conf", "--dir", "/srv/tunnels",
        ])
        .unwrap();

        assert_eq!(cli.dir, Some(PathBuf::from("/srv/tunnels")));
        assert_eq!(
            cli.command,
            Command::Create {
                name: "wg0".to_string(),
                file: Some(PathBuf::from("wg0.conf")),
            }
        );
    }

    #[test]
    fn test_parse_delete_if_exists() {
        let cli = Cli::try_parse_from(["wgconf", "delete", "wg0", "--if-exists"]).unwrap();

        assert_eq!(
            cli.command,
            Command::Delete {
                name: "wg0".to_string(),
                if_exists: true,
            }
        );
    }

    #[test]
    fn test_parse_list_json_with_custom_suffix() {
        let cli = Cli::try_parse_from(["wgconf", "--suffix", "toml", "list", "--json"]).unwrap();

        assert_eq!(cli.suffix, "toml");
        assert_eq!(cli.command, Command::List { json: true });
    }

    #[test]
    fn test_show_requires_a_name() {
        assert!(Cli::try_parse_from(["wgconf", "show"]).is_err());
    }
}

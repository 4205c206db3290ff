//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not handle config loading (see `config_context` module).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "splunk-ds")]
#[command(about = "Automate serverclasses and app deployment on a Splunk deployment server", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  splunk-ds session\n  splunk-ds serverclass create --serverclass App1\n  splunk-ds serverclass add-host --serverclass App1 --client 'uf-*'\n  splunk-ds --inventory config/splunkapps.toml sync\n  splunk-ds apps bind-all --output json\n  splunk-ds reload\n"
)]
pub struct Cli {
    /// Deployment server hostname
    #[arg(long, global = true, env = "SPLUNK_HOST")]
    pub host: Option<String>,

    /// Management port
    #[arg(long, global = true, env = "SPLUNK_PORT")]
    pub port: Option<u16>,

    /// Full base URL of the management API (overrides --host and --port)
    #[arg(short, long, global = true, env = "SPLUNK_BASE_URL")]
    pub base_url: Option<String>,

    /// Username for session authentication
    #[arg(short, long, global = true, env = "SPLUNK_USER")]
    pub user: Option<String>,

    /// Password for session authentication (prompted for when absent)
    #[arg(short, long, global = true, env = "SPLUNK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Read the password from this system keyring account
    #[arg(long, global = true, env = "SPLUNK_KEYRING_ACCOUNT")]
    pub keyring_account: Option<String>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "SPLUNK_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "SPLUNK_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Path to the application inventory file
    #[arg(short, long, global = true, env = "SPLUNK_INVENTORY", value_name = "FILE")]
    pub inventory: Option<PathBuf>,

    /// Output format (table, json, csv, yaml)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true, env = "SPLUNK_DEBUG")]
    pub debug: bool,

    /// Suppress all progress output (spinners).
    ///
    /// Note: Progress indicators always write to STDERR; this flag disables them entirely.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Authenticate and show the session key with its validity window
    Session,

    /// Manage serverclasses and their allow lists
    Serverclass {
        #[command(subcommand)]
        command: commands::serverclass::ServerclassCommand,
    },

    /// List deployment applications and bind them to serverclasses
    Apps {
        #[command(subcommand)]
        command: commands::apps::AppsCommand,
    },

    /// Ask the deployment server to reload its configuration
    Reload,

    /// Create every inventory serverclass and set its allow list
    Sync,

    /// Show the parsed inventory (no network access)
    Inventory,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Commands {
    /// Whether the command talks to the deployment server.
    pub fn needs_connection(&self) -> bool {
        !matches!(self, Commands::Inventory | Commands::Completions { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_host_with_list() {
        let cli = Cli::try_parse_from([
            "splunk-ds",
            "serverclass",
            "add-host",
            "--serverclass",
            "App1",
            "--client",
            "uf-*",
            "--list",
            "whitelist.3",
        ])
        .unwrap();

        match cli.command {
            Commands::Serverclass {
                command:
                    commands::serverclass::ServerclassCommand::AddHost {
                        serverclass,
                        client,
                        list,
                    },
            } => {
                assert_eq!(serverclass, "App1");
                assert_eq!(client, "uf-*");
                assert_eq!(list.to_string(), "whitelist.3");
            }
            _ => panic!("expected serverclass add-host"),
        }
    }

    #[test]
    fn test_add_host_list_defaults_to_first_allow_slot() {
        let cli = Cli::try_parse_from([
            "splunk-ds",
            "serverclass",
            "add-host",
            "--serverclass",
            "App1",
            "--client",
            "h1",
        ])
        .unwrap();

        match cli.command {
            Commands::Serverclass {
                command: commands::serverclass::ServerclassCommand::AddHost { list, .. },
            } => assert_eq!(list.to_string(), "whitelist.0"),
            _ => panic!("expected serverclass add-host"),
        }
    }

    #[test]
    fn test_add_host_rejects_bad_list_key() {
        let result = Cli::try_parse_from([
            "splunk-ds",
            "serverclass",
            "add-host",
            "--serverclass",
            "App1",
            "--client",
            "h1",
            "--list",
            "greylist.0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["splunk-ds", "sync", "--port", "9089", "--quiet", "-o", "json"])
                .unwrap();
        assert_eq!(cli.port, Some(9089));
        assert!(cli.quiet);
        assert_eq!(cli.output, "json");
    }

    #[test]
    fn test_offline_commands() {
        assert!(!Commands::Inventory.needs_connection());
        assert!(Commands::Sync.needs_connection());
        assert!(Commands::Session.needs_connection());
    }
}

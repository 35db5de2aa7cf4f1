//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

use crate::lookup::NetTypeFilter;

pub mod args;
pub mod completions;
pub mod context;
pub mod network;
pub mod org;

pub use args::{GlobalOptions, KeySource, OutputFormat};
pub use context::CommandContext;

/// MerakiOp - provision networks in the Meraki dashboard
#[derive(Parser, Debug)]
#[command(name = "merakiop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "MERAKIOP_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "MERAKIOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Where to get the Dashboard API key (prompt, env)
    #[arg(
        long,
        global = true,
        env = "MERAKIOP_KEY_SOURCE",
        default_value = "prompt",
        hide_env = true
    )]
    pub key_source: KeySource,

    /// Override the Dashboard API base URL
    #[arg(long, global = true, env = "MERAKIOP_BASE_URL", hide_env = true)]
    pub base_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "MERAKIOP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display version information
    Version,

    /// Organizations visible to the API key
    #[command(subcommand)]
    Org(OrgCommands),

    /// Create and find networks
    #[command(subcommand)]
    Network(NetworkCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   merakiop completion bash > /etc/bash_completion.d/merakiop
  zsh:    merakiop completion zsh > \"${fpath[1]}/_merakiop\"
  fish:   merakiop completion fish > ~/.config/fish/completions/merakiop.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Organization subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// List all accessible organizations
    List,
}

/// Network subcommands
#[derive(Subcommand, Debug)]
pub enum NetworkCommands {
    /// Interactively create a network
    #[command(after_help = "\
Prompts for the organization, network name, tags and device types.
Enter one device code (MX/MS/MR/MV/MG/SM) for a standalone network, or
several separated by space for a combined network.")]
    Create,

    /// Find networks of an organization by name and type
    #[command(after_help = "EXAMPLES:\n  \
            merakiop network find --org Acme                     # All networks\n  \
            merakiop network find --org Acme --name Lab-01       # By exact name\n  \
            merakiop network find --org Acme --type combined     # Combined only")]
    Find {
        /// Organization name (exact, case-sensitive)
        #[arg(long)]
        org: String,

        /// Network name (exact); all networks when omitted
        #[arg(long, default_value = "")]
        name: String,

        /// Network type filter
        #[arg(long = "type", short = 't', value_enum, default_value = "any")]
        net_type: NetTypeFilter,
    },
}

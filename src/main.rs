//! MerakiOp CLI - interactive network provisioning for the Meraki dashboard

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

mod cli;
mod client;
mod config;
mod error;
mod lookup;
mod output;
mod prompt;
mod session;
mod validate;

use cli::{Cli, Commands, GlobalOptions, NetworkCommands, OrgCommands};
use error::Result;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "Error:".red().bold(), err);
            ExitCode::from(err.exit_code())
        }
    }
}

/// `RUST_LOG` wins; otherwise `--debug` selects debug output for this crate.
fn init_logging(debug: bool) {
    let default_filter = if debug { "merakiop=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Version => {
            println!("merakiop version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
        Commands::Org(OrgCommands::List) => cli::org::list(&opts).await,
        Commands::Network(net_cmd) => match net_cmd {
            NetworkCommands::Create => cli::network::create(&opts).await,
            NetworkCommands::Find {
                org,
                name,
                net_type,
            } => cli::network::find(&opts, &org, &name, net_type).await,
        },
    }
}

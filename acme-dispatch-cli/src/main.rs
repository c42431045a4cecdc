//! acme-dispatch CLI - inspect how ACME server URIs are routed to providers.
//!
//! # Commands
//!
//! - `acme-dispatch providers` - List the registered providers
//! - `acme-dispatch resolve <uri>` - Show which provider serves a URI
//! - `acme-dispatch connect <uri>` - Let the provider create a client and show it
//!
//! # Exit codes
//!
//! - `0` success
//! - `2` malformed URI or configuration
//! - `3` no provider, or more than one provider, accepts the URI
//! - `4` the provider failed to connect

use acme_dispatch::{ClientConfig, InventoryRegistry, ProviderResolver};
use acme_dispatch_log::{Format, Level, LogConfig};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

mod commands;
mod error;

use error::CliResult;

/// Route ACME server URIs to their provider
#[derive(Parser)]
#[command(name = "acme-dispatch")]
#[command(author = "Pegasus Heavy Industries LLC")]
#[command(version)]
#[command(about = "Route ACME server URIs to the provider that serves them")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML client configuration file (defaults to ACME_DISPATCH_* variables)
    #[arg(long, global = true, env = "ACME_DISPATCH_CONFIG")]
    config: Option<PathBuf>,

    /// Network timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log format (pretty, compact, json)
    #[arg(long, global = true)]
    log_format: Option<Format>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all log output (overrides RUST_LOG)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered providers
    #[command(alias = "ls")]
    Providers,

    /// Show which provider serves a server URI, without connecting
    Resolve {
        /// Server URI, e.g. https://acme.example.com/directory or acme://letsencrypt.org
        uri: String,
    },

    /// Connect to a server URI through its provider
    Connect {
        /// Server URI, e.g. https://acme.example.com/directory or acme://letsencrypt.org
        uri: String,
    },
}

impl Cli {
    fn log_config(&self) -> LogConfig {
        let mut config = LogConfig::from_env();
        if let Some(format) = self.log_format {
            config = config.with_format(format);
        }
        if self.no_color {
            config = config.with_color(false);
        }
        // explicit flags win over RUST_LOG
        if self.verbose {
            config = config.with_debug(true).with_rust_log(false);
        } else if self.quiet {
            config = config.with_level(Level::Off).with_rust_log(false);
        }
        config
    }

    fn client_config(&self) -> CliResult<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::from_env()?,
        };
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let resolver = ProviderResolver::new(InventoryRegistry).with_config(cli.client_config()?);

    match &cli.command {
        Commands::Providers => {
            let report = commands::providers::execute(resolver.registry());
            commands::print(&report, cli.json)
        }
        Commands::Resolve { uri } => {
            let report = commands::resolve::execute(&resolver, uri)?;
            commands::print(&report, cli.json)
        }
        Commands::Connect { uri } => {
            let report = commands::connect::execute(&resolver, uri).await?;
            commands::print(&report, cli.json)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = acme_dispatch_log::init(&cli.log_config()) {
        eprintln!("{} {}", "warning:".yellow().bold(), e);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::from(e.exit_code())
        }
    }
}

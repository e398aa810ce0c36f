//! Foodhub CLI - fetch backend resources from the command line
//!
//! Prints the `{status, message, data}` envelope of one resource fetch.
//! Exits non-zero when the resource could not be fetched.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use foodhub_api_client::{BearerToken, ClientConfig, FetchResult, FoodhubClient, Resource};
use owo_colors::OwoColorize;
use serde_json::Value;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Default log filter when `--verbose` is given without `RUST_LOG`
const VERBOSE_FILTER: &str = "foodhub=debug,foodhub_api_client=debug";

/// Command-line access to Foodhub backend resources
#[derive(Parser)]
#[command(name = "foodhub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// TOML configuration file (environment variables are used otherwise)
    #[arg(short, long, global = true, env = "FOODHUB_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one resource by identifier
    Fetch {
        /// Resource kind: food, restaurant, bookmark or cart
        resource: Resource,

        /// Resource identifier, sent as-is
        id: String,

        /// Bearer token for the backend
        #[arg(long, env = "FOODHUB_TOKEN", hide_env_values = true)]
        token: String,
    },

    /// Show the effective configuration
    Config,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so JSON output stays parseable
fn init_logging(verbose: bool) {
    let from_env = EnvFilter::try_from_default_env();
    if !verbose && from_env.is_err() {
        return;
    }

    let filter = from_env.unwrap_or_else(|_| EnvFilter::new(VERBOSE_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns whether the command succeeded
async fn run(cli: Cli) -> Result<bool> {
    let format = cli.format;
    let config =
        ClientConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Fetch {
            resource,
            id,
            token,
        } => {
            let client =
                FoodhubClient::with_config(config).context("Failed to create API client")?;
            debug!(resource = %resource, id = %id, "Fetching from CLI");

            let result: FetchResult<Value> = client
                .resource(resource)
                .fetch(&id, &BearerToken::new(token))
                .await;

            print_result(&result, format)?;
            Ok(result.status)
        }
        Commands::Config => {
            config.validate().context("Invalid configuration")?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(true)
        }
    }
}

fn print_result(result: &FetchResult<Value>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Text => {
            if result.status {
                println!("{} {}", "✓".green().bold(), result.message);
            } else {
                println!("{} {}", "✗".red().bold(), result.message);
            }
            if let Some(ref data) = result.data {
                println!("{}", serde_json::to_string_pretty(data)?);
            }
        }
    }
    Ok(())
}

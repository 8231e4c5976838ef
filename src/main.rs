// SPDX-License-Identifier: MIT
//! `taskseed` binary — parse args, set up logging, dispatch one command.

use anyhow::{Context as _, Result};
use clap::Parser;
use taskseed::cli::{self, Args, Command};
use taskseed::client::TaskApiClient;
use taskseed::config::SeedConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Init once — must happen before any tracing calls.
    setup_logging(args.log.as_deref().unwrap_or("warn"));

    let config = SeedConfig::new(Some(args.api_url), Some(args.timeout_secs));

    match args.command {
        Some(Command::Examples) => {
            cli::cmd_examples(&config.base_url);
        }
        Some(Command::Stats) => {
            let client =
                TaskApiClient::new(&config).context("failed to build HTTP client")?;
            cli::cmd_stats(&client).await;
        }
        None | Some(Command::Populate) => {
            let client =
                TaskApiClient::new(&config).context("failed to build HTTP client")?;
            cli::cmd_populate(&client).await;
        }
    }

    Ok(())
}

/// Stdout-only tracing setup. `RUST_LOG` wins over the `--log` flag.
fn setup_logging(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

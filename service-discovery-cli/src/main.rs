//! CLI entry point for service discovery
//!
//! Prints the account discovered for a URL. Logs go to stderr so that
//! stdout stays machine-readable with `--json`.

mod cli;
mod output;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, anyhow};
use clap::Parser;
use cli::Cli;
use service_discovery_core::{
    ClientConfig, DEFAULT_HEURISTICS, ReqwestTransport, ServiceDiscovery,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    // Initialize tracing to stderr; `log` records from the library are bridged in
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> anyhow::Result<()> {
    if args.list_types {
        print!("{}", output::render_heuristics(DEFAULT_HEURISTICS));
        return Ok(());
    }

    let url = args.url.context("URL is required")?;
    let config = ClientConfig {
        connect_timeout_secs: args.connect_timeout,
        request_timeout_secs: args.request_timeout,
        ..ClientConfig::default()
    };
    let discovery = ServiceDiscovery::new(Arc::new(ReqwestTransport::new(&config)));

    // The core has no deadline of its own
    let account = tokio::time::timeout(
        Duration::from_secs(args.deadline),
        discovery.discover(&url, &args.user, &args.password),
    )
    .await
    .map_err(|_| anyhow!("discovery gave up after {}s", args.deadline))??;

    if args.json {
        println!(
            "{}",
            output::render_json(&account, args.include_password)
                .context("Failed to serialize account")?
        );
    } else {
        print!("{}", output::render_account(&account));
    }
    Ok(())
}

//! Command-line arguments

use clap::Parser;

/// Identify the remote service (`WebDAV`, web, cloud provider) behind a URL
#[derive(Debug, Parser)]
#[command(name = "service-discovery", version, about)]
pub struct Cli {
    /// URL to inspect; `https://` is assumed when no scheme is given
    #[arg(value_name = "URL", required_unless_present = "list_types")]
    pub url: Option<String>,

    /// Username, overrides one embedded in the URL
    #[arg(short, long, env = "SERVICE_DISCOVERY_USER", default_value = "")]
    pub user: String,

    /// Password, overrides one embedded in the URL
    #[arg(
        short,
        long,
        env = "SERVICE_DISCOVERY_PASSWORD",
        default_value = "",
        hide_env_values = true
    )]
    pub password: String,

    /// Connect timeout per probe, seconds
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub connect_timeout: u64,

    /// Total timeout per probe, seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub request_timeout: u64,

    /// Give up on the whole discovery after this many seconds
    #[arg(long, value_name = "SECS", default_value_t = 120)]
    pub deadline: u64,

    /// Print the account as JSON
    #[arg(long)]
    pub json: bool,

    /// Include the password in JSON output
    #[arg(long, requires = "json")]
    pub include_password: bool,

    /// Print the heuristic table and exit
    #[arg(long)]
    pub list_types: bool,

    /// Debug logging (probe-by-probe); `RUST_LOG` takes precedence
    #[arg(short, long)]
    pub verbose: bool,
}

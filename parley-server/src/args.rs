//! Command-line argument parsing

use clap::Parser;
use parley_common::{DEFAULT_HTTP_PORT, DEFAULT_SOCKET_PORT};
use std::net::IpAddr;
use std::path::PathBuf;

/// Default HTTP port, honoring the `PORT` environment override
///
/// Hosted deployments configure the port through the `PORT` environment
/// variable; an explicit `--port` wins over both.
fn default_http_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_HTTP_PORT)
}

/// Parley chat server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// IP address to bind to (IPv4 or IPv6)
    #[arg(short, long, default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Port for the HTTP API (default: PORT environment variable, else 10000)
    #[arg(short, long, default_value_t = default_http_port())]
    pub port: u16,

    /// Port for raw socket connections
    #[arg(short = 's', long, default_value_t = DEFAULT_SOCKET_PORT)]
    pub socket_port: u16,

    /// Directory holding the accounts and chat documents
    #[arg(short, long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Enable debug logging (shows connection activity and parse failures)
    #[arg(long, default_value = "false")]
    pub debug: bool,
}

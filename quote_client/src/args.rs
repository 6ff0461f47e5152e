//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap` and converts it into the
//! `ClientConfig` the rest of the crate runs on.
use clap::Parser;
use quote_common::net::{CLIENT_TIMEOUT_MS, OUTPUT_PATH, SERVER_PORT, quote_url};
use quote_common::{QuoteError, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Fetches the USD-BRL quote once and appends it to a file", long_about = None)]
pub struct Args {
    /// Full URL of the quote server endpoint.
    #[clap(long, env = "QUOTE_SERVER_URL", default_value_t = quote_url("localhost", SERVER_PORT))]
    pub server_url: String,

    /// Timeout for the whole request, in milliseconds.
    #[clap(long, env = "QUOTE_CLIENT_TIMEOUT_MS", default_value_t = CLIENT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Text file the quote line is appended to.
    #[clap(long, env = "QUOTE_OUTPUT", default_value = OUTPUT_PATH)]
    pub output: String,
}

/// Everything one client run needs.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Quote endpoint on the server.
    pub server_url: String,
    /// Bound for the request to the server.
    pub timeout: Duration,
    /// Append-only output file.
    pub output: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: quote_url("localhost", SERVER_PORT),
            timeout: Duration::from_millis(CLIENT_TIMEOUT_MS),
            output: PathBuf::from(OUTPUT_PATH),
        }
    }
}

impl TryFrom<Args> for ClientConfig {
    type Error = QuoteError;

    fn try_from(args: Args) -> Result<Self> {
        if args.timeout_ms == 0 {
            return Err(QuoteError::Config("timeout must be greater than zero".to_string()));
        }
        Ok(Self {
            server_url: args.server_url.trim().to_string(),
            timeout: Duration::from_millis(args.timeout_ms),
            output: normalize_path(&args.output),
        })
    }
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

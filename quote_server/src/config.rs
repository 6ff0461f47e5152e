//! Command-line arguments and runtime configuration for the quote server.
//!
//! `Args` is the clap surface; `ServerConfig` is what the rest of the crate is
//! built from, so tests can construct one directly with local URLs and paths.
use clap::Parser;
use quote_common::net::{
    DB_PATH, DB_TIMEOUT_MS, PROVIDER_TIMEOUT_MS, PROVIDER_URL, QUOTE_ROUTE, SERVER_PORT, addr,
};
use quote_common::{QuoteError, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Serves the latest USD-BRL quote and records every fetch", long_about = None)]
pub struct Args {
    /// Address the HTTP listener binds to.
    #[clap(long, env = "QUOTE_LISTEN_ADDR", default_value_t = addr("0.0.0.0", SERVER_PORT))]
    pub listen_addr: String,

    /// Third-party endpoint returning the USD-BRL quote.
    #[clap(long, env = "QUOTE_PROVIDER_URL", default_value = PROVIDER_URL)]
    pub provider_url: String,

    /// Timeout for the provider call, in milliseconds.
    #[clap(long, env = "QUOTE_PROVIDER_TIMEOUT_MS", default_value_t = PROVIDER_TIMEOUT_MS)]
    pub provider_timeout_ms: u64,

    /// SQLite file quotes are appended to.
    #[clap(long, env = "QUOTE_DB_PATH", default_value = DB_PATH)]
    pub db_path: PathBuf,

    /// Timeout for a single insert, in milliseconds.
    #[clap(long, env = "QUOTE_DB_TIMEOUT_MS", default_value_t = DB_TIMEOUT_MS)]
    pub db_timeout_ms: u64,
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket the HTTP listener binds to.
    pub listen_addr: SocketAddr,
    /// The single path answering with a quote.
    pub route: String,
    /// Third-party quote endpoint.
    pub provider_url: String,
    /// Bound for the provider call.
    pub provider_timeout: Duration,
    /// SQLite history file.
    pub db_path: PathBuf,
    /// Bound for a single insert.
    pub db_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], SERVER_PORT)),
            route: QUOTE_ROUTE.to_string(),
            provider_url: PROVIDER_URL.to_string(),
            provider_timeout: Duration::from_millis(PROVIDER_TIMEOUT_MS),
            db_path: PathBuf::from(DB_PATH),
            db_timeout: Duration::from_millis(DB_TIMEOUT_MS),
        }
    }
}

impl TryFrom<Args> for ServerConfig {
    type Error = QuoteError;

    fn try_from(args: Args) -> Result<Self> {
        let listen_addr = args
            .listen_addr
            .trim()
            .parse()
            .map_err(|e| QuoteError::Config(format!("invalid listen address {}: {}", args.listen_addr, e)))?;
        if args.provider_timeout_ms == 0 || args.db_timeout_ms == 0 {
            return Err(QuoteError::Config("timeouts must be greater than zero".to_string()));
        }

        Ok(Self {
            listen_addr,
            route: QUOTE_ROUTE.to_string(),
            provider_url: args.provider_url,
            provider_timeout: Duration::from_millis(args.provider_timeout_ms),
            db_path: args.db_path,
            db_timeout: Duration::from_millis(args.db_timeout_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let args = Args::parse_from(["quote_server"]);
        let config = ServerConfig::try_from(args).unwrap();
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.route, "/cotacao");
        assert_eq!(config.provider_timeout, Duration::from_millis(200));
        assert_eq!(config.db_timeout, Duration::from_millis(10));
        assert_eq!(config.db_path, PathBuf::from("cotacao.db"));
    }

    #[test]
    fn overrides_from_flags() {
        let args = Args::parse_from([
            "quote_server",
            "--listen-addr",
            "127.0.0.1:9090",
            "--provider-url",
            "http://127.0.0.1:1/quote",
            "--db-timeout-ms",
            "250",
        ]);
        let config = ServerConfig::try_from(args).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:9090".parse().unwrap());
        assert_eq!(config.provider_url, "http://127.0.0.1:1/quote");
        assert_eq!(config.db_timeout, Duration::from_millis(250));
    }

    #[test]
    fn rejects_bad_listen_address() {
        let args = Args::parse_from(["quote_server", "--listen-addr", "nowhere"]);
        assert!(matches!(ServerConfig::try_from(args), Err(QuoteError::Config(_))));
    }

    #[test]
    fn rejects_zero_timeout() {
        let args = Args::parse_from(["quote_server", "--provider-timeout-ms", "0"]);
        assert!(ServerConfig::try_from(args).is_err());
    }
}

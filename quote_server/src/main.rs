//! Quote server binary.
//!
//! Usage example (CLI):
//! ```bash
//! quote_server --listen-addr 0.0.0.0:8080 --db-path ./cotacao.db
//! ```
//!
//! See `quote_server::config::Args` for every flag and its environment variable.
#![warn(missing_docs)]
use clap::Parser;
use log::error;
use quote_server::config::{Args, ServerConfig};
use std::process;

#[tokio::main]
async fn main() {
    init_logger();
    let config = match ServerConfig::try_from(Args::parse()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = quote_server::run(config).await {
        error!("Quote server failed: {}", e);
        process::exit(1);
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

//! Quote Client binary.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --server-url http://localhost:8080/cotacao --output ./cotacao.txt
//! ```
//!
//! Exits with status 1 after logging the error if the request, the decoding or the
//! file write fails.
#![warn(missing_docs)]
use clap::Parser;
use log::error;
use quote_client::args::{Args, ClientConfig};
use std::process;

#[tokio::main]
async fn main() {
    init_logger();
    let config = match ClientConfig::try_from(Args::parse()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = quote_client::run(&config).await {
        error!("{}", e);
        process::exit(1);
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

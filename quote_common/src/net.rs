//! Shared networking and file defaults used by client and server.
//!
//! Both binaries start from these values and let the command line override them.

/// Path of the only endpoint exposed by the quote server.
pub const QUOTE_ROUTE: &str = "/cotacao";
/// Port the quote server listens on by default.
pub const SERVER_PORT: u16 = 8080;
/// Third-party endpoint serving the latest USD-BRL quote.
pub const PROVIDER_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";
/// Upper bound for the server's call to the provider, in milliseconds.
pub const PROVIDER_TIMEOUT_MS: u64 = 200;
/// Upper bound for a single database insert, in milliseconds.
pub const DB_TIMEOUT_MS: u64 = 10;
/// SQLite file the server appends quotes to.
pub const DB_PATH: &str = "cotacao.db";
/// Upper bound for the client's call to the server, in milliseconds.
pub const CLIENT_TIMEOUT_MS: u64 = 300;
/// Text file the client appends quote lines to.
pub const OUTPUT_PATH: &str = "cotacao.txt";

/// Helper to format an address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}

/// URL of the quote endpoint on `host:port`.
pub fn quote_url(host: &str, port: u16) -> String {
    format!("http://{}{}", addr(host, port), QUOTE_ROUTE)
}

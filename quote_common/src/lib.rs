//!
//! Common types and utilities shared by the quote server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the JSON quote payload exchanged by provider, server and client.
//! - `currency` — currency codes persisted next to each quote.
//! - `net` — default addresses, paths and timeouts.
#![warn(missing_docs)]
pub mod currency;
pub mod error;
pub mod net;
pub mod quote;
pub mod result;

pub use currency::Currency;
pub use error::QuoteError;
pub use quote::Quote;
pub use result::Result;

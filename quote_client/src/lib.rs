//! Quote Client — fetches the current USD-BRL quote from the quote server once and
//! appends it as `Dólar: <bid>` to a local text file.
//!
//! The run is strictly ordered: the file is only opened after the quote has been
//! fetched and decoded, so a failed request never touches it.
#![warn(missing_docs)]
pub mod args;
pub mod recorder;
pub mod requester;

use crate::args::ClientConfig;
use crate::recorder::QuoteRecorder;
use crate::requester::QuoteRequester;
use quote_common::{Quote, Result};

/// Fetch one quote and append it to the configured file.
pub async fn run(config: &ClientConfig) -> Result<Quote> {
    let requester = QuoteRequester::new(config.server_url.clone(), config.timeout)?;
    let quote = requester.fetch().await?;
    QuoteRecorder::new(&config.output).append(&quote)?;
    Ok(quote)
}

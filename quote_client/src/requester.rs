//! Requesting the current quote from the quote server.
use log::{error, info};
use quote_common::{Quote, QuoteError, Result};
use std::time::Duration;

/// One-shot HTTP client for the server's quote endpoint.
pub struct QuoteRequester {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl QuoteRequester {
    /// Build a requester whose calls are bounded by `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    /// GET the quote; any transport failure, non-2xx status or shape mismatch is an error.
    pub async fn fetch(&self) -> Result<Quote> {
        info!("Requesting quote from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            error!("Quote server answered {}", status);
            return Err(QuoteError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        let quote = Quote::from_json_slice(&body)?;
        info!("Quote returned successfully: {:?}", quote);
        Ok(quote)
    }

    fn transport_error(&self, e: reqwest::Error) -> QuoteError {
        error!("Error calling the quote server: {}", e);
        if e.is_timeout() {
            QuoteError::Timeout {
                operation: "quote server request",
                after: self.timeout,
            }
        } else {
            QuoteError::Http(e)
        }
    }
}

//! Client for the third-party quote API.
use log::{error, info};
use quote_common::{Currency, Quote, QuoteError, Result};
use std::time::Duration;

/// Fetches the latest USD-BRL quote from the external provider.
///
/// One GET per call, bounded by the timeout given at construction. Timeouts are
/// reported as `QuoteError::Timeout`, non-2xx answers as `QuoteError::Status`, and
/// payloads without a string `USDBRL.bid` as `QuoteError::SerdeJson`.
pub struct QuoteProvider {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl QuoteProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    pub async fn fetch(&self) -> Result<Quote> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            error!("Quote provider answered {} for {}", status, self.url);
            return Err(QuoteError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        let quote = Quote::from_json_slice(&body).inspect_err(|e| {
            error!("Quote provider returned an unexpected payload: {}", e);
        })?;

        info!(
            "Fetched {} quote from provider: bid={}",
            Currency::USD.pair_label(),
            quote.bid()
        );
        Ok(quote)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn transport_error(&self, e: reqwest::Error) -> QuoteError {
        error!("Request to the quote provider failed: {}", e);
        if e.is_timeout() {
            QuoteError::Timeout {
                operation: "provider request",
                after: self.timeout,
            }
        } else {
            QuoteError::Http(e)
        }
    }
}

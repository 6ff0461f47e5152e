//! Quote payload exchanged by provider, server and client.
//!
//! The provider answers with a large object keyed by the currency pair; only the
//! `bid` is kept. The server re-emits exactly `{"USDBRL":{"bid":"..."}}` and the
//! client turns it into one line of text. The bid is never parsed as a number.
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// Latest USD-BRL quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote for the USD-BRL pair.
    #[serde(rename = "USDBRL")]
    pub usd_brl: Bid,
}

/// Bid side of a quote, kept as the provider's decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    /// Bid price, e.g. `"5.4321"`.
    pub bid: String,
}

impl Quote {
    /// Build a quote from a bid string.
    pub fn new(bid: impl Into<String>) -> Self {
        Quote {
            usd_brl: Bid { bid: bid.into() },
        }
    }

    /// The bid exactly as received.
    pub fn bid(&self) -> &str {
        &self.usd_brl.bid
    }

    /// Decode a quote from JSON, ignoring any field other than the bid.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Quote, QuoteError> {
        let quote = serde_json::from_slice(bytes)?;
        Ok(quote)
    }

    /// Encode the quote to JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, QuoteError> {
        let json = serde_json::to_vec(self)?;
        Ok(json)
    }

    /// Line appended to the client's output file.
    pub fn to_line(&self) -> String {
        format!("Dólar: {}\n", self.bid())
    }
}

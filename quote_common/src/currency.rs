//! Currency codes shared between client and server.
//!
//! Only the US dollar is quoted today, against the Brazilian real. The code is
//! what ends up in the `moeda` column of the server's history table.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Set of supported currency codes.
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, Display, EnumString, Hash, Eq, PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum Currency {
    #[default]
    USD,
    BRL,
}

impl Currency {
    /// Currency every quote is expressed in.
    pub const QUOTED_IN: Currency = Currency::BRL;

    /// Pair label used as the top-level JSON key, e.g. `USDBRL`.
    pub fn pair_label(&self) -> String {
        format!("{}{}", self, Self::QUOTED_IN)
    }
}

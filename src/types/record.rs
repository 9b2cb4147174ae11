// src/types/record.rs

use crate::config::DESCRIPTION_PREFIX;
use serde::Serialize;

/// One confirmed entry of the watchlist. The description is derived from the
/// symbol at creation time and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    symbol: String,
    description: String,
}

impl Record {
    pub fn new(symbol: impl Into<String>) -> Self {
        let symbol = symbol.into();
        let description = format!("{DESCRIPTION_PREFIX}{symbol}");
        Self {
            symbol,
            description,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

// src/stocks/definitions.rs
//! Built-in stock metadata used for lookups and offline simulation.
//
//! Extend `default_stock_universe()` whenever more tickers should resolve to a
//! company name.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

pub type Symbol = String;

const NOT_AVAILABLE: &str = "N/A";

/// Immutable facts about a listed company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stock {
    /// NASDAQ / NYSE ticker (e.g. "AAPL").
    pub ticker: Symbol,
    /// Human-readable company name.
    pub company_name: String,
    /// First listed industry, empty when unknown.
    pub sector: String,
    /// Reference price used to seed the simulator.
    pub reference_price: f64,
}

/// Convenience factory so call-sites stay concise.
impl Stock {
    #[inline]
    pub fn new<T1: Into<String>, T2: Into<String>, T3: Into<String>>(
        ticker: T1,
        company_name: T2,
        sector: T3,
        reference_price: f64,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            company_name: company_name.into(),
            sector: sector.into(),
            reference_price,
        }
    }

    pub fn sector_or_na(&self) -> &str {
        if self.sector.trim().is_empty() {
            NOT_AVAILABLE
        } else {
            &self.sector
        }
    }
}

/// A handful of S&P 500 constituents.
pub fn default_stock_universe() -> Vec<Stock> {
    vec![
        Stock::new("AAPL", "Apple Inc.", "Technology Hardware", 195.37),
        Stock::new("MSFT", "Microsoft Corporation", "Software", 422.12),
        Stock::new("AMZN", "Amazon.com Inc.", "Internet Retail", 182.15),
        Stock::new("GOOGL", "Alphabet Inc.", "Interactive Media", 172.63),
        Stock::new("NVDA", "NVIDIA Corporation", "Semiconductors", 118.11),
        Stock::new("META", "Meta Platforms Inc.", "Interactive Media", 504.22),
        Stock::new("JPM", "JPMorgan Chase & Co.", "Banks", 198.88),
        Stock::new("JNJ", "Johnson & Johnson", "Pharmaceuticals", 146.97),
        Stock::new("XOM", "Exxon Mobil Corporation", "Oil & Gas", 113.26),
        Stock::new("KO", "The Coca-Cola Company", "Beverages", 63.14),
        Stock::new("BRK.B", "Berkshire Hathaway Inc.", "", 406.80),
    ]
}

static TICKER_TO_STOCK: Lazy<HashMap<Symbol, Stock>> = Lazy::new(|| {
    default_stock_universe()
        .into_iter()
        .map(|s| (s.ticker.clone(), s))
        .collect()
});

/// Case-insensitive lookup in the built-in universe.
pub fn lookup(ticker: &str) -> Option<&'static Stock> {
    TICKER_TO_STOCK.get(&ticker.trim().to_ascii_uppercase())
}

// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod analytics;
pub mod config;
pub mod error;
pub mod simulators;
pub mod stocks;
pub mod types;
pub mod watchlist;
pub mod widget;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `widget` ---
pub use widget::{RecordList, SymbolCard, SymbolEntry};

// --- From `types` ---
pub use types::Record;

// --- From `config` / `error` ---
pub use config::{EmptyTokenPolicy, WidgetConfig};
pub use error::AnalyticsError;

// --- From `simulators` ---
pub use simulators::{GBMSimulator, Marketable};

// --- From `stocks` ---
pub use stocks::{Stock, default_stock_universe};

// --- From `watchlist` ---
pub use watchlist::DrawdownReport;

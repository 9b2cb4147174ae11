// src/config.rs

//! A centralized place for tuning widget and screening parameters.

// --- Symbol entry widget ---
pub const DESCRIPTION_PREFIX: &str = "This is a stock ";
pub const INPUT_PLACEHOLDER: &str = "Type Stock Symbol";
pub const ADD_BUTTON_LABEL: &str = "Add";
pub const CARD_WIDTH: f32 = 180.0;

// --- Momentum screen ---
// Look-back windows in months, averaged with equal weight.
pub const MOMENTUM_PERIODS: [usize; 3] = [12, 36, 60];
pub const HIGH_MOMENTUM_THRESHOLD: f64 = 2.0;
// Enough daily history for the longest look-back plus the dropped month.
pub const MOMENTUM_HISTORY_YEARS: usize = 6;

// --- Drawdown alerts ---
pub const TRADING_DAYS_PER_YEAR: usize = 252;
pub const DRAWDOWN_WINDOW: usize = 252;
pub const DROP_15_FRACTION: f64 = 0.85;
pub const DROP_30_FRACTION: f64 = 0.70;
pub const DROP_50_FRACTION: f64 = 0.50;

// --- Price simulator ---
// Used when a watched symbol is not part of the built-in universe.
pub const DEFAULT_INITIAL_PRICE: f64 = 150.0;
pub const DEFAULT_DRIFT: f64 = 0.08;
pub const DEFAULT_VOLATILITY: f64 = 0.35;

/// What `confirm()` does when the token is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyTokenPolicy {
    /// Append a record with an empty symbol.
    #[default]
    Accept,
    /// Leave the widget untouched.
    Ignore,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WidgetConfig {
    pub empty_token_policy: EmptyTokenPolicy,
}

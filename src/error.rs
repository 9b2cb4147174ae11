// src/error.rs

use thiserror::Error;

/// Failures raised by the screening and drawdown calculations.
#[derive(Debug, Error, PartialEq)]
pub enum AnalyticsError {
    #[error("need {needed} observations, only {available} available")]
    InsufficientHistory { needed: usize, available: usize },

    #[error("invalid look-back period: {0}")]
    InvalidPeriod(usize),

    #[error("price must be positive, got {0}")]
    NonPositivePrice(f64),

    #[error("daily bars are not sorted by date")]
    UnsortedBars,

    #[error("price history is empty")]
    EmptyHistory,
}

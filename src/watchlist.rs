// src/watchlist.rs

//! Drawdown status for watched symbols, computed from a simulated price path.

use crate::analytics::{DailyBar, DrawdownAlert, DrawdownLevel, classify, prev_max_high};
use crate::error::AnalyticsError;
use crate::simulators::Marketable;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawdownReport {
    pub symbol: String,
    pub high: f64,
    pub current: f64,
    pub level: Option<DrawdownLevel>,
    pub history: Vec<f64>,
}

impl DrawdownReport {
    pub fn alert(&self) -> Option<DrawdownAlert> {
        self.level.map(|level| DrawdownAlert {
            symbol: self.symbol.clone(),
            level,
            high: self.high,
            current: self.current,
        })
    }

    /// Fraction below the high, 0.0 when at or above it.
    pub fn drawdown(&self) -> f64 {
        if self.high <= 0.0 {
            return 0.0;
        }
        (1.0 - self.current / self.high).max(0.0)
    }
}

/// Simulates `days` steps, takes the high over the `window` prices before the
/// last one and classifies the last price against it.
pub fn report<M: Marketable + ?Sized>(
    symbol: &str,
    market: &mut M,
    days: usize,
    window: usize,
) -> Result<DrawdownReport, AnalyticsError> {
    let history = market.simulate(days);
    let (current, previous) = match history.split_last() {
        Some((last, rest)) if !rest.is_empty() => (*last, rest),
        _ => {
            return Err(AnalyticsError::InsufficientHistory {
                needed: 2,
                available: history.len(),
            });
        }
    };
    let high = prev_max_high(previous, window)?;
    Ok(DrawdownReport {
        symbol: symbol.to_string(),
        high,
        current,
        level: classify(current, high),
        history,
    })
}

/// `days` simulated closes laid on weekdays starting at `start`, ready for
/// the momentum screen.
pub fn simulated_bars<M: Marketable + ?Sized>(
    market: &mut M,
    start: NaiveDate,
    days: usize,
) -> Vec<DailyBar> {
    start
        .iter_days()
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .zip(market.simulate(days))
        .map(|(date, close)| DailyBar::new(date, close))
        .collect()
}

// src/analytics/momentum.rs

//! Monthly closes and equal-weight momentum.
//!
//! Momentum for one period is the simple return between the latest completed
//! month and the month `period` months before it. The score averages that
//! return over all requested periods.

use crate::error::AnalyticsError;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub close: f64,
}

impl DailyBar {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyClose {
    pub year: i32,
    pub month: u32,
    pub close: f64,
}

/// Last close of every calendar month, oldest first. The final month is
/// dropped since it may still be in progress.
pub fn monthly_closes(bars: &[DailyBar]) -> Result<Vec<MonthlyClose>, AnalyticsError> {
    if bars.windows(2).any(|w| w[1].date < w[0].date) {
        return Err(AnalyticsError::UnsortedBars);
    }

    let mut months: Vec<MonthlyClose> = Vec::new();
    for bar in bars.iter().filter(|b| b.close.is_finite()) {
        let (year, month) = (bar.date.year(), bar.date.month());
        match months.last_mut() {
            Some(m) if m.year == year && m.month == month => m.close = bar.close,
            _ => months.push(MonthlyClose {
                year,
                month,
                close: bar.close,
            }),
        }
    }
    months.pop();
    Ok(months)
}

/// `closes[n-1] / closes[n-1-period] - 1`.
pub fn period_return(closes: &[f64], period: usize) -> Result<f64, AnalyticsError> {
    if period == 0 {
        return Err(AnalyticsError::InvalidPeriod(period));
    }
    let n = closes.len();
    if n <= period {
        return Err(AnalyticsError::InsufficientHistory {
            needed: period + 1,
            available: n,
        });
    }
    let base = closes[n - 1 - period];
    if base <= 0.0 {
        return Err(AnalyticsError::NonPositivePrice(base));
    }
    Ok(closes[n - 1] / base - 1.0)
}

pub fn equal_weight_momentum(
    monthly: &[MonthlyClose],
    periods: &[usize],
) -> Result<f64, AnalyticsError> {
    if periods.is_empty() {
        return Err(AnalyticsError::InvalidPeriod(0));
    }
    let closes: Vec<f64> = monthly.iter().map(|m| m.close).collect();
    let mut total = 0.0;
    for &period in periods {
        total += period_return(&closes, period)?;
    }
    Ok(total / periods.len() as f64)
}

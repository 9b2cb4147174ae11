// src/analytics/drawdown.rs

use crate::config::{DROP_15_FRACTION, DROP_30_FRACTION, DROP_50_FRACTION};
use crate::error::AnalyticsError;
use serde::Serialize;
use std::fmt;

/// How far the current price sits below the previous high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DrawdownLevel {
    Drop15,
    Drop30,
    Drop50,
}

impl DrawdownLevel {
    pub fn percent(self) -> u32 {
        match self {
            DrawdownLevel::Drop15 => 15,
            DrawdownLevel::Drop30 => 30,
            DrawdownLevel::Drop50 => 50,
        }
    }
}

impl fmt::Display for DrawdownLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}%", self.percent())
    }
}

/// Highest value among the last `window` observations.
pub fn prev_max_high(highs: &[f64], window: usize) -> Result<f64, AnalyticsError> {
    if window == 0 {
        return Err(AnalyticsError::InvalidPeriod(window));
    }
    if highs.is_empty() {
        return Err(AnalyticsError::EmptyHistory);
    }
    let start = highs.len().saturating_sub(window);
    Ok(highs[start..].iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Band edges are exclusive: a price exactly on the 30 % or 50 % line raises
/// nothing.
pub fn classify(current: f64, high: f64) -> Option<DrawdownLevel> {
    let drop_15 = high * DROP_15_FRACTION;
    let drop_30 = high * DROP_30_FRACTION;
    let drop_50 = high * DROP_50_FRACTION;

    if current < drop_15 && current > drop_30 {
        Some(DrawdownLevel::Drop15)
    } else if current < drop_30 && current > drop_50 {
        Some(DrawdownLevel::Drop30)
    } else if current < drop_50 {
        Some(DrawdownLevel::Drop50)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawdownAlert {
    pub symbol: String,
    pub level: DrawdownLevel,
    pub high: f64,
    pub current: f64,
}

impl DrawdownAlert {
    pub fn new(symbol: impl Into<String>, current: f64, high: f64) -> Option<Self> {
        classify(current, high).map(|level| Self {
            symbol: symbol.into(),
            level,
            high,
            current,
        })
    }

    pub fn subject(&self) -> String {
        format!("{}% DROP PRICE ALERT - {}", self.level.percent(), self.symbol)
    }

    pub fn body(&self) -> String {
        let s = &self.symbol;
        match self.level {
            DrawdownLevel::Drop15 => format!(
                "{s} has dropped more than 15% from 52W High. It's time to consider buying some shares of it."
            ),
            DrawdownLevel::Drop30 => {
                format!("{s} has dropped more than 30% from 52W High. Should I buy more?")
            }
            DrawdownLevel::Drop50 => format!(
                "{s} has dropped more than 50% from 52W High. Definitely panic market!"
            ),
        }
    }
}

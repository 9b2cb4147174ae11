// src/analytics/screen.rs

use super::momentum::{DailyBar, equal_weight_momentum, monthly_closes};
use crate::error::AnalyticsError;
use serde::Serialize;
use statrs::statistics::Statistics;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MomentumScore {
    pub symbol: String,
    /// `None` when the history was too short or malformed.
    pub momentum: Option<f64>,
}

/// Distribution of the computed scores, used to pick a sensible threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MomentumSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; NaN for a single score.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

fn score_one(bars: &[DailyBar], periods: &[usize]) -> Result<f64, AnalyticsError> {
    let monthly = monthly_closes(bars)?;
    equal_weight_momentum(&monthly, periods)
}

/// Scores every symbol in input order. Failures are logged and kept as `None`
/// so one bad history never stops the run.
pub fn score_universe<'a, I>(histories: I, periods: &[usize]) -> Vec<MomentumScore>
where
    I: IntoIterator<Item = (&'a str, &'a [DailyBar])>,
{
    histories
        .into_iter()
        .map(|(symbol, bars)| {
            let momentum = match score_one(bars, periods) {
                Ok(m) => Some(m),
                Err(err) => {
                    warn!(symbol, %err, "momentum not computed");
                    None
                }
            };
            MomentumScore {
                symbol: symbol.to_string(),
                momentum,
            }
        })
        .collect()
}

/// Symbols whose momentum is strictly above `threshold`, in input order.
pub fn high_momentum(scores: &[MomentumScore], threshold: f64) -> Vec<&str> {
    scores
        .iter()
        .filter(|s| s.momentum.is_some_and(|m| m > threshold))
        .map(|s| s.symbol.as_str())
        .collect()
}

pub fn summarize(scores: &[MomentumScore]) -> Option<MomentumSummary> {
    let values: Vec<f64> = scores.iter().filter_map(|s| s.momentum).collect();
    if values.is_empty() {
        return None;
    }
    Some(MomentumSummary {
        count: values.len(),
        mean: values.iter().mean(),
        std_dev: values.iter().std_dev(),
        min: Statistics::min(values.iter()),
        max: Statistics::max(values.iter()),
    })
}

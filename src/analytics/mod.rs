// src/analytics/mod.rs

pub mod drawdown;
pub mod momentum;
pub mod screen;

pub use drawdown::{DrawdownAlert, DrawdownLevel, classify, prev_max_high};
pub use momentum::{DailyBar, MonthlyClose, equal_weight_momentum, monthly_closes, period_return};
pub use screen::{MomentumScore, MomentumSummary, high_momentum, score_universe, summarize};

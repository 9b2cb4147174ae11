// src/simulators/gbm.rs

use super::market_trait::Marketable;
use crate::config::{DEFAULT_DRIFT, DEFAULT_INITIAL_PRICE, DEFAULT_VOLATILITY, TRADING_DAYS_PER_YEAR};
use crate::stocks;
use rand::SeedableRng;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand_distr::StandardNormal;

/// Daily geometric Brownian motion driven by a seeded RNG, so a given seed
/// always replays the same path.
pub struct GBMSimulator {
    initial_price: f64,
    drift: f64,
    volatility: f64,
    current_price: f64,
    seed: u64,
    rng: StdRng,
}

impl GBMSimulator {
    pub fn new(initial_price: f64, drift: f64, volatility: f64, seed: u64) -> Self {
        Self {
            initial_price,
            drift,
            volatility,
            current_price: initial_price,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from the symbol text; starts at the universe reference price
    /// when the ticker is known.
    pub fn for_symbol(symbol: &str) -> Self {
        let initial_price = stocks::lookup(symbol)
            .map(|s| s.reference_price)
            .unwrap_or(DEFAULT_INITIAL_PRICE);
        Self::new(
            initial_price,
            DEFAULT_DRIFT,
            DEFAULT_VOLATILITY,
            symbol_seed(symbol),
        )
    }
}

// FNV-1a, stable across runs and platforms.
fn symbol_seed(symbol: &str) -> u64 {
    symbol.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, b| {
        (hash ^ b as u64).wrapping_mul(0x0000_0100_0000_01b3)
    })
}

impl Marketable for GBMSimulator {
    fn step(&mut self) -> f64 {
        let days = TRADING_DAYS_PER_YEAR as f64;
        let daily_drift = self.drift / days;
        let daily_volatility = self.volatility / days.sqrt();
        let dt = 1.0;
        let random_shock: f64 = StandardNormal.sample(&mut self.rng);
        let next_price = self.current_price
            * ((daily_drift - 0.5 * daily_volatility.powi(2)) * dt
                + daily_volatility * random_shock * f64::sqrt(dt))
            .exp();
        self.current_price = next_price;
        self.current_price
    }

    fn current_price(&self) -> f64 {
        self.current_price
    }

    fn reset(&mut self) {
        self.current_price = self.initial_price;
        self.rng = StdRng::seed_from_u64(self.seed);
    }
}

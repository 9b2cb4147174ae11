// src/simulators/market_trait.rs

/// A trait for any object that can simulate a market price.
/// This allows for a pluggable price source behind the watchlist.
pub trait Marketable {
    /// Advances the simulation by one time step and returns the new price.
    fn step(&mut self) -> f64;

    /// Returns the current price without advancing the simulation.
    fn current_price(&self) -> f64;

    /// Resets the simulation to its initial state.
    fn reset(&mut self);

    /// The current price followed by `days` further steps.
    fn simulate(&mut self, days: usize) -> Vec<f64> {
        let mut path = Vec::with_capacity(days + 1);
        path.push(self.current_price());
        for _ in 0..days {
            path.push(self.step());
        }
        path
    }
}

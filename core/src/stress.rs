//! Financial stress index (FSI).
//!
//! A weighted composite of inflation, interest rate and unemployment,
//! dampened when GDP growth runs above trend.

use serde::{Deserialize, Serialize};

/// Macro indicators for one simulation run, as plain percentages
/// (4.0 means 4%). Supplied by the caller; not persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroSignals {
    pub inflation:     f64,
    pub interest_rate: f64,
    pub unemployment:  f64,
    pub gdp_growth:    f64,
}

impl MacroSignals {
    pub fn fsi(&self) -> f64 {
        calculate_fsi(self.inflation, self.interest_rate, self.unemployment, self.gdp_growth)
    }
}

/// Compute the financial stress index from the four macro indicators.
///
/// Pure arithmetic, total over finite reals. GDP growth above 6%
/// dampens the raw index by 1.5% per excess point.
pub fn calculate_fsi(
    inflation: f64,
    interest_rate: f64,
    unemployment: f64,
    gdp_growth: f64,
) -> f64 {
    let raw = 0.4 * inflation + 0.3 * interest_rate + 0.3 * unemployment;
    let gdp_bonus = (gdp_growth - 6.0).max(0.0);
    let dampening = 1.0 - 0.015 * gdp_bonus;
    raw * dampening
}

//! Purchase-probability model.
//!
//! A weighted affluence/behaviour score pushed through a logistic
//! transform. Income and spend are normalized against the catalog's
//! reference extremes, which are fixed constants — never recomputed
//! from the active persona set, so a reduced catalog scores on the
//! same scale as the full one.

/// Reference maximum income across the built-in personas.
pub const REF_INCOME: f64 = 130_000.0;

/// Reference maximum historical spend across the built-in personas.
pub const REF_SPEND: f64 = 2_950.0;

const LOGISTIC_MIDPOINT: f64 = 50.0;
const LOGISTIC_STEEPNESS: f64 = 0.07;

/// Predicted purchase probability in [0, 100], rounded to 2 decimals.
///
/// `risk_tolerance` is expected in [0,1] but not re-clamped here; the
/// engine clips before calling. Pass `fsi = 0.0` to score the
/// unshocked baseline state.
pub fn predict_purchase_probability(
    income: f64,
    total_spent: f64,
    risk_tolerance: f64,
    fsi: f64,
) -> f64 {
    let raw_score = 25.0 * (income / REF_INCOME)
        + 35.0 * (total_spent / REF_SPEND)
        + 30.0 * risk_tolerance
        - 10.0 * (fsi / 10.0);

    let prob = 100.0 / (1.0 + (-LOGISTIC_STEEPNESS * (raw_score - LOGISTIC_MIDPOINT)).exp());
    round2(prob.clamp(0.0, 100.0))
}

/// Round to 2 decimal digits, the precision of every reported figure.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

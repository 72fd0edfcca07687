//! The shock composition & sampling engine — the heart of the simulator.
//!
//! PER-SAMPLE ORDER (fixed, documented, never reordered):
//!   1. Baseline (r, s, d) from the persona.
//!   2. Deterministic macro effect, scaled by cluster sensitivity.
//!   3. Manually chosen product setback (run-wide, zero triple if none).
//!   4. At most one random personal shock: one Bernoulli trial at the
//!      configured probability, then one uniform draw over the catalog.
//!   5. Clip r, s, d to [0, 1].
//!   6. Score before (baseline r, FSI = 0) and after (clipped r, run FSI).
//!
//! RULES:
//!   - All randomness flows through the RngBank, one stream per
//!     (persona, sample) unit.
//!   - Output order is persona-major, sample-index-minor, regardless of
//!     how the units would be scheduled.

use crate::{
    config::DriftConfig,
    error::SimResult,
    probability::{predict_purchase_probability, round2},
    rng::RngBank,
    stress::MacroSignals,
    types::{Cluster, Seed},
};
use serde::{Deserialize, Serialize};

/// Default number of samples per persona.
pub const DEFAULT_NUM_SAMPLES: usize = 10;

/// One stochastic outcome for one persona. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSample {
    pub sample_id:       String,
    pub cluster:         Cluster,
    /// The run's financial stress index, rounded to 2 decimals.
    pub fsi:             f64,
    /// The setback actually applied — None when the caller chose none
    /// or supplied an unrecognized key.
    pub product_setback: Option<String>,
    pub personal_shock:  Option<String>,
    pub prob_before:     f64,
    pub prob_after:      f64,
    pub delta:           f64,
}

pub struct DriftEngine {
    config:   DriftConfig,
    rng_bank: RngBank,
    seed:     Seed,
}

impl DriftEngine {
    pub fn new(config: DriftConfig, seed: Seed) -> Self {
        Self { rng_bank: RngBank::new(seed), config, seed }
    }

    /// Engine over the built-in catalog.
    pub fn builtin(seed: Seed) -> Self {
        Self::new(DriftConfig::builtin(), seed)
    }

    pub fn config(&self) -> &DriftConfig {
        &self.config
    }

    /// Run the simulation: `num_samples` outcomes per persona.
    ///
    /// Deterministic for a fixed seed and arguments; calling twice
    /// produces identical record sequences.
    pub fn run(
        &self,
        macro_signals: Option<&MacroSignals>,
        manual_product_setback: Option<&str>,
        num_samples: usize,
    ) -> SimResult<Vec<SimulationSample>> {
        let fsi = macro_signals.map(MacroSignals::fsi).unwrap_or(0.0);

        let setback = self.resolve_setback(manual_product_setback);
        let (ps_r, ps_s, ps_d) = match setback {
            Some(s) => (s.d_risk, s.d_spend, s.d_default),
            None => (0.0, 0.0, 0.0),
        };

        log::info!(
            "run: seed={} fsi={fsi:.4} setback={:?} personas={} samples={num_samples}",
            self.seed,
            setback.map(|s| s.name.as_str()),
            self.config.personas.len(),
        );

        let mut results = Vec::with_capacity(self.config.personas.len() * num_samples);

        for (persona_index, persona) in self.config.personas.iter().enumerate() {
            let coeffs = self.config.sensitivity(persona.cluster)?;

            for sample_index in 0..num_samples {
                let mut rng = self.rng_bank.for_unit(persona_index, sample_index);

                // Baseline + macro pressure + product setback.
                let mut r = persona.risk_tolerance - coeffs.alpha * fsi + ps_r;
                let mut s = persona.spending_propensity - coeffs.beta * fsi + ps_s;
                let mut d = persona.default_prob + coeffs.gamma * fsi + ps_d;

                // At most one personal shock per sample.
                let mut shock_name = None;
                if rng.chance(self.config.personal_shock_probability) {
                    let idx = rng.next_u64_below(self.config.personal_shocks.len() as u64);
                    let shock = &self.config.personal_shocks[idx as usize];
                    r += shock.d_risk;
                    s += shock.d_spend;
                    d += shock.d_default;
                    shock_name = Some(shock.name.clone());
                }

                r = r.clamp(0.0, 1.0);
                s = s.clamp(0.0, 1.0);
                d = d.clamp(0.0, 1.0);

                let prob_before = predict_purchase_probability(
                    persona.income,
                    persona.total_spent,
                    persona.risk_tolerance,
                    0.0,
                );
                let prob_after = predict_purchase_probability(
                    persona.income,
                    persona.total_spent,
                    r,
                    fsi,
                );

                log::debug!(
                    "unit=({persona_index},{sample_index}) r={r:.4} s={s:.4} d={d:.4} \
                     before={prob_before:.2} after={prob_after:.2}",
                );

                results.push(SimulationSample {
                    sample_id:       format!("{}_{sample_index}", persona.cluster),
                    cluster:         persona.cluster,
                    fsi:             round2(fsi),
                    product_setback: setback.map(|sb| sb.name.clone()),
                    personal_shock:  shock_name,
                    prob_before,
                    prob_after,
                    delta:           round2(prob_after - prob_before),
                });
            }
        }

        Ok(results)
    }

    /// Resolve the manually chosen setback against the catalog.
    /// An unrecognized key is downgraded to "no setback", but loudly:
    /// it is almost always a caller typo.
    fn resolve_setback(&self, name: Option<&str>) -> Option<&crate::config::ShockEffect> {
        let name = name?;
        match self.config.product_setback(name) {
            Some(setback) => Some(setback),
            None => {
                log::warn!("Unknown product setback '{name}' — applying no setback");
                None
            }
        }
    }
}

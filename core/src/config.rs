//! Simulation configuration: personas, sensitivities and shock catalogs.
//!
//! The tables are sealed: loaded (or built in) once at engine
//! construction and never mutated afterwards. Per-sample derived
//! values are computed into locals, never written back.

use crate::{
    error::{SimError, SimResult},
    types::Cluster,
};
use serde::{Deserialize, Serialize};

/// Default probability that a sample receives a personal shock.
pub const PERSONAL_SHOCK_PROBABILITY: f64 = 0.30;

/// A fixed customer archetype.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    pub cluster:             Cluster,
    pub label:               String,
    pub income:              f64,
    pub total_spent:         f64,
    pub age:                 u32,
    pub risk_tolerance:      f64,
    pub spending_propensity: f64,
    pub default_prob:        f64,
}

/// How strongly macro stress moves a cluster's behavioural parameters.
/// alpha drives risk tolerance, beta spending propensity, gamma
/// default probability. All non-negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SensitivityCoefficients {
    pub alpha: f64,
    pub beta:  f64,
    pub gamma: f64,
}

/// A named triple of signed deltas applied additively to
/// (risk tolerance, spending propensity, default probability).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShockEffect {
    pub name:      String,
    pub d_risk:    f64,
    pub d_spend:   f64,
    pub d_default: f64,
}

impl ShockEffect {
    fn new(name: &str, d_risk: f64, d_spend: f64, d_default: f64) -> Self {
        Self { name: name.into(), d_risk, d_spend, d_default }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SensitivityRow {
    cluster: Cluster,
    #[serde(flatten)]
    coefficients: SensitivityCoefficients,
}

/// File shape for a JSON catalog override.
#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    personas:         Vec<Persona>,
    sensitivities:    Vec<SensitivityRow>,
    personal_shocks:  Vec<ShockEffect>,
    product_setbacks: Vec<ShockEffect>,
    #[serde(default = "default_shock_probability")]
    personal_shock_probability: f64,
}

fn default_shock_probability() -> f64 {
    PERSONAL_SHOCK_PROBABILITY
}

#[derive(Debug, Clone)]
pub struct DriftConfig {
    pub personas:         Vec<Persona>,
    sensitivities:        Vec<(Cluster, SensitivityCoefficients)>,
    pub personal_shocks:  Vec<ShockEffect>,
    pub product_setbacks: Vec<ShockEffect>,
    /// Probability that any one sample draws a personal shock.
    pub personal_shock_probability: f64,
}

impl DriftConfig {
    /// The built-in sealed tables.
    pub fn builtin() -> Self {
        let personas = vec![
            Persona {
                cluster:             Cluster::C1,
                label:               "Conservative Low-Income".into(),
                income:              28_000.0,
                total_spent:         210.0,
                age:                 55,
                risk_tolerance:      0.20,
                spending_propensity: 0.25,
                default_prob:        0.18,
            },
            Persona {
                cluster:             Cluster::C2,
                label:               "Young Mid-Spender".into(),
                income:              52_000.0,
                total_spent:         780.0,
                age:                 32,
                risk_tolerance:      0.55,
                spending_propensity: 0.60,
                default_prob:        0.10,
            },
            Persona {
                cluster:             Cluster::C3,
                label:               "Affluent High-Spender".into(),
                income:              88_000.0,
                total_spent:         1_850.0,
                age:                 44,
                risk_tolerance:      0.70,
                spending_propensity: 0.75,
                default_prob:        0.05,
            },
            Persona {
                cluster:             Cluster::C4,
                label:               "Cautious Saver".into(),
                income:              45_000.0,
                total_spent:         430.0,
                age:                 48,
                risk_tolerance:      0.35,
                spending_propensity: 0.40,
                default_prob:        0.12,
            },
            Persona {
                cluster:             Cluster::C5,
                label:               "Premium Power-Buyer".into(),
                income:              130_000.0,
                total_spent:         2_950.0,
                age:                 39,
                risk_tolerance:      0.85,
                spending_propensity: 0.90,
                default_prob:        0.03,
            },
        ];

        let sensitivities = vec![
            (Cluster::C1, SensitivityCoefficients { alpha: 0.030, beta: 0.025, gamma: 0.020 }),
            (Cluster::C2, SensitivityCoefficients { alpha: 0.020, beta: 0.018, gamma: 0.015 }),
            (Cluster::C3, SensitivityCoefficients { alpha: 0.012, beta: 0.010, gamma: 0.008 }),
            (Cluster::C4, SensitivityCoefficients { alpha: 0.022, beta: 0.020, gamma: 0.017 }),
            (Cluster::C5, SensitivityCoefficients { alpha: 0.008, beta: 0.007, gamma: 0.005 }),
        ];

        let personal_shocks = vec![
            ShockEffect::new("Career Setback",           -0.15, -0.20,  0.10),
            ShockEffect::new("Health Crisis",            -0.10, -0.30,  0.15),
            ShockEffect::new("Family Transition",         0.05,  0.10, -0.02),
            ShockEffect::new("Major Windfall",            0.20,  0.25, -0.05),
            ShockEffect::new("Digital Fatigue",          -0.05, -0.10,  0.00),
            ShockEffect::new("Social Influence (FOMO)",   0.10,  0.20,  0.05),
            ShockEffect::new("Ethical Awakening",         0.00, -0.15,  0.00),
            ShockEffect::new("Educational Achievement",   0.15,  0.10, -0.05),
            ShockEffect::new("Relocation",               -0.05, -0.05,  0.02),
            ShockEffect::new("Relationship Change",      -0.10, -0.10,  0.08),
        ];

        let product_setbacks = vec![
            ShockEffect::new("Price Hike",            0.00, -0.25, 0.00),
            ShockEffect::new("Feature Obsolescence", -0.10, -0.15, 0.00),
            ShockEffect::new("Service Instability",  -0.20, -0.10, 0.00),
            ShockEffect::new("Support Friction",     -0.15, -0.05, 0.00),
        ];

        Self {
            personas,
            sensitivities,
            personal_shocks,
            product_setbacks,
            personal_shock_probability: PERSONAL_SHOCK_PROBABILITY,
        }
    }

    /// Load a catalog override from a JSON file.
    /// In tests, use DriftConfig::builtin() or default_test().
    pub fn load(path: &str) -> SimResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let file: CatalogFile = serde_json::from_str(&content)?;
        Ok(Self {
            personas:         file.personas,
            sensitivities:    file
                .sensitivities
                .into_iter()
                .map(|row| (row.cluster, row.coefficients))
                .collect(),
            personal_shocks:  file.personal_shocks,
            product_setbacks: file.product_setbacks,
            personal_shock_probability: file.personal_shock_probability,
        })
    }

    /// Config with the built-in tables but personal shocks disabled.
    /// Useful in unit tests that need a fully deterministic loop.
    pub fn default_test() -> Self {
        Self { personal_shock_probability: 0.0, ..Self::builtin() }
    }

    /// Sensitivity coefficients for a cluster.
    ///
    /// A miss is impossible with the built-in tables; it can only occur
    /// when a loaded catalog omits a row for a persona it declares.
    pub fn sensitivity(&self, cluster: Cluster) -> SimResult<SensitivityCoefficients> {
        self.sensitivities
            .iter()
            .find(|(c, _)| *c == cluster)
            .map(|(_, coeffs)| *coeffs)
            .ok_or(SimError::MissingSensitivity(cluster))
    }

    /// Look up a product setback by name. Unknown names yield None;
    /// the engine decides how loudly to report that.
    pub fn product_setback(&self, name: &str) -> Option<&ShockEffect> {
        self.product_setbacks.iter().find(|s| s.name == name)
    }
}

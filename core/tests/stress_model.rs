//! Numeric properties of the stress index and probability model,
//! checked against hand-computed scenarios.

use drift_core::{
    calculate_fsi, probability::predict_purchase_probability, Cluster, DriftConfig,
    DriftEngine, MacroSignals,
};

#[test]
fn fsi_is_zero_for_zero_signals() {
    assert_eq!(calculate_fsi(0.0, 0.0, 0.0, 0.0), 0.0);
}

#[test]
fn fsi_weighted_composite_scenario() {
    // 0.4*4.0 + 0.3*4.0 + 0.3*5.5 = 4.45; gdp below trend, no dampening.
    let fsi = calculate_fsi(4.0, 4.0, 5.5, 5.0);
    assert!((fsi - 4.45).abs() < 1e-9, "Expected FSI 4.45, got {fsi}");
}

#[test]
fn gdp_above_trend_dampens_the_index() {
    let undamped = calculate_fsi(4.0, 4.0, 5.5, 6.0);
    let damped = calculate_fsi(4.0, 4.0, 5.5, 8.0);

    // 2 points above trend: dampening factor 1 - 0.015*2 = 0.97.
    assert!((undamped - 4.45).abs() < 1e-9);
    assert!((damped - 4.45 * 0.97).abs() < 1e-9, "Expected 0.97 dampening, got {damped}");
}

#[test]
fn no_macro_signals_means_zero_fsi_in_records() {
    let engine = DriftEngine::builtin(3);
    let results = engine.run(None, None, 4).expect("run");
    assert!(results.iter().all(|r| r.fsi == 0.0));
}

#[test]
fn probability_is_bounded_for_extreme_inputs() {
    let high = predict_purchase_probability(1.0e9, 1.0e9, 1.0, 0.0);
    let low = predict_purchase_probability(0.0, 0.0, 0.0, 1.0e6);

    assert!((0.0..=100.0).contains(&high), "high={high}");
    assert!((0.0..=100.0).contains(&low), "low={low}");
}

/// Holding everything else fixed, the after-probability is
/// non-increasing in FSI.
#[test]
fn probability_is_non_increasing_in_fsi() {
    let mut previous = f64::INFINITY;
    for step in 0..40 {
        let fsi = step as f64 * 0.5;
        let prob = predict_purchase_probability(88_000.0, 1_850.0, 0.70, fsi);
        assert!(
            prob <= previous,
            "Probability rose from {previous} to {prob} at fsi={fsi}"
        );
        previous = prob;
    }
}

/// Persona C5 under FSI 4.45 with no product or personal shock:
/// r = 0.85 - 0.008*4.45 = 0.8144, clipped unchanged, and the
/// stress-penalised after-probability drops below the baseline.
#[test]
fn c5_scenario_after_probability_drops() {
    let macro_state = MacroSignals {
        inflation:     4.0,
        interest_rate: 4.0,
        unemployment:  5.5,
        gdp_growth:    5.0,
    };

    // Shock probability 0 makes the loop fully deterministic.
    let engine = DriftEngine::new(DriftConfig::default_test(), 42);
    let results = engine.run(Some(&macro_state), None, 2).expect("run");

    let c5: Vec<_> = results.iter().filter(|r| r.cluster == Cluster::C5).collect();
    assert_eq!(c5.len(), 2);

    for record in c5 {
        assert_eq!(record.fsi, 4.45);
        assert!(record.personal_shock.is_none());
        assert_eq!(record.prob_before, 92.31);
        assert_eq!(record.prob_after, 89.08);
        assert_eq!(record.delta, -3.23);
        assert!(
            record.prob_after < record.prob_before,
            "FSI penalty must dominate: {record:?}"
        );
    }
}

/// Direct check of the C5 probability endpoints.
#[test]
fn c5_probability_endpoints() {
    let before = predict_purchase_probability(130_000.0, 2_950.0, 0.85, 0.0);
    let after = predict_purchase_probability(130_000.0, 2_950.0, 0.8144, 4.45);

    assert_eq!(before, 92.31);
    assert_eq!(after, 89.08);
}

#[test]
fn catalog_file_round_trips_into_config() {
    let catalog = r#"{
        "personas": [
            {
                "cluster": "C1",
                "label": "Conservative Low-Income",
                "income": 28000.0,
                "total_spent": 210.0,
                "age": 55,
                "risk_tolerance": 0.20,
                "spending_propensity": 0.25,
                "default_prob": 0.18
            }
        ],
        "sensitivities": [
            { "cluster": "C1", "alpha": 0.030, "beta": 0.025, "gamma": 0.020 }
        ],
        "personal_shocks": [
            { "name": "Career Setback", "d_risk": -0.15, "d_spend": -0.20, "d_default": 0.10 }
        ],
        "product_setbacks": [
            { "name": "Price Hike", "d_risk": 0.0, "d_spend": -0.25, "d_default": 0.0 }
        ]
    }"#;

    let path = std::env::temp_dir().join("drift_catalog_test.json");
    std::fs::write(&path, catalog).expect("write catalog");

    let config = DriftConfig::load(path.to_str().expect("utf8 path")).expect("load catalog");
    assert_eq!(config.personas.len(), 1);
    assert_eq!(config.personal_shock_probability, 0.30);

    let engine = DriftEngine::new(config, 11);
    let results = engine.run(None, Some("Price Hike"), 3).expect("run");
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.cluster == Cluster::C1));
}

#[test]
fn unknown_cluster_code_is_rejected() {
    let err = Cluster::from_code("C9").expect_err("C9 must not parse");
    assert!(err.to_string().contains("C9"), "Error should name the bad code: {err}");
}

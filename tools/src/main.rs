//! drift-runner: headless runner for the behavioral-drift simulator.
//!
//! Usage:
//!   drift-runner --seed 12345 --samples 5 --setback "Price Hike"
//!   drift-runner --seed 12345 --inflation 4.0 --interest-rate 6.0 \
//!                --unemployment 5.5 --gdp-growth 5.0 --json

use anyhow::Result;
use drift_core::{
    summarize_by_cluster, DriftConfig, DriftEngine, MacroSignals, DEFAULT_NUM_SAMPLES,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let samples = parse_arg(&args, "--samples", DEFAULT_NUM_SAMPLES);
    let json = args.iter().any(|a| a == "--json");
    let no_macro = args.iter().any(|a| a == "--no-macro");
    let setback = args
        .windows(2)
        .find(|w| w[0] == "--setback")
        .map(|w| w[1].as_str())
        .or(Some("Price Hike"))
        .filter(|s| *s != "none");
    let catalog = args
        .windows(2)
        .find(|w| w[0] == "--catalog")
        .map(|w| w[1].as_str());

    let macro_state = MacroSignals {
        inflation:     parse_arg(&args, "--inflation", 4.0),
        interest_rate: parse_arg(&args, "--interest-rate", 6.0),
        unemployment:  parse_arg(&args, "--unemployment", 5.5),
        gdp_growth:    parse_arg(&args, "--gdp-growth", 5.0),
    };
    let macro_signals = if no_macro { None } else { Some(&macro_state) };

    let config = match catalog {
        Some(path) => DriftConfig::load(path)?,
        None => DriftConfig::builtin(),
    };

    if !json {
        println!("Behavioral Drift Simulator — drift-runner");
        println!("  seed:     {seed}");
        println!("  samples:  {samples} per persona");
        match macro_signals {
            Some(m) => println!(
                "  [Trigger] Macro stress (manual): inflation={} rate={} unemployment={} gdp={}",
                m.inflation, m.interest_rate, m.unemployment, m.gdp_growth
            ),
            None => println!("  [Trigger] Macro stress: none"),
        }
        println!("  [Trigger] Product setback (manual): {}", setback.unwrap_or("none"));
        println!("  [Engine]  Randomizing personal shocks per individual...");
        println!();
    }

    let engine = DriftEngine::new(config, seed);
    let results = engine.run(macro_signals, setback, samples)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("=== SAMPLE RESULTS (First 10) ===");
    println!("{:<8} {:<24} {:>10} {:>8}", "Sample", "Personal_Shock", "Prob_After", "Delta");
    for record in results.iter().take(10) {
        println!(
            "{:<8} {:<24} {:>10.2} {:>8.2}",
            record.sample_id,
            record.personal_shock.as_deref().unwrap_or("none"),
            record.prob_after,
            record.delta,
        );
    }

    println!();
    println!("=== AVERAGE DRIFT PER CLUSTER ===");
    println!("{:<8} {:>8} {:>10} {:>10} {:>10}", "Cluster", "Samples", "Mean", "Min", "Max");
    for summary in summarize_by_cluster(&results) {
        println!(
            "{:<8} {:>8} {:>10.2} {:>10.2} {:>10.2}",
            summary.cluster.code(),
            summary.sample_count,
            summary.mean_delta,
            summary.min_delta,
            summary.max_delta,
        );
    }

    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

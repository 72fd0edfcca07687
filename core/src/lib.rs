//! drift-core: Monte-Carlo behavioral-drift simulator.
//!
//! Given a fixed set of customer personas, a macroeconomic stress
//! state, a manually chosen product setback and randomly sampled
//! personal life-events, the engine recomputes each persona's purchase
//! probability before and after the combined shocks and emits one
//! record per (persona, sample) unit.
//!
//! RULES:
//!   - Configuration tables are sealed after construction.
//!   - All randomness flows through the RngBank; no platform RNG.
//!   - A run is deterministic for a fixed seed and arguments.

pub mod config;
pub mod engine;
pub mod error;
pub mod probability;
pub mod report;
pub mod rng;
pub mod stress;
pub mod types;

pub use config::DriftConfig;
pub use engine::{DriftEngine, SimulationSample, DEFAULT_NUM_SAMPLES};
pub use error::{SimError, SimResult};
pub use report::{summarize_by_cluster, ClusterSummary};
pub use stress::{calculate_fsi, MacroSignals};
pub use types::{Cluster, Seed};

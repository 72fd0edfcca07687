//! Cluster-level aggregation over the ordered record sequence.
//!
//! A stateless reducer, kept separate from the sampling engine so the
//! engine stays free of presentation concerns. Grouped means are
//! order-independent; the summary rows simply follow first appearance,
//! which for engine output is persona-major order.

use crate::{engine::SimulationSample, probability::round2, types::Cluster};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub cluster:      Cluster,
    pub sample_count: usize,
    pub mean_delta:   f64,
    pub min_delta:    f64,
    pub max_delta:    f64,
}

/// Mean/min/max drift per cluster, one row per cluster in first-
/// appearance order.
pub fn summarize_by_cluster(samples: &[SimulationSample]) -> Vec<ClusterSummary> {
    let mut order: Vec<Cluster> = Vec::new();
    for sample in samples {
        if !order.contains(&sample.cluster) {
            order.push(sample.cluster);
        }
    }

    order
        .into_iter()
        .map(|cluster| {
            let deltas: Vec<f64> = samples
                .iter()
                .filter(|s| s.cluster == cluster)
                .map(|s| s.delta)
                .collect();

            let sum: f64 = deltas.iter().sum();
            let min = deltas.iter().copied().fold(f64::INFINITY, f64::min);
            let max = deltas.iter().copied().fold(f64::NEG_INFINITY, f64::max);

            ClusterSummary {
                cluster,
                sample_count: deltas.len(),
                mean_delta:   round2(sum / deltas.len() as f64),
                min_delta:    min,
                max_delta:    max,
            }
        })
        .collect()
}

use crate::types::Cluster;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Unknown cluster code '{code}'")]
    UnknownCluster { code: String },

    #[error("No sensitivity coefficients configured for cluster {0}")]
    MissingSensitivity(Cluster),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;

//! Shared primitive types used across the entire simulator.

use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};

/// The master seed for a simulation run.
pub type Seed = u64;

/// One of the five fixed customer archetypes.
///
/// The set is closed: every persona, sensitivity row and output record
/// is keyed by one of these codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cluster {
    C1,
    C2,
    C3,
    C4,
    C5,
}

impl Cluster {
    pub const ALL: [Cluster; 5] =
        [Cluster::C1, Cluster::C2, Cluster::C3, Cluster::C4, Cluster::C5];

    pub fn code(&self) -> &'static str {
        match self {
            Self::C1 => "C1",
            Self::C2 => "C2",
            Self::C3 => "C3",
            Self::C4 => "C4",
            Self::C5 => "C5",
        }
    }

    /// Parse a cluster code as supplied at the CLI boundary.
    pub fn from_code(code: &str) -> SimResult<Self> {
        match code {
            "C1" => Ok(Self::C1),
            "C2" => Ok(Self::C2),
            "C3" => Ok(Self::C3),
            "C4" => Ok(Self::C4),
            "C5" => Ok(Self::C5),
            other => Err(SimError::UnknownCluster { code: other.to_string() }),
        }
    }
}

impl std::fmt::Display for Cluster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

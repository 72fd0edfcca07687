//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulator may call any platform RNG.
//! All randomness flows through UnitRng instances derived from the
//! single master seed held by the engine.
//!
//! Each (persona, sample) unit of work gets its own RNG stream, seeded
//! deterministically from (master_seed XOR unit_index). This means:
//!   - Every unit draws from an independent stream, so the output is
//!     the same no matter in which order units are computed.
//!   - Adding samples to a run never perturbs earlier samples' draws.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A deterministic RNG for a single (persona, sample) unit of work.
pub struct UnitRng {
    inner: Pcg64Mcg,
}

impl UnitRng {
    /// Create a unit RNG from the master seed and a stable unit index.
    /// The index must be unique per unit within a run.
    pub fn new(master_seed: u64, unit_index: u64) -> Self {
        let derived_seed = master_seed ^ (unit_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self { inner: Pcg64Mcg::seed_from_u64(derived_seed) }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// All unit RNGs for a single run, derived from one master seed.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    /// The stream for one (persona, sample) coordinate.
    ///
    /// The index is `persona << 32 | sample`, so a unit's stream does
    /// not depend on how many samples the run requests.
    pub fn for_unit(&self, persona_index: usize, sample_index: usize) -> UnitRng {
        let unit_index = ((persona_index as u64) << 32) | sample_index as u64;
        UnitRng::new(self.master_seed, unit_index)
    }
}

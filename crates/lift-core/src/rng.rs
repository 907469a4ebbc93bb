//! Deterministic per-elevator and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each elevator gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (slot * MIXING_CONSTANT)
//!
//! where `slot` is the elevator's registration index.  The mixing constant is
//! the 64-bit fractional part of the golden ratio, which spreads consecutive
//! slots uniformly across the seed space.  This means:
//!
//! - Cars never share RNG state, so one car's fault draws do not shift
//!   another car's.
//! - Adding elevators at the end of the fleet does not disturb the draws of
//!   existing ones: runs are reproducible as the fleet grows.
//! - Replacing the global seed is enough to get an independent run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── ElevatorRng ───────────────────────────────────────────────────────────────

/// Per-elevator deterministic RNG, used for the stochastic fault check.
///
/// Stored in a parallel `Vec<ElevatorRng>` alongside the registry's entities
/// so a state-machine call can borrow one car and its RNG at the same time.
pub struct ElevatorRng(SmallRng);

impl ElevatorRng {
    /// Seed deterministically from the run's global seed and a registry slot.
    pub fn new(global_seed: u64, slot: usize) -> Self {
        let seed = global_seed ^ (slot as u64).wrapping_mul(MIXING_CONSTANT);
        ElevatorRng(SmallRng::seed_from_u64(seed))
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    ///
    /// `p = 0` never fires and `p = 1` always fires.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        self.0.gen_bool(p)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seeded RNG for fleet-level draws.  `UuidIds` mints car ids from it.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }
}

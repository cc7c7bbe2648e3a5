//! Seeded random number generation.
//!
//! Every operator in this crate draws from an explicitly passed generator.
//! There is no process-wide RNG: a driver seeds one generator per run (or
//! per worker) with [`create_rng`] and threads it through each call.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// The generator type used by drivers, tests and benchmarks.
pub type ScxRng = StdRng;

/// Creates a deterministic generator from a seed.
///
/// Two generators created from the same seed produce identical streams,
/// so a fixed seed plus a fixed call sequence reproduces a run exactly.
pub fn create_rng(seed: u64) -> ScxRng {
    StdRng::seed_from_u64(seed)
}

/// Derives an independent seed for worker `index` from a base seed.
///
/// Uses the splitmix64 finalizer so that neighbouring indices yield
/// uncorrelated streams.
pub fn derive_seed(base: u64, index: u64) -> u64 {
    let mut z = base.wrapping_add(index.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

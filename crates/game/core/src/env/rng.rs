//! RNG oracle for deterministic random rolls.
//!
//! Combat outcomes must replay identically from a recorded seed, so the core
//! never reaches for ambient randomness. Callers derive a seed per roll with
//! [`compute_seed`] and sample through the oracle; tests bypass the oracle
//! entirely by passing literal rolls into the resolver.

/// Deterministic random source: same seed, same value.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform sample in `[0, 1)`, suitable for probability checks.
    ///
    /// Uses the top 24 bits so the value is exactly representable in f32.
    fn unit_f32(&self, seed: u64) -> f32 {
        (self.next_u32(seed) >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Random value in `[0, bound)`.
    fn bounded(&self, seed: u64, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32(seed) % bound
    }
}

/// PCG-XSH-RR random number generator.
///
/// Small state, fast, and statistically solid; each call derives its output
/// from the seed alone, which keeps the oracle stateless and `Sync` for free.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        // LCG step, then XSH-RR output permutation.
        let state = seed
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

/// Compute a per-roll seed from run-level entropy sources.
///
/// # Arguments
///
/// * `game_seed` - Base seed fixed at run start (replay anchor)
/// * `nonce` - Event sequence number, incremented per resolved attack
/// * `entity` - Acting entity id
/// * `context` - Distinguishes multiple rolls within one event
///   (`0` = crit check, `1` = drop roll, ...)
pub fn compute_seed(game_seed: u64, nonce: u64, entity: u32, context: u32) -> u64 {
    // SplitMix64/FxHash-style multiply-xor mixing with a final avalanche.
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (entity as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}

//! Deterministic random number generation.
//!
//! RULE: Nothing in the generator may call any platform RNG.
//! Every cell gets its own freshly seeded CellRng, derived only from
//! the cell's grid coordinate. This means:
//!   - Generating one cell never perturbs another cell's stream.
//!   - A cell's stream is reproducible on every target, whatever the
//!     host word size.
//!
//! Stream algorithm: rand_pcg::Pcg64Mcg (PCG XSL RR 128/64, MCG variant),
//! seeded through rand_core's `seed_from_u64`. Both are value-stable
//! across rand_core 0.6 / rand_pcg 0.3 releases.

use crate::types::{GridCoordinate, SeedCoord};
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Folds the high words of both coordinates into the packed seed.
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Pack a grid coordinate into a single 64-bit seed.
///
/// Low 32 bits of `seed_x` form the high word, low 32 bits of `seed_y`
/// the low word. The high 32 bits of both coordinates are packed the
/// same way, multiplied by the golden-ratio constant, and XORed in so
/// that coordinates beyond ±2^31 do not alias. Pure integer arithmetic
/// on fixed-width types; no `usize` anywhere.
pub fn pack_seed(seed_x: SeedCoord, seed_y: SeedCoord) -> u64 {
    let low = ((seed_x as u32 as u64) << 32) | (seed_y as u32 as u64);
    let high = (((seed_x >> 32) as u32 as u64) << 32) | ((seed_y >> 32) as u32 as u64);
    low ^ high.wrapping_mul(GOLDEN_GAMMA)
}

/// A deterministic RNG for a single grid cell.
pub struct CellRng {
    pub coord: GridCoordinate,
    inner: Pcg64Mcg,
}

impl CellRng {
    pub fn new(coord: GridCoordinate) -> Self {
        Self {
            coord,
            inner: Pcg64Mcg::seed_from_u64(pack_seed(coord.seed_x, coord.seed_y)),
        }
    }

    /// Roll a float in [0.0, 1.0) from the top 53 bits of one draw.
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Roll a u64 in [0, n), exactly uniform.
    ///
    /// Draws landing in the short tail of the u64 range are rejected
    /// and redrawn, so every outcome has the same probability.
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        // 2^64 mod n: the size of the biased tail.
        let threshold = n.wrapping_neg() % n;
        loop {
            let r = self.inner.next_u64();
            if r >= threshold {
                return r % n;
            }
        }
    }

    /// Roll an integer in [lo, hi] inclusive.
    pub fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        assert!(lo <= hi, "empty range {lo}..={hi}");
        let span = (hi - lo) as u64 + 1;
        lo + self.next_u64_below(span) as u32
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform choice from a non-empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let index = self.next_u64_below(items.len() as u64) as usize;
        &items[index]
    }
}

use std::ops::Range;

use rand::Rng as _;

/// Source of uniformly distributed floats.
///
/// Descriptor generation draws every random parameter through this trait, so tests can
/// inject [`SplitMix64`] (or their own source) and assert exact outputs.
pub trait RandomSource {
    /// Draw a value uniformly from the half-open `range`.
    ///
    /// An empty or non-finite range yields `range.start`.
    fn next_f64(&mut self, range: Range<f64>) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self, range: Range<f64>) -> f64 {
        (**self).next_f64(range)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_f64(&mut self, range: Range<f64>) -> f64 {
        (**self).next_f64(range)
    }
}

fn is_sampleable(range: &Range<f64>) -> bool {
    range.start.is_finite() && range.end.is_finite() && range.start < range.end
}

/// Thread-local OS-seeded generator, used in production.
pub struct ThreadRandom {
    rng: rand::rngs::ThreadRng,
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl std::fmt::Debug for ThreadRandom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThreadRandom").finish_non_exhaustive()
    }
}

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self, range: Range<f64>) -> f64 {
        if !is_sampleable(&range) {
            return range.start;
        }
        self.rng.gen_range(range)
    }
}

/// Deterministic SplitMix64 generator.
///
/// Identical seeds produce identical sequences on every platform.
#[derive(Clone, Copy, Debug)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Build a generator from `seed`.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Next value in `[0, 1)` with 53 bits of precision.
    pub fn next_unit(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

impl RandomSource for SplitMix64 {
    fn next_f64(&mut self, range: Range<f64>) -> f64 {
        if !is_sampleable(&range) {
            return range.start;
        }
        let v = range.start + (range.end - range.start) * self.next_unit();
        // Rounding can land exactly on `end` for units close to 1.
        if v < range.end { v } else { range.start }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/random.rs"]
mod tests;
